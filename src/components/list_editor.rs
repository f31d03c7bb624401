//! List Editor Component
//!
//! Ordered free-text rows with add, remove and reorder buttons. Rows are
//! keyed by position and read their [`ListRow`](recipe_core::ListRow)
//! reactively, so an input keeps focus while its text changes.

use leptos::prelude::*;
use recipe_core::controller::ListKind;
use recipe_core::{EditableList, ListEdit};

#[component]
pub fn ListEditor(
    kind: ListKind,
    #[prop(into)] list: Signal<EditableList>,
    #[prop(into)] on_edit: Callback<ListEdit>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into, optional)] error: MaybeProp<String>,
) -> impl IntoView {
    let positions = move || (0..list.with(EditableList::len)).collect::<Vec<_>>();

    view! {
        <fieldset class="list-editor" class:has-error=move || error.get().is_some()>
            <legend>{kind.title()}</legend>
            <ol class="list-rows">
                <For
                    each=positions
                    key=|index| *index
                    children=move |index| view! {
                        <ListEditorRow kind=kind index=index list=list on_edit=on_edit disabled=disabled />
                    }
                />
            </ol>
            <button
                type="button"
                class="row-btn row-add"
                disabled=move || disabled.get()
                on:click=move |_| on_edit.run(ListEdit::Append)
            >
                "+"
            </button>
            <Show when=move || error.get().is_some()>
                <small class="field-error">{move || error.get().unwrap_or_default()}</small>
            </Show>
        </fieldset>
    }
}

#[component]
fn ListEditorRow(
    kind: ListKind,
    index: usize,
    list: Signal<EditableList>,
    on_edit: Callback<ListEdit>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let row = Memo::new(move |_| list.with(|l| l.row(index)));
    let (input_id, label) = row
        .with_untracked(|r| r.as_ref().map(|r| (r.input_id(kind.name()), r.label())))
        .unwrap_or_default();
    let text = move || row.with(|r| r.as_ref().map(|r| r.text.clone()).unwrap_or_default());
    let can_remove = move || row.with(|r| r.as_ref().is_some_and(|r| r.can_remove));
    let can_up = move || row.with(|r| r.as_ref().is_some_and(|r| r.can_move_up));
    let can_down = move || row.with(|r| r.as_ref().is_some_and(|r| r.can_move_down));

    view! {
        <li class="list-row">
            <label for=input_id.clone()>{label}</label>
            <textarea
                id=input_id.clone()
                name=input_id
                rows="2"
                prop:value=text
                disabled=move || disabled.get()
                on:input=move |ev| on_edit.run(ListEdit::Set(index, event_target_value(&ev)))
            ></textarea>
            <span class="row-controls">
                <Show when=can_remove>
                    <button
                        type="button"
                        class="row-btn"
                        title="Remove"
                        disabled=move || disabled.get()
                        on:click=move |_| on_edit.run(ListEdit::Remove(index))
                    >
                        "−"
                    </button>
                </Show>
                <Show when=can_up>
                    <button
                        type="button"
                        class="row-btn"
                        title="Move up"
                        disabled=move || disabled.get()
                        on:click=move |_| on_edit.run(ListEdit::MoveUp(index))
                    >
                        "▲"
                    </button>
                </Show>
                <Show when=can_down>
                    <button
                        type="button"
                        class="row-btn"
                        title="Move down"
                        disabled=move || disabled.get()
                        on:click=move |_| on_edit.run(ListEdit::MoveDown(index))
                    >
                        "▼"
                    </button>
                </Show>
            </span>
        </li>
    }
}
