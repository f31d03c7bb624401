//! Delete Confirm Button Component
//!
//! Two-step delete: the first click asks, the second one commits.

use leptos::prelude::*;

/// Shows `label` initially; clicking it swaps in "Delete?" with ✓/✗.
///
/// # Arguments
/// * `label` - Text of the initial button
/// * `disabled` - Greys out the initial button while a request is pending
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class="btn btn-danger"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.prevent_default();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
