//! Form Fields
//!
//! Labelled inputs with an inline error line. Values pass through the
//! field's [`InputKind`] normalization before reaching the form.

use leptos::prelude::*;
use recipe_core::validation::InputKind;
use wasm_bindgen::JsCast;

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional)] kind: InputKind,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] error: MaybeProp<String>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field" class:has-error=move || error.get().is_some()>
            <label for=id.clone()>{label}</label>
            <input
                id=id.clone()
                name=id
                type=kind.as_str()
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| on_input.run(kind.normalize(&event_target_value(&ev)))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] error: MaybeProp<String>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field" class:has-error=move || error.get().is_some()>
            <label for=id.clone()>{label}</label>
            <textarea
                id=id.clone()
                name=id
                rows="4"
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError error=error />
        </div>
    }
}

#[component]
fn FieldError(error: MaybeProp<String>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <small class="field-error">{move || error.get().unwrap_or_default()}</small>
        </Show>
    }
}

/// Move keyboard focus to the element with `id`, if it is on the page
pub fn focus_field(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match element {
        Some(el) => {
            if el.focus().is_err() {
                log::debug!("could not focus #{}", id);
            }
        }
        None => log::debug!("no element #{} to focus", id),
    }
}
