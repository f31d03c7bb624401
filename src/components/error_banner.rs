use leptos::prelude::*;

/// Network/backend error line above a form; hidden when `message` is `None`
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="error-banner" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
