//! Cookie Disclaimer
//!
//! Static text from the backend, fetched once per session, with a
//! built-in fallback.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn Disclaimer() -> impl IntoView {
    let ctx = use_app_context();
    let (text, set_text) = signal(String::new());

    let (api, session) = (ctx.api(), ctx.session());
    spawn_local(async move {
        let disclaimer = session.disclaimer(&api).await;
        let _ = set_text.try_set(disclaimer);
    });

    view! {
        <p class="disclaimer">{move || text.get()}</p>
    }
}
