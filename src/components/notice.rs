//! Notice Component
//!
//! Success or error message that moves on to another page after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::Route;

use crate::context::use_app_context;

#[component]
pub fn Notice(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    next: Route,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let delay = ctx.config().notice_redirect_ms;
    // disposed with the component
    let live = StoredValue::new(());

    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        // the user may have navigated away on their own
        if live.try_with_value(|_| ()).is_some() {
            ctx.navigate(next);
        }
    });

    let class = if error { "notice notice-error" } else { "notice notice-success" };
    view! {
        <div class=class>
            <h2>{title}</h2>
            <p>{message}</p>
            <a href=next.hash()>"Continue"</a>
        </div>
    }
}
