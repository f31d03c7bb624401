//! Menu Bar Component
//!
//! Top navigation. The right-hand side follows the signed-in user.

use leptos::prelude::*;
use recipe_core::Route;

use crate::context::use_app_context;

#[component]
pub fn MenuBar() -> impl IntoView {
    let ctx = use_app_context();
    let signed_in = move || ctx.current_user.with(Option::is_some);
    let username = move || {
        ctx.current_user
            .with(|user| user.as_ref().map(|u| u.username.clone()).unwrap_or_default())
    };

    view! {
        <nav class="menu-bar">
            <a class="menu-brand" href=Route::Home.hash()>"Recipes"</a>
            <a href=Route::Search.hash()>"Search"</a>
            <a href=Route::NewRecipe.hash()>"New Recipe"</a>
            <span class="menu-spacer"></span>
            <Show
                when=signed_in
                fallback=|| view! {
                    <a href=Route::NewUser.hash()>"Sign Up"</a>
                    <a href=Route::Login.hash()>"Log In"</a>
                }
            >
                <span class="menu-user">{username}</span>
                <button type="button" class="btn btn-link" on:click=move |_| ctx.logout()>
                    "Log Out"
                </button>
            </Show>
        </nav>
    }
}
