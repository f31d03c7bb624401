//! Recipe Book Frontend App
//!
//! Hash router: the page shown follows `location.hash`.

use leptos::ev;
use leptos::prelude::*;
use recipe_core::{ClientConfig, Route};

use crate::components::MenuBar;
use crate::context::AppContext;
use crate::pages::{
    HomePage, LoginPage, NewUserPage, NotFoundPage, RecipeEditPage, RecipeViewPage, SearchPage,
};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Links are plain `#/...` anchors; follow them here
    let _ = window_event_listener(ev::hashchange, move |_| ctx.sync_route());

    ctx.refresh_user();

    view! {
        <div class="app-layout">
            <MenuBar />
            <main class="main-content">
                {move || match ctx.route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Search => view! { <SearchPage /> }.into_any(),
                    Route::NewUser => view! { <NewUserPage /> }.into_any(),
                    Route::Login => view! { <LoginPage /> }.into_any(),
                    Route::NewRecipe => view! { <RecipeEditPage id=None /> }.into_any(),
                    Route::ViewRecipe(id) => view! { <RecipeViewPage id=id /> }.into_any(),
                    Route::EditRecipe(id) => view! { <RecipeEditPage id=Some(id) /> }.into_any(),
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
