//! Pages
//!
//! One component per route. Each page owns its controller in a signal that
//! lives exactly as long as the page is shown.

mod home;
mod login;
mod new_user;
mod recipe_edit;
mod recipe_view;
mod search;

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::controller::{AuthForm, RecipeController};
use recipe_core::validation::Field;
use recipe_core::Route;

use crate::components::focus_field;
use crate::context::AppContext;

pub use home::HomePage;
pub use login::LoginPage;
pub use new_user::NewUserPage;
pub use recipe_edit::RecipeEditPage;
pub use recipe_view::RecipeViewPage;
pub use search::SearchPage;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"Page not found"</h1>
            <a href=Route::Home.hash()>"Back to recipes"</a>
        </section>
    }
}

/// Fetch the recipe a Loading controller is waiting for
pub(crate) fn load_recipe(ctx: AppContext, controller: RwSignal<RecipeController>) {
    let Some(id) = controller.with_untracked(RecipeController::pending_load) else {
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        use recipe_core::api::RecipeApi;

        let result = api.get_recipe(id).await;
        if let Err(err) = &result {
            ctx.report(err);
        }
        controller.try_update(|c| c.complete_load(result));
    });
}

/// Focus the input behind the first field error
pub(crate) fn focus_invalid(field: Option<Field>) {
    if let Some(field) = field {
        focus_field(field.as_str());
    }
}

/// Error line for one field of a signup/login form
pub(crate) fn auth_field_error<F>(controller: RwSignal<AuthForm<F>>, field: Field) -> Signal<Option<String>>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || controller.with(|c| c.error_for(field).map(|e| e.message())))
}

/// Backend error banner text for a signup/login form
pub(crate) fn auth_last_error<F>(controller: RwSignal<AuthForm<F>>) -> Signal<Option<String>>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || controller.with(|c| c.last_error().map(|e| e.to_string())))
}
