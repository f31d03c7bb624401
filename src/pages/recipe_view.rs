//! Recipe Detail Page

use leptos::prelude::*;
use recipe_core::controller::{RecipeController, RecipeForm, RecipeState};
use recipe_core::{ApiError, EditableList, Route};

use super::load_recipe;
use crate::components::{ErrorBanner, Notice};
use crate::context::use_app_context;

#[component]
pub fn RecipeViewPage(id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let controller = RwSignal::new(RecipeController::for_id(id));
    load_recipe(ctx, controller);

    let error = Signal::derive(move || controller.with(|c| c.last_error().map(|e| e.to_string())));
    let loaded = move || controller.with(|c| c.state() != RecipeState::Loading);
    let form = move || controller.with(|c| c.form().clone());
    let missing = move || controller.with(|c| matches!(c.last_error(), Some(ApiError::NotFound)));

    view! {
        <section class="page recipe-view">
            <Show when=missing fallback=move || view! { <ErrorBanner message=error /> }>
                <Notice
                    title="Recipe not found"
                    message=format!("There is no recipe {}.", id)
                    next=Route::Home
                    error=true
                />
            </Show>
            <Show
                when=loaded
                fallback=move || (!missing()).then(|| view! { <p class="loading">"Now Loading..."</p> })
            >
                {move || render_recipe(form())}
                <div class="form-actions">
                    <a class="btn btn-primary" href=Route::EditRecipe(id).hash()>"Edit"</a>
                    <a class="btn" href=Route::Home.hash()>"Back"</a>
                </div>
            </Show>
        </section>
    }
}

fn render_recipe(recipe: RecipeForm) -> impl IntoView {
    let servings = recipe.servings.map(|n| n.to_string()).unwrap_or_default();
    let note = (!recipe.note.is_empty()).then(|| {
        view! {
            <h2>"Note"</h2>
            <p class="recipe-note">{recipe.note.clone()}</p>
        }
    });
    view! {
        <h1>{recipe.name}</h1>
        <dl class="recipe-facts">
            <dt>"Prep time"</dt>
            <dd>{recipe.prep_time}</dd>
            <dt>"Cook time"</dt>
            <dd>{recipe.cook_time}</dd>
            <dt>"Servings"</dt>
            <dd>{servings}</dd>
        </dl>
        <h2>"Ingredients"</h2>
        <ul class="recipe-ingredients">{list_items(&recipe.ingredients)}</ul>
        <h2>"Steps"</h2>
        <ol class="recipe-steps">{list_items(&recipe.steps)}</ol>
        <h2>"Tags"</h2>
        <ul class="recipe-tags">{list_items(&recipe.tags)}</ul>
        {note}
    }
}

fn list_items(list: &EditableList) -> impl IntoView {
    list.rows()
        .into_iter()
        .filter(|row| !row.text.is_empty())
        .map(|row| view! { <li>{row.text}</li> })
        .collect_view()
}
