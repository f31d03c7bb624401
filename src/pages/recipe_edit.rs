//! Recipe Edit Page
//!
//! Shared by `#/recipe/new` and `#/recipe/{id}/edit`. Inputs stay disabled
//! while the recipe loads or a save/delete is in flight.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::api::RecipeApi;
use recipe_core::controller::{ListKind, RecipeController, RecipeForm, RecipeState, SubmitBlocked};
use recipe_core::validation::{self, normalize_number, Field, InputKind};
use recipe_core::{ListEdit, Route};

use super::{focus_invalid, load_recipe};
use crate::components::{focus_field, DeleteConfirmButton, ErrorBanner, ListEditor, TextArea, TextField};
use crate::context::use_app_context;

#[component]
pub fn RecipeEditPage(id: Option<i64>) -> impl IntoView {
    let ctx = use_app_context();
    let controller = RwSignal::new(RecipeController::for_route_id(id));
    load_recipe(ctx, controller);

    let locked = Signal::derive(move || !controller.with(RecipeController::is_interactive));
    let field = move |read: fn(&RecipeForm) -> String| {
        Signal::derive(move || controller.with(|c| read(c.form())))
    };
    let field_error = move |field: Field| {
        Signal::derive(move || {
            controller.with(|c| validation::error_for(c.errors(), field).map(|e| e.message()))
        })
    };
    let banner = Signal::derive(move || controller.with(|c| c.last_error().map(|e| e.to_string())));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match controller.try_update(|c| c.prepare_submit()) {
            Some(Ok(request)) => request,
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                let field = validation::first_invalid(&errors);
                // list errors land on the first row
                match field.and_then(ListKind::for_field) {
                    Some(kind) => {
                        if let Some(id) = controller.with_untracked(|c| c.form().row_input_id(kind, 0)) {
                            focus_field(&id);
                        }
                    }
                    None => focus_invalid(field),
                }
                return;
            }
            Some(Err(blocked)) => {
                log::debug!("submit ignored: {}", blocked);
                return;
            }
            None => return,
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = request.send(&api).await;
            if let Err(err) = &result {
                ctx.report(err);
            }
            if let Some(Some(next)) = controller.try_update(|c| c.complete_submit(result)) {
                ctx.navigate(next);
            }
        });
    };

    let on_delete = move |_: ()| {
        let Some(Some(id)) = controller.try_update(RecipeController::prepare_delete) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.delete_recipe(id).await;
            if let Err(err) = &result {
                ctx.report(err);
            }
            if let Some(Some(next)) = controller.try_update(|c| c.complete_delete(result)) {
                ctx.navigate(next);
            }
        });
    };

    let list_editor = move |kind: ListKind| {
        let list = Signal::derive(move || controller.with(|c| c.form().list(kind).clone()));
        let on_edit = move |edit: ListEdit| {
            controller.update(|c| {
                if let Some(form) = c.form_mut() {
                    form.list_mut(kind).apply(edit);
                }
            })
        };
        let error = field_error(kind.field());
        view! { <ListEditor kind=kind list=list on_edit=on_edit disabled=locked error=error /> }
    };

    let (title, save_label) = match id {
        Some(_) => ("Edit Recipe", "Save"),
        None => ("New Recipe", "Create"),
    };
    let cancel_to = id.map(Route::ViewRecipe).unwrap_or(Route::Home);

    view! {
        <section class="page recipe-edit">
            <h1>{title}</h1>
            <ErrorBanner message=banner />
            <Show when=move || controller.with(|c| c.state() == RecipeState::Loading)>
                <p class="loading">"Now Loading..."</p>
            </Show>
            <form on:submit=on_submit novalidate=true>
                <TextField
                    id=Field::Name.as_str()
                    label="Name"
                    value=field(|f| f.name.clone())
                    on_input=move |v: String| edit(controller, |f| f.name = v)
                    error=field_error(Field::Name)
                    disabled=locked
                />
                <TextField
                    id="prepTime"
                    label="Prep time"
                    value=field(|f| f.prep_time.clone())
                    on_input=move |v: String| edit(controller, |f| f.prep_time = v)
                    disabled=locked
                />
                <TextField
                    id="cookTime"
                    label="Cook time"
                    value=field(|f| f.cook_time.clone())
                    on_input=move |v: String| edit(controller, |f| f.cook_time = v)
                    disabled=locked
                />
                <TextField
                    id="servings"
                    label="Servings"
                    kind=InputKind::Number
                    value=field(|f| f.servings.map(|n| n.to_string()).unwrap_or_default())
                    on_input=move |v: String| edit(controller, |f| f.servings = normalize_number(&v))
                    disabled=locked
                />
                {list_editor(ListKind::Ingredients)}
                {list_editor(ListKind::Steps)}
                {list_editor(ListKind::Tags)}
                <TextArea
                    id="note"
                    label="Note"
                    value=field(|f| f.note.clone())
                    on_input=move |v: String| edit(controller, |f| f.note = v)
                    disabled=locked
                />
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || locked.get()>
                        {save_label}
                    </button>
                    <a class="btn" href=cancel_to.hash()>"Cancel"</a>
                    <Show when=move || controller.with(|c| !c.is_new())>
                        <DeleteConfirmButton
                            label="Delete"
                            disabled=Signal::derive(move || !controller.with(RecipeController::can_delete))
                            on_confirm=on_delete
                        />
                    </Show>
                </div>
            </form>
        </section>
    }
}

/// Apply an input to the form; ignored unless the recipe is editable
fn edit(controller: RwSignal<RecipeController>, apply: impl FnOnce(&mut RecipeForm)) {
    controller.update(|c| {
        if let Some(form) = c.form_mut() {
            apply(form);
        }
    });
}
