use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::controller::{LoginController, SubmitBlocked};
use recipe_core::validation::{Field, InputKind};
use recipe_core::Route;

use super::{auth_field_error, auth_last_error, focus_invalid};
use crate::components::{Disclaimer, ErrorBanner, TextField};
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let controller = RwSignal::new(LoginController::default());
    let busy = Signal::derive(move || controller.with(LoginController::is_busy));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let body = match controller.try_update(|c| c.prepare_submit()) {
            Some(Ok(body)) => body,
            Some(Err(SubmitBlocked::Invalid(_))) => {
                focus_invalid(controller.with_untracked(LoginController::first_invalid));
                return;
            }
            _ => return,
        };
        let (api, session) = (ctx.api(), ctx.session());
        spawn_local(async move {
            let result = match session.login(&api, &body).await {
                Ok(user) => {
                    ctx.set_user(user);
                    Ok(())
                }
                Err(err) => {
                    ctx.report(&err);
                    Err(err)
                }
            };
            if let Some(Some(next)) = controller.try_update(|c| c.complete_submit(result, Route::Home)) {
                ctx.navigate(next);
            }
        });
    };

    view! {
        <section class="page login">
            <h1>"Log In"</h1>
            <ErrorBanner message=auth_last_error(controller) />
            <form on:submit=on_submit novalidate=true>
                <TextField
                    id=Field::Username.as_str()
                    label="Username"
                    value=Signal::derive(move || controller.with(|c| c.form().username.clone()))
                    on_input=move |v: String| controller.update(|c| c.form_mut().username = v)
                    error=auth_field_error(controller, Field::Username)
                    disabled=busy
                />
                <TextField
                    id=Field::Password.as_str()
                    label="Password"
                    kind=InputKind::Password
                    value=Signal::derive(move || controller.with(|c| c.form().password.clone()))
                    on_input=move |v: String| controller.update(|c| c.form_mut().password = v)
                    error=auth_field_error(controller, Field::Password)
                    disabled=busy
                />
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        "Log In"
                    </button>
                    <a href=Route::NewUser.hash()>"Need an account?"</a>
                </div>
            </form>
            <Disclaimer />
        </section>
    }
}
