//! Signup Page
//!
//! On success a notice thanks the user and moves on to the login page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::api::UserApi;
use recipe_core::controller::{NewUserController, SubmitBlocked};
use recipe_core::validation::{Field, InputKind};
use recipe_core::Route;

use super::{auth_field_error, auth_last_error, focus_invalid};
use crate::components::{Disclaimer, ErrorBanner, Notice, TextField};
use crate::context::use_app_context;

#[component]
pub fn NewUserPage() -> impl IntoView {
    let ctx = use_app_context();
    let controller = RwSignal::new(NewUserController::default());
    let (created, set_created) = signal::<Option<Route>>(None);
    let busy = Signal::derive(move || controller.with(NewUserController::is_busy));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let body = match controller.try_update(|c| c.prepare_submit()) {
            Some(Ok(body)) => body,
            Some(Err(SubmitBlocked::Invalid(_))) => {
                focus_invalid(controller.with_untracked(NewUserController::first_invalid));
                return;
            }
            _ => return,
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.create_user(&body).await;
            if let Err(err) = &result {
                ctx.report(err);
            }
            if let Some(Some(next)) = controller.try_update(|c| c.complete_submit(result, Route::Login)) {
                let _ = set_created.try_set(Some(next));
            }
        });
    };

    let form = move || view! {
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
                id=Field::Email.as_str()
                label="Email"
                kind=InputKind::Email
                value=Signal::derive(move || controller.with(|c| c.form().email.clone()))
                on_input=move |v: String| controller.update(|c| c.form_mut().email = v)
                error=auth_field_error(controller, Field::Email)
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
            <TextField
                id=Field::VerifyPassword.as_str()
                label="Verify Password"
                kind=InputKind::Password
                value=Signal::derive(move || controller.with(|c| c.form().verify_password.clone()))
                on_input=move |v: String| controller.update(|c| c.form_mut().verify_password = v)
                error=auth_field_error(controller, Field::VerifyPassword)
                disabled=busy
            />
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    "Create Account"
                </button>
                <a href=Route::Login.hash()>"Already registered?"</a>
            </div>
        </form>
    };

    view! {
        <section class="page new-user">
            <h1>"Sign Up"</h1>
            {move || match created.get() {
                Some(next) => view! {
                    <Notice
                        title="Account created"
                        message="Your account is ready. Taking you to the login page."
                        next=next
                    />
                }
                .into_any(),
                None => form().into_any(),
            }}
            <Disclaimer />
        </section>
    }
}
