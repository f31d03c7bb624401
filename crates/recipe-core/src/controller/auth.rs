//! Signup and Login Forms
//!
//! Validate, send, then hand back the next page. Signup lands on the login
//! page; a successful login refreshes the session user and goes home.

use super::SubmitBlocked;
use crate::api::UserApi;
use crate::domain::{LoginForm, NewUserForm};
use crate::error::{ApiError, ApiResult};
use crate::route::Route;
use crate::session::Session;
use crate::validation::{self, Field, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm<F> {
    form: F,
    errors: Vec<ValidationError>,
    last_error: Option<ApiError>,
    busy: bool,
}

pub type LoginController = AuthForm<LoginForm>;
pub type NewUserController = AuthForm<NewUserForm>;

impl<F: Default> Default for AuthForm<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> AuthForm<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            errors: Vec::new(),
            last_error: None,
            busy: false,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        validation::error_for(&self.errors, field)
    }

    /// Input to focus after a rejected submit
    pub fn first_invalid(&self) -> Option<Field> {
        validation::first_invalid(&self.errors)
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Apply the backend's answer; on success, the page to show next
    pub fn complete_submit(&mut self, result: ApiResult<()>, next: Route) -> Option<Route> {
        self.busy = false;
        match result {
            Ok(()) => Some(next),
            Err(err) => {
                log::error!("account request failed: {}", err);
                self.last_error = Some(err);
                None
            }
        }
    }
}

impl<F: Validate + Clone> AuthForm<F> {
    /// Re-run validation; returns the body to send when clean
    pub fn prepare_submit(&mut self) -> Result<F, SubmitBlocked> {
        if self.busy {
            return Err(SubmitBlocked::Busy);
        }
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            log::warn!("form submit rejected: {} field error(s)", self.errors.len());
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }
        self.busy = true;
        self.last_error = None;
        Ok(self.form.clone())
    }
}

impl AuthForm<NewUserForm> {
    pub async fn submit<A: UserApi + ?Sized>(&mut self, api: &A) -> Option<Route> {
        let body = self.prepare_submit().ok()?;
        let result = api.create_user(&body).await;
        self.complete_submit(result, Route::Login)
    }
}

impl AuthForm<LoginForm> {
    pub async fn submit<A: UserApi + ?Sized>(&mut self, session: &Session, api: &A) -> Option<Route> {
        let body = self.prepare_submit().ok()?;
        let result = session.login(api, &body).await.map(|_| ());
        self.complete_submit(result, Route::Home)
    }
}
