//! Page Controllers
//!
//! State machines behind the pages. Each network action is split in two:
//! `prepare_*` checks local state and hands back the request to send, and
//! `complete_*` applies the response. The UI awaits the network between the
//! two without keeping the controller borrowed; the `async` helpers chain
//! both halves for callers that can hold `&mut self` across the await.

mod auth;
mod recipe;
mod search;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::validation::ValidationError;

pub use auth::{AuthForm, LoginController, NewUserController};
pub use recipe::{ListKind, RecipeController, RecipeForm, RecipeState, SubmitRequest};
pub use search::{SearchController, SearchRequest};

/// Why a submit never reached the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Field errors; the page focuses the first one
    Invalid(Vec<ValidationError>),
    /// A request from this form is still outstanding
    Busy,
    /// The form is not in an editable state (still loading, or finished)
    NotReady,
}

impl fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitBlocked::Invalid(errors) => write!(f, "{} field error(s)", errors.len()),
            SubmitBlocked::Busy => f.write_str("request already in flight"),
            SubmitBlocked::NotReady => f.write_str("form is not ready"),
        }
    }
}
