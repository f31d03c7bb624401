//! Recipe Book Core
//!
//! Platform-independent logic behind the recipe book pages:
//! - domain: form-backing objects and wire types
//! - validation: field rules for credentials and recipes
//! - list: reorderable list editing for ingredients, steps and tags
//! - api: async REST seams and the `reqwest` client
//! - controller: page state machines (recipe lifecycle, search, auth forms)
//! - session: explicitly passed caches for the current user and static text

pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod list;
pub mod route;
pub mod session;
pub mod validation;

pub use config::{ClientConfig, StaleResponsePolicy};
pub use error::{ApiError, ApiResult, ConfigError, FormError};
pub use list::{EditableList, ListEdit, ListRow};
pub use route::Route;
pub use session::{Cached, Session};
