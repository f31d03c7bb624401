//! Domain Layer
//!
//! Form-backing objects and the JSON shapes exchanged with the backend.
//! No I/O lives here.

mod credentials;
mod recipe;
mod search;
mod serde_ext;
mod user;

pub use credentials::{CredentialsContext, LoginForm, NewUserForm, UserCredentials, UserData};
pub use recipe::{Recipe, RecipeId};
pub use search::{RecipeSummary, SearchPage, SearchQuery};
pub use user::UserInfo;
