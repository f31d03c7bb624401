//! Backend API
//!
//! Async seams for the REST backend. Pages and controllers depend on these
//! traits; [`HttpApi`] is the production implementation.
//!
//! Futures are `?Send`: in the browser they run on the single JS thread.

mod http;

use async_trait::async_trait;

use crate::domain::{LoginForm, NewUserForm, Recipe, RecipeId, SearchPage, SearchQuery, UserInfo};
use crate::error::ApiResult;

pub use http::HttpApi;

/// Recipe CRUD and search
#[async_trait(?Send)]
pub trait RecipeApi {
    /// `GET /api/v1/recipe/{id}`
    async fn get_recipe(&self, id: i64) -> ApiResult<Recipe>;

    /// `POST /api/v1/recipe`
    async fn create_recipe(&self, recipe: &Recipe) -> ApiResult<RecipeId>;

    /// `PUT /api/v1/recipe/{id}`
    async fn update_recipe(&self, id: i64, recipe: &Recipe) -> ApiResult<RecipeId>;

    /// `DELETE /api/v1/recipe/{id}`
    async fn delete_recipe(&self, id: i64) -> ApiResult<()>;

    /// `GET /api/v1/recipe/list?q=&siz=&num=`
    async fn list_recipes(&self, query: &SearchQuery) -> ApiResult<SearchPage>;
}

/// Account endpoints
#[async_trait(?Send)]
pub trait UserApi {
    /// `POST /api/v1/user/create`
    async fn create_user(&self, form: &NewUserForm) -> ApiResult<()>;

    /// `POST /api/v1/user/login`
    async fn login(&self, form: &LoginForm) -> ApiResult<()>;

    /// `POST /api/v1/user/logout`
    async fn logout(&self) -> ApiResult<()>;

    /// `GET /api/v1/whoami`; `Unauthorized` without a session
    async fn whoami(&self) -> ApiResult<UserInfo>;
}

/// Static page text
#[async_trait(?Send)]
pub trait ContentApi {
    /// `GET /api/v1/static`
    async fn static_text(&self) -> ApiResult<String>;
}

/// Endpoint paths, relative to the API origin
pub mod paths {
    pub const RECIPE: &str = "/api/v1/recipe";
    pub const RECIPE_LIST: &str = "/api/v1/recipe/list";
    pub const USER_CREATE: &str = "/api/v1/user/create";
    pub const USER_LOGIN: &str = "/api/v1/user/login";
    pub const USER_LOGOUT: &str = "/api/v1/user/logout";
    pub const WHOAMI: &str = "/api/v1/whoami";
    pub const STATIC: &str = "/api/v1/static";

    pub fn recipe(id: i64) -> String {
        format!("{}/{}", RECIPE, id)
    }
}
