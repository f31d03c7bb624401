//! HTTP Implementation
//!
//! `reqwest` client for the REST backend. On wasm32 requests go through the
//! browser's `fetch`, so the session cookie rides along on same-origin calls.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{paths, ContentApi, RecipeApi, UserApi};
use crate::domain::{LoginForm, NewUserForm, Recipe, RecipeId, SearchPage, SearchQuery, UserInfo};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// `base_url` is the origin the `/api/v1/...` paths are appended to
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        log::debug!("request failed with {}: {}", status, message);
        Err(ApiError::from_status(status.as_u16(), message))
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpApi {
    async fn get_recipe(&self, id: i64) -> ApiResult<Recipe> {
        log::debug!("GET recipe {}", id);
        self.json(self.client.get(self.url(&paths::recipe(id)))).await
    }

    async fn create_recipe(&self, recipe: &Recipe) -> ApiResult<RecipeId> {
        log::debug!("POST recipe '{}'", recipe.name);
        self.json(self.client.post(self.url(paths::RECIPE)).json(recipe))
            .await
    }

    async fn update_recipe(&self, id: i64, recipe: &Recipe) -> ApiResult<RecipeId> {
        log::debug!("PUT recipe {}", id);
        self.json(self.client.put(self.url(&paths::recipe(id))).json(recipe))
            .await
    }

    async fn delete_recipe(&self, id: i64) -> ApiResult<()> {
        log::debug!("DELETE recipe {}", id);
        self.send(self.client.delete(self.url(&paths::recipe(id))))
            .await
            .map(|_| ())
    }

    async fn list_recipes(&self, query: &SearchQuery) -> ApiResult<SearchPage> {
        log::debug!(
            "GET recipe list q='{}' siz={} num={}",
            query.text,
            query.page_size,
            query.page_number
        );
        let request = self
            .client
            .get(self.url(paths::RECIPE_LIST))
            .query(&query.to_params());
        self.json(request).await
    }
}

#[async_trait(?Send)]
impl UserApi for HttpApi {
    async fn create_user(&self, form: &NewUserForm) -> ApiResult<()> {
        log::debug!("POST user create '{}'", form.username);
        self.send(self.client.post(self.url(paths::USER_CREATE)).json(form))
            .await
            .map(|_| ())
    }

    async fn login(&self, form: &LoginForm) -> ApiResult<()> {
        log::debug!("POST user login '{}'", form.username);
        self.send(self.client.post(self.url(paths::USER_LOGIN)).json(form))
            .await
            .map(|_| ())
    }

    async fn logout(&self) -> ApiResult<()> {
        self.send(self.client.post(self.url(paths::USER_LOGOUT)))
            .await
            .map(|_| ())
    }

    async fn whoami(&self) -> ApiResult<UserInfo> {
        self.json(self.client.get(self.url(paths::WHOAMI))).await
    }
}

#[async_trait(?Send)]
impl ContentApi for HttpApi {
    async fn static_text(&self) -> ApiResult<String> {
        let body = self
            .send(self.client.get(self.url(paths::STATIC)))
            .await?
            .text()
            .await?;
        Ok(decode_static_text(body))
    }
}

/// The text may come back raw or as a JSON string literal.
fn decode_static_text(body: String) -> String {
    match serde_json::from_str::<String>(&body) {
        Ok(text) => text,
        Err(_) => body,
    }
}
