//! Session Context
//!
//! Data shared across pages: the signed-in user and the static page text.
//! Both are fetched on first use and memoized. The user entry is dropped on
//! logout and whenever a call fails with an auth error; the static text is
//! never invalidated.
//!
//! The context is passed explicitly (the UI provides it through Leptos
//! context). Cells are `Rc<RefCell<_>>` since everything runs on one thread,
//! and no borrow is held across an `.await`.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::api::{ContentApi, UserApi};
use crate::domain::{LoginForm, UserInfo};
use crate::error::{ApiError, ApiResult};

/// A memoized value behind a shared handle
#[derive(Debug)]
pub struct Cached<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for Cached<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }
}

impl<T: Clone> Cached<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<T> {
        self.slot.borrow().clone()
    }

    pub fn store(&self, value: T) {
        *self.slot.borrow_mut() = Some(value);
    }

    pub fn invalidate(&self) {
        *self.slot.borrow_mut() = None;
    }

    /// Cached value, or the result of `fetch` (stored on success)
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> ApiResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }
        self.refresh(fetch).await
    }

    /// Always fetch; store on success, leave the slot empty on failure
    pub async fn refresh<F, Fut>(&self, fetch: F) -> ApiResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        match fetch().await {
            Ok(value) => {
                self.store(value.clone());
                Ok(value)
            }
            Err(err) => {
                self.invalidate();
                Err(err)
            }
        }
    }
}

/// Text shown when `/api/v1/static` is unreachable
pub const DEFAULT_DISCLAIMER: &str = "For legal reasons, you need to accept the fact that this site requires 1 \
session cookie for all operations where you might create new content. It is impossible to opt-out \
of this cookie; however, you can still view recipes to your heart's content without using cookies.";

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Cached<UserInfo>,
    static_text: Cached<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known user without a network call
    pub fn cached_user(&self) -> Option<UserInfo> {
        self.user.get()
    }

    /// Signed-in user; `None` when the backend says there is no session
    pub async fn current_user<A: UserApi + ?Sized>(&self, api: &A) -> ApiResult<Option<UserInfo>> {
        match self.user.get_or_fetch(|| api.whoami()).await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Unauthorized) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Re-ask the backend who is signed in
    pub async fn refresh_user<A: UserApi + ?Sized>(&self, api: &A) -> ApiResult<Option<UserInfo>> {
        self.user.invalidate();
        self.current_user(api).await
    }

    pub fn invalidate_user(&self) {
        self.user.invalidate();
    }

    /// Drop the cached user if `err` means the session is gone
    pub fn observe_error(&self, err: &ApiError) {
        if err.is_auth_failure() {
            log::info!("session rejected by backend, clearing cached user");
            self.user.invalidate();
        }
    }

    /// Log in, then load the identity the backend assigned
    pub async fn login<A: UserApi + ?Sized>(
        &self,
        api: &A,
        form: &LoginForm,
    ) -> ApiResult<Option<UserInfo>> {
        api.login(form).await?;
        self.refresh_user(api).await
    }

    pub async fn logout<A: UserApi + ?Sized>(&self, api: &A) -> ApiResult<()> {
        let result = api.logout().await;
        // the local identity is stale either way
        self.user.invalidate();
        result
    }

    /// Static page text, fetched once
    pub async fn static_text<A: ContentApi + ?Sized>(&self, api: &A) -> ApiResult<String> {
        self.static_text.get_or_fetch(|| api.static_text()).await
    }

    /// Static text or the built-in disclaimer when the fetch fails
    pub async fn disclaimer<A: ContentApi + ?Sized>(&self, api: &A) -> String {
        match self.static_text(api).await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("static text unavailable: {}", err);
                DEFAULT_DISCLAIMER.to_string()
            }
        }
    }
}
