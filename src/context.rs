//! Application Context
//!
//! Shared state provided via Leptos Context API: the current route, the
//! signed-in user, and handles to the API client and session caches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::api::HttpApi;
use recipe_core::domain::UserInfo;
use recipe_core::{ApiError, ClientConfig, Route, Session};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page selected by the location hash - read
    pub route: ReadSignal<Route>,
    /// Page selected by the location hash - write
    set_route: WriteSignal<Route>,
    /// Signed-in user, `None` when logged out or unknown - read
    pub current_user: ReadSignal<Option<UserInfo>>,
    /// Signed-in user - write
    set_current_user: WriteSignal<Option<UserInfo>>,
    api: StoredValue<HttpApi, LocalStorage>,
    session: StoredValue<Session, LocalStorage>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let (route, set_route) = signal(current_hash_route());
        let (current_user, set_current_user) = signal(None);
        Self {
            route,
            set_route,
            current_user,
            set_current_user,
            api: StoredValue::new_local(HttpApi::new(config.api_base.clone())),
            session: StoredValue::new_local(Session::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    /// Session caches share storage between clones
    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Point the location hash at `route`; the hashchange listener follows up
    pub fn navigate(&self, route: Route) {
        log::debug!("navigate to {}", route);
        if let Some(window) = web_sys::window() {
            if window.location().set_hash(&route.path()).is_err() {
                log::warn!("could not update location hash");
            }
        }
        self.set_route.set(route);
    }

    /// Re-read the route after a hashchange
    pub fn sync_route(&self) {
        let route = current_hash_route();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    pub fn set_user(&self, user: Option<UserInfo>) {
        self.set_current_user.set(user);
    }

    /// Ask the backend (or the cache) who is signed in
    pub fn refresh_user(&self) {
        let ctx = *self;
        let (api, session) = (self.api(), self.session());
        spawn_local(async move {
            match session.current_user(&api).await {
                Ok(user) => ctx.set_user(user),
                Err(err) => log::warn!("whoami failed: {}", err),
            }
        });
    }

    /// Keep the session in step with a failed request
    pub fn report(&self, err: &ApiError) {
        self.session().observe_error(err);
        if err.is_auth_failure() {
            self.set_user(None);
        }
    }

    pub fn logout(&self) {
        let ctx = *self;
        let (api, session) = (self.api(), self.session());
        spawn_local(async move {
            if let Err(err) = session.logout(&api).await {
                log::warn!("logout failed: {}", err);
            }
            ctx.set_user(None);
            ctx.navigate(Route::Home);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn current_hash_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::Home)
}
