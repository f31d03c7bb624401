//! Client Routes
//!
//! The page table. Paths travel in the URL hash (`#/recipe/3/edit`).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    NewUser,
    Login,
    Search,
    NewRecipe,
    ViewRecipe(i64),
    EditRecipe(i64),
    NotFound,
}

impl Route {
    /// Resolve a path (with or without a leading `#`) to a page
    pub fn parse(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["newuser"] => Route::NewUser,
            ["login"] => Route::Login,
            ["search"] => Route::Search,
            ["recipe", "new"] => Route::NewRecipe,
            ["recipe", id] => id.parse().map(Route::ViewRecipe).unwrap_or(Route::NotFound),
            ["recipe", id, "edit"] => id.parse().map(Route::EditRecipe).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::NewUser => "/newuser".to_string(),
            Route::Login => "/login".to_string(),
            Route::Search => "/search".to_string(),
            Route::NewRecipe => "/recipe/new".to_string(),
            Route::ViewRecipe(id) => format!("/recipe/{}", id),
            Route::EditRecipe(id) => format!("/recipe/{}/edit", id),
        }
    }

    /// Value for `location.hash`
    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
