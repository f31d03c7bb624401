//! Recipe Entity
//!
//! The object the recipe pages read from and write to, in the JSON shape
//! the backend accepts on `POST /api/v1/recipe` and `PUT /api/v1/recipe/{id}`.

use serde::{Deserialize, Serialize};

use super::serde_ext::{null_as_default, optional_count, string_or_number};

/// A recipe as exchanged with the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Absent until the backend assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cook_time: String,
    #[serde(default, deserialize_with = "optional_count")]
    pub servings: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Upsert response; the backend echoes at least the id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeId {
    pub id: i64,
}
