//! Search Query and Results
//!
//! Parameters and response of `GET /api/v1/recipe/list`.

use serde::{Deserialize, Serialize};

use super::serde_ext::{null_as_default, optional_count, string_or_number};

/// Text and page selection for one list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub page_size: u32,
    pub page_number: u32,
}

impl SearchQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            text: String::new(),
            page_size,
            page_number: 0,
        }
    }

    /// Query string pairs in the backend's parameter names
    pub fn to_params(&self) -> [(&'static str, String); 3] {
        [
            ("q", self.text.clone()),
            ("siz", self.page_size.to_string()),
            ("num", self.page_number.to_string()),
        ]
    }
}

/// One row of a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cook_time: String,
    #[serde(default, deserialize_with = "optional_count")]
    pub servings: Option<u32>,
}

/// A page of results plus the total match count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PageWire")]
pub struct SearchPage {
    pub results: Vec<RecipeSummary>,
    pub total: u64,
}

/// Older backends answer with a bare array and no total.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageWire {
    Paged {
        #[serde(default)]
        results: Vec<RecipeSummary>,
        #[serde(default)]
        total: u64,
    },
    Bare(Vec<RecipeSummary>),
}

impl From<PageWire> for SearchPage {
    fn from(wire: PageWire) -> Self {
        match wire {
            PageWire::Paged { results, total } => SearchPage { results, total },
            PageWire::Bare(results) => {
                let total = results.len() as u64;
                SearchPage { results, total }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_use_backend_names() {
        let query = SearchQuery {
            text: "soup".to_string(),
            page_size: 20,
            page_number: 2,
        };
        let params = query.to_params();
        assert_eq!(params[0], ("q", "soup".to_string()));
        assert_eq!(params[1], ("siz", "20".to_string()));
        assert_eq!(params[2], ("num", "2".to_string()));
    }

    #[test]
    fn test_decodes_paged_response() {
        let json = r#"{"results": [{"id": 1, "name": "Soup", "prep_time": 5, "cook_time": 30, "servings": 2}], "total": 45}"#;
        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 45);
        assert_eq!(page.results[0].name, "Soup");
        assert_eq!(page.results[0].cook_time, "30");
    }

    #[test]
    fn test_decodes_bare_array_response() {
        let json = r#"[{"id": 1, "name": "Soup"}, {"id": 2, "name": "Stew"}]"#;
        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.results[1].id, 2);
    }
}
