//! Search and Pagination
//!
//! Every search, page change or page size change issues a fresh list
//! request whose response replaces the shown results and total. Requests
//! are numbered; what happens to a response that arrives after a newer
//! request was issued depends on [`StaleResponsePolicy`].

use crate::api::RecipeApi;
use crate::config::{ClientConfig, StaleResponsePolicy};
use crate::domain::{RecipeSummary, SearchPage, SearchQuery};
use crate::error::{ApiError, ApiResult};

/// A list request tagged with its issue order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: SearchQuery,
}

impl SearchRequest {
    pub async fn send<A: RecipeApi + ?Sized>(&self, api: &A) -> ApiResult<SearchPage> {
        api.list_recipes(&self.query).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchController {
    query: SearchQuery,
    results: Vec<RecipeSummary>,
    total: u64,
    loading: bool,
    last_error: Option<ApiError>,
    policy: StaleResponsePolicy,
    max_page_size: u32,
    issued: u64,
}

impl SearchController {
    pub fn new(config: &ClientConfig) -> Self {
        let max_page_size = config.max_page_size.max(1);
        Self {
            query: SearchQuery::new(config.default_page_size.clamp(1, max_page_size)),
            results: Vec::new(),
            total: 0,
            // the mount search is about to start
            loading: true,
            last_error: None,
            policy: config.stale_responses,
            max_page_size,
            issued: 0,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    fn issue(&mut self) -> SearchRequest {
        self.issued += 1;
        self.loading = true;
        SearchRequest {
            seq: self.issued,
            query: self.query.clone(),
        }
    }

    /// The implicit empty search when the page first shows
    pub fn mount(&mut self) -> SearchRequest {
        self.query.text.clear();
        self.query.page_number = 0;
        self.issue()
    }

    /// Enter in the search box; starts over at the first page
    pub fn submit(&mut self) -> SearchRequest {
        self.query.page_number = 0;
        self.issue()
    }

    /// Clamped to `1..=max_page_size`; starts over at the first page
    pub fn set_page_size(&mut self, page_size: u32) -> SearchRequest {
        self.query.page_size = page_size.clamp(1, self.max_page_size);
        self.query.page_number = 0;
        self.issue()
    }

    /// Highest page number the total allows: `floor(total / page_size)`
    pub fn last_page(&self) -> u32 {
        let pages = self.total / u64::from(self.query.page_size.max(1));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn can_prev(&self) -> bool {
        self.query.page_number > 0
    }

    pub fn can_next(&self) -> bool {
        self.query.page_number < self.last_page()
    }

    /// Jump to a page; out-of-range pages are ignored
    pub fn set_page(&mut self, page_number: u32) -> Option<SearchRequest> {
        if page_number > self.last_page() {
            return None;
        }
        self.query.page_number = page_number;
        Some(self.issue())
    }

    pub fn next_page(&mut self) -> Option<SearchRequest> {
        if !self.can_next() {
            return None;
        }
        self.set_page(self.query.page_number + 1)
    }

    pub fn prev_page(&mut self) -> Option<SearchRequest> {
        if !self.can_prev() {
            return None;
        }
        self.set_page(self.query.page_number - 1)
    }

    /// 1-based `(first, last)` row numbers shown, when there are rows
    pub fn range(&self) -> Option<(u64, u64)> {
        if self.results.is_empty() {
            return None;
        }
        let offset = u64::from(self.query.page_number) * u64::from(self.query.page_size);
        Some((offset + 1, offset + self.results.len() as u64))
    }

    /// Apply a response; `false` when it was dropped as stale
    pub fn apply(&mut self, seq: u64, result: ApiResult<SearchPage>) -> bool {
        let is_latest = seq == self.issued;
        if !is_latest && self.policy == StaleResponsePolicy::LastIssuedWins {
            log::debug!("dropping stale search response {} (latest {})", seq, self.issued);
            return false;
        }
        if is_latest {
            self.loading = false;
        }
        match result {
            Ok(page) => {
                self.results = page.results;
                self.total = page.total;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("search failed: {}", err);
                self.last_error = Some(err);
            }
        }
        true
    }

    /// Send and apply in one step
    pub async fn run<A: RecipeApi + ?Sized>(&mut self, request: SearchRequest, api: &A) -> bool {
        let result = request.send(api).await;
        self.apply(request.seq, result)
    }
}
