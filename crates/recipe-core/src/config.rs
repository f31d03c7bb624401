//! Client Configuration
//!
//! Read from an optional JSON block embedded in the host page. Every field
//! has a default so an absent or partial block still yields a usable config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Backend hard limit on rows per list request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Which search response is kept when several are in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Every response replaces the results, in arrival order
    #[default]
    LastResolvedWins,
    /// Responses to superseded requests are dropped
    LastIssuedWins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin the `/api/v1/...` paths are joined to; empty means "page origin"
    pub api_base: String,
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub stale_responses: StaleResponsePolicy,
    /// Delay before a success/error notice moves on
    pub notice_redirect_ms: u32,
    /// `log` level name for the console sink
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_page_size: 20,
            max_page_size: MAX_PAGE_SIZE,
            stale_responses: StaleResponsePolicy::default(),
            notice_redirect_ms: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse and check a JSON config block
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Fill in the API origin when the config left it empty
    pub fn with_origin(mut self, origin: &str) -> Self {
        if self.api_base.is_empty() {
            self.api_base = origin.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size == 0 || self.max_page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_page_size must be within 1..={}",
                MAX_PAGE_SIZE
            )));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid(
                "default_page_size must be within 1..=max_page_size".to_string(),
            ));
        }
        Ok(())
    }
}
