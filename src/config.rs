use std::env;

use crate::{error::ConfigurationError, neighbors::DEFAULT_NEIGHBOR_WINDOW};

const DEFAULT_PER_PAGE: i64 = 30;
const DEFAULT_PAGE_PARAM: &str = "page";

/// Pagination defaults for an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of items per page.
    pub per_page: i64,
    /// Number of neighbor pages shown on each side of the current page.
    pub neighbor_window: usize,
    /// Query parameter carrying the page number in page URLs.
    pub page_param: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            neighbor_window: DEFAULT_NEIGHBOR_WINDOW,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults; parsed values
    /// that make no sense as pagination settings are rejected.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let config = Self {
            per_page: env::var("PAGINATION_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PER_PAGE),
            neighbor_window: env::var("PAGINATION_NEIGHBOR_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NEIGHBOR_WINDOW),
            page_param: env::var("PAGINATION_PAGE_PARAM")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PAGE_PARAM.to_string()),
        };
        config.validate()?;

        Ok(config)
    }

    /// Checks that the page size and neighbor window are positive.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.per_page <= 0 {
            return Err(ConfigurationError::NonPositivePerPage(self.per_page));
        }
        if self.neighbor_window == 0 {
            return Err(ConfigurationError::ZeroNeighborWindow);
        }
        Ok(())
    }
}
