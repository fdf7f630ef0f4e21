use thiserror::Error;

/// Invalid pagination settings, reported when a paginator, neighbor window or
/// config is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The page size was zero or negative.
    #[error("per_page must be a positive integer, got {0}")]
    NonPositivePerPage(i64),
    /// The page size does not fit this platform's `usize`.
    #[error("per_page {0} is too large for this platform")]
    PerPageTooLarge(i64),
    /// The neighbor window was zero.
    #[error("neighbor window must be a positive integer")]
    ZeroNeighborWindow,
}

/// Error type for collection adapters whose backend has no error of its own.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The backing source could not be reached.
    #[error("Collection unavailable: {0}")]
    Unavailable(String),
    /// The backing source answered with something that could not be read.
    #[error("Collection returned invalid data: {0}")]
    InvalidData(String),
}
