#![warn(missing_docs)]
//! Pagination for ordered, countable collections.
//!
//! Cuts a collection into fixed-size pages, clamps out-of-range page requests
//! to the nearest existing page, and computes the neighbor page links and item
//! counters a listing page needs for its navigation.

/// The collection contract consumed by the paginator.
pub mod collection;
/// Environment-driven pagination defaults.
pub mod config;
/// Per-request orchestration of paginator and neighbor links.
pub mod context;
/// Error types.
pub mod error;
/// Neighbor page windows for prev/next navigation.
pub mod neighbors;
/// Pages and the paginator producing them.
pub mod pagination;
/// Page URL conventions.
pub mod url_builder;

pub use collection::Collection;
pub use config::Config;
pub use context::{PageContext, PaginationContext};
pub use error::{CollectionError, ConfigurationError};
pub use neighbors::{DEFAULT_NEIGHBOR_WINDOW, Neighbor, NeighborPages};
pub use pagination::{Page, Paginator};
pub use url_builder::{PathSegmentUrlBuilder, QueryParamUrlBuilder, UrlBuilder};

#[cfg(feature = "test-utils")]
pub use collection::MockCollection;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a `tracing` subscriber honouring `RUST_LOG`, defaulting to `info`
/// with debug output for this crate.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,refarm_pagination=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
