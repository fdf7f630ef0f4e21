use std::{num::NonZeroUsize, ops::Range};

use crate::{
    error::ConfigurationError,
    pagination::Page,
    url_builder::{QueryParamUrlBuilder, UrlBuilder},
};

/// How many pages are shown on each side of the current one unless overridden.
pub const DEFAULT_NEIGHBOR_WINDOW: usize = 5;

pub(crate) const DEFAULT_WINDOW: NonZeroUsize = NonZeroUsize::new(DEFAULT_NEIGHBOR_WINDOW).unwrap();

/// A page adjacent to the current one, rendered as a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    /// 1-based page number the link points to.
    pub number: usize,
}

impl Neighbor {
    /// Neighbor pointing at page `number`.
    pub fn new(number: usize) -> Self {
        Self { number }
    }

    /// URL of this neighbor under `base_url`, as a `?page=N` query.
    pub fn url(&self, base_url: &str) -> String {
        self.url_with(base_url, &QueryParamUrlBuilder::default())
    }

    /// URL of this neighbor under `base_url` using the given convention.
    pub fn url_with(&self, base_url: &str, builder: &dyn UrlBuilder) -> String {
        builder.url_for_page(base_url, self.number)
    }
}

/// Bounded windows of page numbers before and after a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborPages {
    number: usize,
    total_pages: usize,
    window: usize,
}

impl NeighborPages {
    /// Neighbors of `page` with a window of [`DEFAULT_NEIGHBOR_WINDOW`].
    pub fn new<T>(page: &Page<T>) -> Self {
        Self {
            number: page.number(),
            total_pages: page.total_pages(),
            window: DEFAULT_NEIGHBOR_WINDOW,
        }
    }

    /// Same as [`NeighborPages::new`] with a custom window size.
    pub fn with_window<T>(page: &Page<T>, window: usize) -> Result<Self, ConfigurationError> {
        let window = NonZeroUsize::new(window).ok_or(ConfigurationError::ZeroNeighborWindow)?;
        Ok(Self::sized(page, window))
    }

    pub(crate) fn sized<T>(page: &Page<T>, window: NonZeroUsize) -> Self {
        Self { window: window.get(), ..Self::new(page) }
    }

    /// Maximum number of neighbors on each side.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Up to `window` pages before the current one, ascending, so the nearest
    /// page comes last: `.., n-2, n-1`.
    pub fn prev_neighbors(&self) -> impl Iterator<Item = Neighbor> + use<> {
        self.prev_range().map(Neighbor::new)
    }

    /// Up to `window` pages after the current one, ascending: `n+1, n+2, ..`.
    pub fn next_neighbors(&self) -> impl Iterator<Item = Neighbor> + use<> {
        self.next_range().map(Neighbor::new)
    }

    fn prev_range(&self) -> Range<usize> {
        let start = self.number.saturating_sub(self.window).max(1);
        start..self.number
    }

    fn next_range(&self) -> Range<usize> {
        let end = self.number.saturating_add(self.window).min(self.total_pages);
        self.number + 1..end + 1
    }
}
