#[cfg(test)]
mod tests;

use std::{num::NonZeroUsize, sync::Arc};

use serde::Serialize;
use tracing::trace;

use crate::{
    collection::Collection,
    config::Config,
    error::ConfigurationError,
    neighbors::{DEFAULT_WINDOW, Neighbor, NeighborPages},
    pagination::{Page, Paginator},
    url_builder::{QueryParamUrlBuilder, UrlBuilder},
};

/// Everything a listing template needs to render one page and its navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext<T> {
    /// The (clamped) page being shown.
    pub page: Page<T>,
    /// `(number, url)` of the pages before the current one, ascending.
    pub prev_pairs: Vec<(usize, String)>,
    /// `(number, url)` of the pages after the current one, ascending.
    pub next_pairs: Vec<(usize, String)>,
    /// Items shown up to and including the current page.
    pub showed_count: usize,
    /// Items in the whole collection.
    pub total_count: usize,
}

/// Binds a base URL, a requested page number, a page size and a collection
/// for a single request.
pub struct PaginationContext<'a, C: ?Sized> {
    url: String,
    number: i64,
    objects: &'a C,
    paginator: Paginator<'a, C>,
    window: NonZeroUsize,
    url_builder: Arc<dyn UrlBuilder>,
}

impl<'a, C: Collection + ?Sized> PaginationContext<'a, C> {
    /// Fails if `per_page` is not positive.
    pub fn new(
        url: impl Into<String>,
        number: i64,
        per_page: i64,
        objects: &'a C,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            url: url.into(),
            number,
            objects,
            paginator: Paginator::new(objects, per_page)?,
            window: DEFAULT_WINDOW,
            url_builder: Arc::new(QueryParamUrlBuilder::default()),
        })
    }

    /// Builds a context using the page size, window and page parameter from
    /// `config`.
    pub fn from_config(
        config: &Config,
        url: impl Into<String>,
        number: i64,
        objects: &'a C,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(url, number, config.per_page, objects)?
            .with_window(config.neighbor_window)?
            .with_url_builder(Arc::new(QueryParamUrlBuilder::new(config.page_param.clone()))))
    }

    /// Overrides the number of neighbors shown on each side.
    pub fn with_window(mut self, window: usize) -> Result<Self, ConfigurationError> {
        self.window = NonZeroUsize::new(window).ok_or(ConfigurationError::ZeroNeighborWindow)?;
        Ok(self)
    }

    /// Overrides how neighbor URLs are built.
    pub fn with_url_builder(mut self, url_builder: Arc<dyn UrlBuilder>) -> Self {
        self.url_builder = url_builder;
        self
    }

    /// Computes the page, its neighbor links and the item counters.
    ///
    /// The collection is counted twice, once by the paginator and once for
    /// `total_count`. If it changes in between the two figures may disagree;
    /// no attempt is made to reconcile them.
    pub fn context(&self) -> Result<PageContext<C::Item>, C::Error> {
        let page = self.paginator.page(self.number)?;
        let showed_count = (page.number() - 1) * self.paginator.per_page() + page.len();

        let neighbors = NeighborPages::sized(&page, self.window);
        let prev_pairs = self.pairs(neighbors.prev_neighbors());
        let next_pairs = self.pairs(neighbors.next_neighbors());

        let total_count = self.objects.count()?;
        trace!(
            page = page.number(),
            total_pages = page.total_pages(),
            showed_count,
            total_count,
            "Built pagination context"
        );

        Ok(PageContext { page, prev_pairs, next_pairs, showed_count, total_count })
    }

    fn pairs(&self, neighbors: impl Iterator<Item = Neighbor>) -> Vec<(usize, String)> {
        let url_builder = self.url_builder.as_ref();
        neighbors
            .map(|neighbor| (neighbor.number, neighbor.url_with(&self.url, url_builder)))
            .collect()
    }
}
