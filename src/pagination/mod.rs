
use serde::Serialize;
use tracing::debug;

use crate::{collection::Collection, error::ConfigurationError};

/// One page of a paginated collection.
///
/// Only a [`Paginator`] creates pages, so `number` always lies within
/// `1..=total_pages` and `items` never holds more than `per_page` entries.
#[derive(Debug, Eq, PartialEq, Clone, Serialize)]
pub struct Page<T> {
    number: usize,
    items: Vec<T>,
    per_page: usize,
    total_pages: usize,
}

impl<T> Page<T> {
    pub(crate) fn new(number: usize, items: Vec<T>, per_page: usize, total_pages: usize) -> Self {
        debug_assert!((1..=total_pages).contains(&number) && items.len() <= per_page);
        Self { number, items, per_page, total_pages }
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Items on this page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Page size the page was cut with.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages in the collection, at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether the collection spans more than this page.
    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    /// Number of the following page, if any.
    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next().then(|| self.number + 1)
    }

    /// Number of the preceding page, if any.
    pub fn previous_page_number(&self) -> Option<usize> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based index of the first item on this page, or 0 for an empty page.
    pub fn start_index(&self) -> usize {
        if self.items.is_empty() { 0 } else { self.offset() + 1 }
    }

    /// 1-based index of the last item on this page. Equals the number of items
    /// shown up to and including this page.
    pub fn end_index(&self) -> usize {
        self.offset() + self.items.len()
    }

    fn offset(&self) -> usize {
        (self.number - 1) * self.per_page
    }
}

/// Cuts a collection into pages of a fixed size.
#[derive(Debug)]
pub struct Paginator<'a, C: ?Sized> {
    collection: &'a C,
    per_page: usize,
}

impl<'a, C: Collection + ?Sized> Paginator<'a, C> {
    /// Creates a paginator over `collection`. Fails if `per_page` is not
    /// positive or does not fit the platform's `usize`.
    pub fn new(collection: &'a C, per_page: i64) -> Result<Self, ConfigurationError> {
        if per_page <= 0 {
            return Err(ConfigurationError::NonPositivePerPage(per_page));
        }
        let per_page =
            usize::try_from(per_page).map_err(|_| ConfigurationError::PerPageTooLarge(per_page))?;

        Ok(Self { collection, per_page })
    }

    /// Page size, always positive.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages, at least 1 even for an empty collection.
    pub fn num_pages(&self) -> Result<usize, C::Error> {
        Ok(total_pages(self.collection.count()?, self.per_page))
    }

    /// Returns the page at `number`, clamped into `1..=total_pages`.
    ///
    /// Out-of-range numbers are never an error: stale or hand-edited links
    /// land on the nearest existing page. Only failures of the collection
    /// itself are returned.
    pub fn page(&self, number: i64) -> Result<Page<C::Item>, C::Error> {
        let total_pages = self.num_pages()?;
        let clamped = clamp_page_number(number, total_pages);
        if i64::try_from(clamped).ok() != Some(number) {
            debug!(requested = number, clamped, total_pages, "Page number out of range, clamped");
        }

        let offset = (clamped - 1) * self.per_page;
        let mut items = self.collection.slice(offset, self.per_page)?;
        items.truncate(self.per_page);

        Ok(Page::new(clamped, items, self.per_page, total_pages))
    }
}

/// `max(1, ceil(total_count / per_page))`.
pub fn total_pages(total_count: usize, per_page: usize) -> usize {
    total_count.div_ceil(per_page).max(1)
}

fn clamp_page_number(number: i64, total_pages: usize) -> usize {
    if number < 1 {
        return 1;
    }
    usize::try_from(number).map_or(total_pages, |n| n.min(total_pages))
}
