use std::{convert::Infallible, error::Error};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg(any(test, feature = "test-utils"))]
use crate::error::CollectionError;

/// An ordered, countable, sliceable sequence of items.
///
/// Implementations are expected to return items in a stable order so that
/// consecutive pages neither repeat nor skip items. The pagination types only
/// ever read from a collection.
#[cfg_attr(
    any(test, feature = "test-utils"),
    automock(type Item = u32; type Error = CollectionError;)
)]
pub trait Collection {
    /// The item type yielded by [`Collection::slice`].
    type Item;
    /// Error raised by the backing source, passed through to callers as is.
    type Error: Error + Send + Sync + 'static;

    /// Total number of items.
    fn count(&self) -> Result<usize, Self::Error>;

    /// Up to `limit` items starting at `offset`. Returns fewer items near the
    /// end and an empty vector once `offset` is past the last item.
    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<Self::Item>, Self::Error>;
}

impl<T: Clone> Collection for [T] {
    type Item = T;
    type Error = Infallible;

    fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.len())
    }

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<T>, Self::Error> {
        let start = offset.min(self.len());
        let end = start.saturating_add(limit).min(self.len());
        Ok(self[start..end].to_vec())
    }
}

impl<T: Clone> Collection for Vec<T> {
    type Item = T;
    type Error = Infallible;

    fn count(&self) -> Result<usize, Self::Error> {
        self.as_slice().count()
    }

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<T>, Self::Error> {
        self.as_slice().slice(offset, limit)
    }
}
