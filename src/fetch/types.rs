//! Fetch seam the store is built against

use crate::error::FetchResult;
use crate::locator::PageLocator;
use async_trait::async_trait;

/// One-shot page retrieval.
///
/// Implementations are stateless with respect to pagination: every call is a
/// single attempt for a single locator, returning either the flattened item
/// list or a classified failure. Never panics for remote conditions.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// The item type one page contains
    type Item: Clone + Send + Sync;

    /// Fetch the page the locator points at
    async fn fetch_page(&self, locator: &PageLocator) -> FetchResult<Vec<Self::Item>>;
}
