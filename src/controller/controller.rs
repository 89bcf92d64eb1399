//! Pagination controller implementation

use crate::error::FetchError;
use crate::fetch::PageFetcher;
use crate::store::InfiniteStore;
use crate::types::FilterSortConfig;
use std::sync::Arc;
use tracing::debug;

/// Deterministic pagination controls over one collection session.
///
/// Owns the 1-based current page number and the active config; every
/// navigation intent turns into an explicit `ensure_pages` call on the
/// shared store. One controller instance owns one session — two controllers
/// must not share a store.
#[derive(Debug)]
pub struct PaginationController<F: PageFetcher> {
    store: Arc<InfiniteStore<F>>,
    config: FilterSortConfig,
    current_page: u32,
}

impl<F: PageFetcher> PaginationController<F> {
    /// Create a controller starting at page 1 under the given config.
    ///
    /// Nothing is fetched until the first navigation call.
    pub fn new(store: Arc<InfiniteStore<F>>, config: FilterSortConfig) -> Self {
        Self {
            store,
            config,
            current_page: 1,
        }
    }

    /// The 1-based page number currently being viewed
    pub fn current_page_number(&self) -> u32 {
        self.current_page
    }

    /// The active filter/sort config
    pub fn config(&self) -> &FilterSortConfig {
        &self.config
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<InfiniteStore<F>> {
        &self.store
    }

    fn current_index(&self) -> usize {
        (self.current_page - 1) as usize
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Jump to page `n` (clamped to ≥ 1), loading any missing pages up to it
    pub async fn go_to_page(&mut self, n: u32) {
        let n = n.max(1);
        self.store.ensure_pages(n as usize, &self.config).await;
        self.current_page = n;
    }

    /// Advance one page; a no-op unless another page can be loaded or the
    /// following page is already cached
    pub async fn next(&mut self) {
        if self.can_load_more().await {
            self.go_to_page(self.current_page + 1).await;
        }
    }

    /// Go back one page; a no-op at page 1. Backward navigation is always a
    /// cache hit — already-fetched pages are never re-fetched.
    pub async fn previous(&mut self) {
        if self.current_page > 1 {
            self.go_to_page(self.current_page - 1).await;
        }
    }

    /// Switch to a new filter/sort config: the session is invalidated, the
    /// view returns to page 1, and the first page is fetched under the new
    /// config. This is the only entry point that triggers a session reset.
    pub async fn on_config_change(&mut self, config: FilterSortConfig) {
        debug!(?config, "filter/sort change");
        self.config = config;
        self.current_page = 1;
        self.store.ensure_pages(1, &self.config).await;
    }

    /// Re-attempt failed pages within the current extent (the user-visible
    /// "try again" action). Loaded pages are untouched.
    pub async fn retry(&mut self) {
        let extent = self
            .store
            .requested_page_count()
            .await
            .max(self.current_page as usize);
        self.store.ensure_pages(extent, &self.config).await;
    }

    /// Discard the session entirely and return to page 1
    pub async fn reset(&mut self) {
        self.store.reset().await;
        self.current_page = 1;
    }

    // ========================================================================
    // Read surface
    // ========================================================================

    /// Items of the page being viewed; empty while that page is pending,
    /// failed, or not yet attempted
    pub async fn items_on_current_page(&self) -> Vec<F::Item> {
        self.store
            .page_snapshot(self.current_index())
            .await
            .filter(|page| page.is_loaded())
            .map(|page| page.items)
            .unwrap_or_default()
    }

    /// Whether the viewed page has a fetch in flight
    pub async fn is_loading_current_page(&self) -> bool {
        self.store
            .page_snapshot(self.current_index())
            .await
            .is_some_and(|page| page.is_pending())
    }

    /// Whether a page beyond the viewed one has a fetch in flight
    pub async fn is_loading_more(&self) -> bool {
        self.store
            .loading_page_index()
            .await
            .is_some_and(|index| index > self.current_index())
    }

    /// Whether `next` would be effective: the frontier can still grow, or
    /// the following page is already cached
    pub async fn can_load_more(&self) -> bool {
        if self.store.can_grow().await {
            return true;
        }
        self.store
            .page_snapshot(self.current_index() + 1)
            .await
            .is_some_and(|page| page.is_loaded())
    }

    /// Failure recorded on the viewed page, if any
    pub async fn last_error(&self) -> Option<FetchError> {
        self.store
            .page_snapshot(self.current_index())
            .await
            .and_then(|page| page.error)
    }

    /// Items loaded across all pages so far
    pub async fn total_loaded_count(&self) -> usize {
        self.store.total_loaded_count().await
    }

    /// Lower bound on the total page count.
    ///
    /// The remote total is unknown until exhaustion, so this only counts
    /// what has been loaded.
    pub async fn total_pages_known(&self) -> usize {
        let total = self.store.total_loaded_count().await;
        total.div_ceil(self.store.page_size() as usize)
    }
}
