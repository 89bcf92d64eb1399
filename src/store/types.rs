//! Page and session types
//!
//! A [`CollectionSession`] is the aggregate one open collection view owns:
//! the config it was opened under, a generation tag guarding stale work, and
//! the contiguous run of pages fetched so far. Pages are owned exclusively by
//! the store; everything outside sees clones.

use crate::error::FetchError;
use crate::types::FilterSortConfig;

// ============================================================================
// Page
// ============================================================================

/// Lifecycle status of one cached page.
///
/// `Pending → Loaded | Failed`; no transition out of a settled state except
/// a full session reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// A fetch is in flight for this page
    Pending,
    /// The fetch settled with items
    Loaded,
    /// The fetch settled with a classified failure
    Failed,
}

/// One fetched (or in-flight) page of the collection
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// 0-based page index
    pub index: usize,
    /// Lifecycle status
    pub status: PageStatus,
    /// Items, populated once the page is Loaded (possibly empty)
    pub items: Vec<T>,
    /// Failure recorded when the fetch settled badly
    pub error: Option<FetchError>,
}

impl<T> Page<T> {
    pub(crate) fn pending(index: usize) -> Self {
        Self {
            index,
            status: PageStatus::Pending,
            items: Vec::new(),
            error: None,
        }
    }

    /// Whether a fetch is in flight for this page
    pub fn is_pending(&self) -> bool {
        self.status == PageStatus::Pending
    }

    /// Whether the page settled with items
    pub fn is_loaded(&self) -> bool {
        self.status == PageStatus::Loaded
    }

    /// Whether the page settled with a failure
    pub fn is_failed(&self) -> bool {
        self.status == PageStatus::Failed
    }

    pub(crate) fn resolve_loaded(&mut self, items: Vec<T>) {
        self.status = PageStatus::Loaded;
        self.items = items;
        self.error = None;
    }

    pub(crate) fn resolve_failed(&mut self, error: FetchError) {
        self.status = PageStatus::Failed;
        self.items.clear();
        self.error = Some(error);
    }

    pub(crate) fn reattempt(&mut self) {
        self.status = PageStatus::Pending;
        self.items.clear();
        self.error = None;
    }
}

// ============================================================================
// Collection session
// ============================================================================

/// The page sequence and bookkeeping for one open collection view.
///
/// Pages live in a `Vec` and only ever grow at the frontier, so the sequence
/// is contiguous from index 0 by construction.
#[derive(Debug)]
pub struct CollectionSession<T> {
    config: FilterSortConfig,
    generation: u64,
    pages: Vec<Page<T>>,
    requested_page_count: usize,
}

impl<T> CollectionSession<T> {
    pub(crate) fn new(config: FilterSortConfig) -> Self {
        Self {
            config,
            generation: 0,
            pages: Vec::new(),
            requested_page_count: 0,
        }
    }

    /// Discard all pages and start over under a (possibly new) config.
    ///
    /// Bumps the generation so results still in flight for the old pages are
    /// recognized as stale and dropped on arrival.
    pub(crate) fn reset(&mut self, config: FilterSortConfig) {
        self.config = config;
        self.generation += 1;
        self.pages.clear();
        self.requested_page_count = 0;
    }

    /// The config this session's pages were fetched under
    pub fn config(&self) -> &FilterSortConfig {
        &self.config
    }

    /// Generation tag for stale-result detection
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All pages, contiguous from index 0
    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    /// How many pages the callers have asked for so far
    pub fn requested_page_count(&self) -> usize {
        self.requested_page_count
    }

    /// One page by index
    pub fn page(&self, index: usize) -> Option<&Page<T>> {
        self.pages.get(index)
    }

    /// Sum of item counts across all Loaded pages
    pub fn total_loaded_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| p.is_loaded())
            .map(|p| p.items.len())
            .sum()
    }

    pub(crate) fn page_mut(&mut self, index: usize) -> Option<&mut Page<T>> {
        self.pages.get_mut(index)
    }

    pub(crate) fn push_pending(&mut self, index: usize) {
        debug_assert_eq!(index, self.pages.len(), "pages must stay contiguous");
        self.pages.push(Page::pending(index));
    }

    pub(crate) fn request_pages(&mut self, n: usize) {
        if n > self.requested_page_count {
            self.requested_page_count = n;
        }
    }

    /// Shrink the requested count when growth stops early (exhaustion or a
    /// failed frontier), so the request matches what was actually attempted.
    pub(crate) fn clamp_requested(&mut self, n: usize) {
        if n < self.requested_page_count {
            self.requested_page_count = n;
        }
    }
}
