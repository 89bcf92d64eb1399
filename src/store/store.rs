//! Infinite store implementation

use super::types::{CollectionSession, Page, PageStatus};
use crate::fetch::PageFetcher;
use crate::locator::{LocatorStrategy, PageLocator};
use crate::types::FilterSortConfig;
use std::collections::HashSet;
use tokio::sync::{Notify, RwLock};
use tracing::{debug, warn};

/// What the growth loop should do next, decided under the session lock
enum Step {
    /// Requested extent satisfied (or growth is blocked); stop
    Done,
    /// Another caller has this page in flight; wait for it to settle
    Wait,
    /// Fetch this page
    Fetch { index: usize, locator: PageLocator },
}

/// Page cache for one collection session.
///
/// Holds the ordered page sequence behind a lock, grows it on demand, and
/// guards every merge with the session generation so work started under a
/// superseded config never lands. Share it behind an `Arc`; all methods take
/// `&self`.
pub struct InfiniteStore<F: PageFetcher> {
    fetcher: F,
    strategy: LocatorStrategy,
    page_size: u32,
    session: RwLock<CollectionSession<F::Item>>,
    settled: Notify,
}

impl<F: PageFetcher> std::fmt::Debug for InfiniteStore<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfiniteStore")
            .field("strategy", &self.strategy)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl<F: PageFetcher> InfiniteStore<F> {
    /// Create a store with an empty session under the default config
    pub fn new(fetcher: F, strategy: LocatorStrategy, page_size: u32) -> Self {
        Self {
            fetcher,
            strategy,
            page_size,
            session: RwLock::new(CollectionSession::new(FilterSortConfig::default())),
            settled: Notify::new(),
        }
    }

    /// Configured page size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The underlying fetch executor
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Guarantee pages `0..n` exist for `config`, fetching any that are
    /// missing in increasing index order.
    ///
    /// If `config` differs by value from the session's current config, the
    /// session is reset first (all pages discarded, generation bumped) and
    /// growth proceeds under the new config. A page already in flight for the
    /// same generation is never fetched twice: this caller waits for the
    /// existing attempt instead. A Failed page inside the extent is
    /// re-attempted once per call; if it fails again, growth stops there.
    pub async fn ensure_pages(&self, n: usize, config: &FilterSortConfig) {
        let generation = {
            let mut session = self.session.write().await;
            if session.config() != config {
                session.reset(config.clone());
                debug!(
                    generation = session.generation(),
                    "filter/sort changed, session reset"
                );
                // Wake callers still waiting on the superseded generation.
                self.settled.notify_waiters();
            }
            session.request_pages(n);
            session.generation()
        };

        let mut attempted: HashSet<usize> = HashSet::new();

        loop {
            // Register for settle notifications before inspecting state, so a
            // merge between the inspection and the await cannot be missed.
            let notified = self.settled.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let step = {
                let mut session = self.session.write().await;
                if session.generation() == generation {
                    self.next_step(&mut session, n, &mut attempted)
                } else {
                    // Superseded by a config change; the new caller owns growth.
                    Step::Done
                }
            };

            match step {
                Step::Done => break,
                Step::Wait => notified.await,
                Step::Fetch { index, locator } => {
                    let outcome = self.fetcher.fetch_page(&locator).await;

                    let mut session = self.session.write().await;
                    if session.generation() != generation {
                        debug!(index, generation, "discarding stale page result");
                        break;
                    }
                    if let Some(page) = session.page_mut(index) {
                        match outcome {
                            Ok(items) => {
                                let short = items.len() < self.page_size as usize;
                                page.resolve_loaded(items);
                                if short {
                                    // Short page: the remote collection ends here.
                                    session.clamp_requested(index + 1);
                                }
                            }
                            Err(error) => {
                                warn!(index, %error, "page fetch failed");
                                page.resolve_failed(error);
                                session.clamp_requested(index + 1);
                            }
                        }
                    }
                    self.settled.notify_waiters();
                }
            }
        }
    }

    /// Decide the next growth action for the extent `0..n`.
    ///
    /// Scanning from index 0 keeps fetch order non-decreasing and re-attempts
    /// at most one fetch per index per `ensure_pages` call.
    fn next_step(
        &self,
        session: &mut CollectionSession<F::Item>,
        n: usize,
        attempted: &mut HashSet<usize>,
    ) -> Step {
        for index in 0..n {
            let observed = session
                .page(index)
                .map(|page| (page.status, page.items.len()));

            match observed {
                Some((PageStatus::Loaded, len)) => {
                    if len < self.page_size as usize {
                        // Exhausted; nothing exists past this page.
                        session.clamp_requested(index + 1);
                        return Step::Done;
                    }
                }
                Some((PageStatus::Pending, _)) => return Step::Wait,
                Some((PageStatus::Failed, _)) => {
                    if !attempted.insert(index) {
                        // Already re-attempted by this call; stay blocked.
                        return Step::Done;
                    }
                    if let Some(page) = session.page_mut(index) {
                        page.reattempt();
                    }
                    return Step::Fetch {
                        index,
                        locator: self.strategy.locator(index as u32, session.config()),
                    };
                }
                None => {
                    attempted.insert(index);
                    session.push_pending(index);
                    return Step::Fetch {
                        index,
                        locator: self.strategy.locator(index as u32, session.config()),
                    };
                }
            }
        }
        Step::Done
    }

    /// Whether another page may be loaded: the frontier page is Loaded and
    /// full. A short, Failed, or in-flight frontier blocks growth; so does an
    /// empty session.
    pub async fn can_grow(&self) -> bool {
        let session = self.session.read().await;
        session
            .pages()
            .last()
            .is_some_and(|page| page.is_loaded() && page.items.len() == self.page_size as usize)
    }

    /// Sum of item counts across all Loaded pages
    pub async fn total_loaded_count(&self) -> usize {
        self.session.read().await.total_loaded_count()
    }

    /// Number of pages attempted so far (Loaded, Failed, or in flight)
    pub async fn page_count(&self) -> usize {
        self.session.read().await.pages().len()
    }

    /// How many pages callers have asked for
    pub async fn requested_page_count(&self) -> usize {
        self.session.read().await.requested_page_count()
    }

    /// Current generation tag
    pub async fn generation(&self) -> u64 {
        self.session.read().await.generation()
    }

    /// The config the session currently runs under
    pub async fn config(&self) -> FilterSortConfig {
        self.session.read().await.config().clone()
    }

    /// Snapshot of one page, if it has been attempted
    pub async fn page_snapshot(&self, index: usize) -> Option<Page<F::Item>> {
        self.session.read().await.page(index).cloned()
    }

    /// Index of the page currently in flight, if any.
    ///
    /// At most one page is Pending at a time (the growth frontier).
    pub async fn loading_page_index(&self) -> Option<usize> {
        let session = self.session.read().await;
        session.pages().iter().find(|p| p.is_pending()).map(|p| p.index)
    }

    /// Explicitly discard all pages, keeping the config.
    ///
    /// Used when the owning view closes; in-flight work is invalidated via
    /// the generation bump.
    pub async fn reset(&self) {
        let mut session = self.session.write().await;
        let config = session.config().clone();
        session.reset(config);
        debug!(generation = session.generation(), "session discarded");
        self.settled.notify_waiters();
    }
}
