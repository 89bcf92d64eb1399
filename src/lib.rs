//! # repopager
//!
//! A paginated remote-collection cache for GitHub repository listings.
//!
//! The embedding application is a username search tool that shows a profile
//! card and a filterable, sortable, paginated list of that profile's
//! repositories. This crate is the stateful core behind that list: it turns a
//! (filter, sort, page) tuple into network requests, accumulates fetched
//! pages, tracks loading and exhaustion, and exposes deterministic pagination
//! controls that stay consistent while the filter/sort criteria change
//! underneath it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use repopager::{
//!     AuthConfig, FilterSortConfig, HttpFetcher, InfiniteStore, LocatorStrategy,
//!     PaginationController, SortKey, DEFAULT_PAGE_SIZE,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let strategy = LocatorStrategy::new("octocat", DEFAULT_PAGE_SIZE);
//!     let fetcher = HttpFetcher::new(AuthConfig::from_env());
//!     let store = Arc::new(InfiniteStore::new(fetcher, strategy, DEFAULT_PAGE_SIZE));
//!
//!     let mut pager = PaginationController::new(store, FilterSortConfig::default());
//!     pager.go_to_page(1).await;
//!
//!     for repo in pager.items_on_current_page().await {
//!         println!("{} ({} stars)", repo.name, repo.stargazers_count);
//!     }
//!
//!     // Narrow to Rust repos; the cached pages are invalidated and refetched.
//!     let config = FilterSortConfig::default()
//!         .with_language("Rust")
//!         .with_sort(SortKey::StarsDesc);
//!     pager.on_config_change(config).await;
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaginationController                      │
//! │  go_to_page  next  previous  on_config_change  retry        │
//! │  items_on_current_page  can_load_more  last_error           │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │ ensure_pages(n, config)
//! ┌──────────────────────────────┴──────────────────────────────┐
//! │                       InfiniteStore                         │
//! │  CollectionSession { generation, pages[], requested }       │
//! │  ordered growth · in-flight dedup · stale-result guard      │
//! └───────────┬──────────────────────────────────┬──────────────┘
//!             │ locator(index, config)           │ fetch_page(locator)
//! ┌───────────┴───────────┐          ┌───────────┴──────────────┐
//! │    LocatorStrategy    │          │       HttpFetcher        │
//! │  list vs search API   │          │  auth headers · envelope │
//! │  sort/filter mapping  │          │  normalization · errors  │
//! └───────────────────────┘          └──────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the cache core
pub mod error;

/// Common types and wire constants
pub mod types;

/// Credential provider for the GitHub API
pub mod auth;

/// Key derivation: (page index, config) → request locator
pub mod locator;

/// Fetch executor and the `PageFetcher` seam
pub mod fetch;

/// Page cache / infinite store
pub mod store;

/// Pagination controller
pub mod controller;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::AuthConfig;
pub use controller::PaginationController;
pub use error::{FetchError, FetchResult};
pub use fetch::{HttpFetcher, PageFetcher};
pub use locator::{LocatorStrategy, PageLocator};
pub use store::{CollectionSession, InfiniteStore, Page, PageStatus};
pub use types::{
    EndpointHint, EndpointKind, FilterSortConfig, Repo, SortKey, DEFAULT_PAGE_SIZE,
    SEARCH_MAX_PAGE_SIZE,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
