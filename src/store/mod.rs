//! Page cache module
//!
//! Holds the ordered sequence of fetched (or in-flight) pages for one
//! collection session, grows it on demand, de-duplicates concurrent fetches
//! for the same page, and recomputes derived counts.
//!
//! # Overview
//!
//! The store is the only owner of page state. Consistency under a changing
//! filter/sort config is handled at session granularity: a config change
//! resets the whole session under a fresh generation tag, and any result
//! that resolves under an older generation is dropped, never merged.

#[allow(clippy::module_inception)]
mod store;
mod types;

pub use store::InfiniteStore;
pub use types::{CollectionSession, Page, PageStatus};
