//! Fetch executor module
//!
//! Performs one network call per locator, normalizes the two possible
//! success envelopes into a flat item list, and classifies failures into
//! [`crate::FetchError`]. One attempt per call; retry policy, if the
//! embedding application wants one, sits outside this layer.
//!
//! # Overview
//!
//! The store consumes fetching through the [`PageFetcher`] trait so tests
//! can script outcomes without a network; [`HttpFetcher`] is the production
//! implementation over the GitHub REST API.

mod executor;
mod types;

pub use executor::HttpFetcher;
pub use types::PageFetcher;
