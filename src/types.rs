//! Common types used throughout repopager
//!
//! Shared value types and wire constants: the repository record the remote
//! returns, the filter/sort configuration that keys a collection session,
//! and the endpoint-family discriminators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Wire constants
// ============================================================================

/// Default GitHub REST API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Accept header value required by the GitHub REST API
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Default number of repositories per page
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Hard per_page ceiling the search endpoint enforces server-side.
///
/// The search family rejects larger values rather than clamping them, so the
/// locator clamps before the request goes out.
pub const SEARCH_MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Item record
// ============================================================================

/// A repository record as returned by the GitHub API.
///
/// Only the fields the embedding view renders are kept; `id` is the identity
/// used for list keys. The cache core itself never inspects these fields
/// beyond counting items per page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    /// Stable identity of the repository
    pub id: u64,
    /// Repository name
    pub name: String,
    /// Owner-qualified name (`owner/name`)
    pub full_name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Primary language, if GitHub detected one
    pub language: Option<String>,
    /// Star count
    #[serde(default)]
    pub stargazers_count: u64,
    /// Whether the repository is a fork
    #[serde(default)]
    pub fork: bool,
    /// Web URL of the repository
    pub html_url: String,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Sort keys
// ============================================================================

/// Sort order for a repository listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently updated first
    #[default]
    UpdatedDesc,
    /// Least recently updated first
    UpdatedAsc,
    /// Most starred first
    StarsDesc,
    /// Alphabetical by name
    NameAsc,
}

// ============================================================================
// Endpoint families
// ============================================================================

/// The two remote endpoint families a page can be fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    /// `/users/{login}/repos` — cheap, bare-array envelope, update/name sort only
    List,
    /// `/search/repositories` — supports language filters and star sort,
    /// `items` envelope, server-capped page size
    Search,
}

/// Caller preference for which endpoint family to use.
///
/// `Auto` applies the selection policy (language filter or star sort forces
/// the search family); the explicit hints override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointHint {
    /// Derive the endpoint from the filter/sort configuration
    #[default]
    Auto,
    /// Force the list endpoint
    List,
    /// Force the search endpoint
    Search,
}

// ============================================================================
// Filter/sort configuration
// ============================================================================

/// Filter and sort criteria for one collection session.
///
/// This is an immutable value: a changed criterion means a new config, and a
/// new config (compared by value) invalidates every cached page. Languages
/// are kept in a `BTreeSet` so two configs with the same filter always encode
/// to the same request, whatever order the languages were added in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSortConfig {
    /// Languages the listing is narrowed to; empty means no filter
    pub languages: BTreeSet<String>,
    /// Sort order
    pub sort: SortKey,
    /// Endpoint family preference
    pub endpoint_hint: EndpointHint,
}

impl FilterSortConfig {
    /// Create a config with no filter and the default sort
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language to the filter
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.insert(language.into());
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the endpoint hint
    #[must_use]
    pub fn with_endpoint_hint(mut self, hint: EndpointHint) -> Self {
        self.endpoint_hint = hint;
        self
    }

    /// Whether any language filter is active
    pub fn has_language_filter(&self) -> bool {
        !self.languages.is_empty()
    }
}
