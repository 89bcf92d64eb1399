//! Locator strategy implementation
//!
//! Endpoint selection policy: a language filter or a star sort needs
//! server-side support only the search API has; everything else goes to the
//! cheaper list API.

use crate::types::{
    EndpointHint, EndpointKind, FilterSortConfig, SortKey, GITHUB_API_BASE, SEARCH_MAX_PAGE_SIZE,
};
use url::form_urlencoded::Serializer;

// ============================================================================
// Page locator
// ============================================================================

/// Fully-specified request target for one page under one configuration.
///
/// Two locators are equal iff they would retrieve the same data; that
/// equality is what the store de-duplicates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageLocator {
    url: String,
    endpoint: EndpointKind,
}

impl PageLocator {
    /// The full request URL
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Which endpoint family this locator targets
    pub fn endpoint(&self) -> EndpointKind {
        self.endpoint
    }
}

impl std::fmt::Display for PageLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

// ============================================================================
// Locator strategy
// ============================================================================

/// Derives page locators for one subject's repository collection.
///
/// Stateless and side-effect-free; one instance can be shared across
/// sessions.
#[derive(Debug, Clone)]
pub struct LocatorStrategy {
    base_url: String,
    login: String,
    page_size: u32,
}

impl LocatorStrategy {
    /// Create a strategy for the given user against the public GitHub API
    pub fn new(login: impl Into<String>, page_size: u32) -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            login: login.into(),
            page_size,
        }
    }

    /// Override the API base URL (GitHub Enterprise, mock servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The subject whose repositories are listed
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Configured page size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Derive the locator for a 0-based page index under the given config.
    ///
    /// Pure: identical `(page_index, config)` inputs always yield an
    /// identical locator.
    pub fn locator(&self, page_index: u32, config: &FilterSortConfig) -> PageLocator {
        match self.endpoint_for(config) {
            EndpointKind::List => self.list_locator(page_index, config),
            EndpointKind::Search => self.search_locator(page_index, config),
        }
    }

    /// Endpoint selection: the hint wins when explicit, otherwise a language
    /// filter or star sort requires the search family.
    fn endpoint_for(&self, config: &FilterSortConfig) -> EndpointKind {
        match config.endpoint_hint {
            EndpointHint::List => EndpointKind::List,
            EndpointHint::Search => EndpointKind::Search,
            EndpointHint::Auto => {
                if config.has_language_filter() || config.sort == SortKey::StarsDesc {
                    EndpointKind::Search
                } else {
                    EndpointKind::List
                }
            }
        }
    }

    fn list_locator(&self, page_index: u32, config: &FilterSortConfig) -> PageLocator {
        let (sort, direction) = list_sort_params(config.sort);
        let query = Serializer::new(String::new())
            .append_pair("sort", sort)
            .append_pair("direction", direction)
            .append_pair("per_page", &self.page_size.to_string())
            .append_pair("page", &(page_index + 1).to_string())
            .finish();

        PageLocator {
            url: format!("{}/users/{}/repos?{query}", self.base_url, self.login),
            endpoint: EndpointKind::List,
        }
    }

    fn search_locator(&self, page_index: u32, config: &FilterSortConfig) -> PageLocator {
        // Conjunctive qualifiers: every selected language must match. The
        // BTreeSet iteration order keeps the query deterministic.
        let mut q = format!("user:{}", self.login);
        for language in &config.languages {
            q.push_str(" language:");
            q.push_str(language);
        }

        let mut serializer = Serializer::new(String::new());
        serializer.append_pair("q", &q);
        if let Some((sort, order)) = search_sort_params(config.sort) {
            serializer.append_pair("sort", sort).append_pair("order", order);
        }
        let per_page = self.page_size.min(SEARCH_MAX_PAGE_SIZE);
        let query = serializer
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &(page_index + 1).to_string())
            .finish();

        PageLocator {
            url: format!("{}/search/repositories?{query}", self.base_url),
            endpoint: EndpointKind::Search,
        }
    }
}

/// Sort parameters for the list endpoint.
///
/// The list API has no star sort; a forced star sort falls back to the
/// default ordering.
fn list_sort_params(sort: SortKey) -> (&'static str, &'static str) {
    match sort {
        SortKey::UpdatedDesc | SortKey::StarsDesc => ("updated", "desc"),
        SortKey::UpdatedAsc => ("updated", "asc"),
        SortKey::NameAsc => ("full_name", "asc"),
    }
}

/// Sort parameters for the search endpoint.
///
/// The search API has no name sort; `NameAsc` omits the parameter and takes
/// the server's best-match order.
fn search_sort_params(sort: SortKey) -> Option<(&'static str, &'static str)> {
    match sort {
        SortKey::UpdatedDesc => Some(("updated", "desc")),
        SortKey::UpdatedAsc => Some(("updated", "asc")),
        SortKey::StarsDesc => Some(("stars", "desc")),
        SortKey::NameAsc => None,
    }
}
