//! HTTP fetch executor over the GitHub REST API

use super::types::PageFetcher;
use crate::auth::AuthConfig;
use crate::error::{FetchError, FetchResult};
use crate::locator::PageLocator;
use crate::types::{Repo, GITHUB_ACCEPT};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Fetch executor backed by a reqwest client.
///
/// Attaches the GitHub accept header and the configured credential, performs
/// exactly one attempt per call, and normalizes both response envelopes (the
/// list endpoint's bare array, the search endpoint's `items` object) into a
/// `Vec<Repo>`.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    auth: AuthConfig,
}

impl HttpFetcher {
    /// Create an executor with the given credential configuration
    pub fn new(auth: AuthConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self { client, auth }
    }

    /// Create an executor reusing an existing reqwest client
    pub fn with_client(client: Client, auth: AuthConfig) -> Self {
        Self { client, auth }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(AuthConfig::from_env())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    type Item = Repo;

    async fn fetch_page(&self, locator: &PageLocator) -> FetchResult<Vec<Repo>> {
        let req = self
            .auth
            .apply(self.client.get(locator.as_str()).header(ACCEPT, GITHUB_ACCEPT));

        let response = req.send().await.map_err(|e| {
            warn!(locator = %locator, error = %e, "transport failure");
            FetchError::transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(locator = %locator, status = status.as_u16(), "remote rejected request");
            return Err(FetchError::remote_rejected(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::decode(format!("failed to parse JSON: {e}")))?;

        let items = flatten_envelope(body)?;
        let repos = items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<Repo>(item)
                    .map_err(|e| FetchError::decode(format!("malformed repository record: {e}")))
            })
            .collect::<FetchResult<Vec<_>>>()?;

        debug!(locator = %locator, count = repos.len(), "page fetched");
        Ok(repos)
    }
}

/// Flatten the two success envelopes into an ordered record list.
///
/// The list endpoint returns a bare array; the search endpoint wraps its
/// results in `{ "total_count": ..., "items": [...] }`.
fn flatten_envelope(body: Value) -> FetchResult<Vec<Value>> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut envelope) => match envelope.remove("items") {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(FetchError::decode("envelope `items` field is not an array")),
            None => Err(FetchError::decode("envelope has no `items` field")),
        },
        _ => Err(FetchError::decode("response is neither array nor object")),
    }
}
