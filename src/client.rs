//! HTTP dispatch for search queries

use anyhow::{Context, Result, bail};

use crate::backend::{Backend, SearchQuery, SearchResult};

/// Issues search requests against one backend and decodes the responses.
///
/// Every input event gets its own independent request; nothing is cached or
/// deduplicated here.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    backend: Backend,
    api_host: String,
}

impl SearchClient {
    /// Create a client for the given backend and API host.
    pub fn new(backend: Backend, api_host: impl Into<String>) -> Self {
        Self {
            http: build_http_client(),
            backend,
            api_host: api_host.into(),
        }
    }

    /// Fetch and normalize the results for one query.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let url = self.backend.request_url(query, &self.api_host);
        tracing::debug!("Search URL: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Search request failed for {:?}", query.text))?;

        if !response.status().is_success() {
            bail!("Search request returned HTTP {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read search response body")?;

        self.backend.parse_response(&body)
    }
}

/// Build the HTTP client with proper configuration
fn build_http_client() -> reqwest::Client {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    reqwest::Client::builder()
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to create HTTP client") // HTTP client creation should not fail with proper configuration
}
