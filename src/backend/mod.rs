//! # Backend Integrations
//!
//! Two search endpoints exist in the wild, differing only in path, query
//! encoding, and response shape:
//!
//! - [`project`] - the project-scoped REST endpoint (`/api/v2/docsearch/`)
//! - [`index`] - the raw search-index endpoint (`/search/auto`)
//!
//! Both decode into the normalized [`SearchResult`] model, so the renderer
//! is written once against it.

pub mod index;
pub mod project;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;

/// Which search endpoint a deployment talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Project-scoped REST endpoint (`/api/v2/docsearch/`)
    Project,
    /// Raw search-index endpoint (`/search/auto`)
    Index,
}

impl Backend {
    /// Build the request URL for one query against this backend.
    pub fn request_url(&self, query: &SearchQuery, api_host: &str) -> String {
        match self {
            Backend::Project => project::request_url(query, api_host),
            Backend::Index => index::request_url(query, api_host),
        }
    }

    /// Decode a response body into normalized results.
    pub fn parse_response(&self, body: &str) -> Result<Vec<SearchResult>> {
        match self {
            Backend::Project => project::parse_response(body),
            Backend::Index => index::parse_response(body),
        }
    }
}

/// One query's worth of search context, derived anew per input event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    /// Free text from the search input
    pub text: String,
    /// Project slug the search is scoped to
    pub project: String,
    /// Documentation version
    pub version: String,
    /// Documentation language
    pub language: String,
}

impl SearchQuery {
    /// Combine the fixed config context with the current input text.
    pub fn from_config(config: &SearchConfig, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            project: config.project.clone(),
            version: config.version.clone(),
            language: config.language.clone(),
        }
    }
}

/// Normalized search hit, independent of which backend produced it.
///
/// Highlighted fields carry backend-supplied markup around matched terms and
/// take precedence over their plain counterparts when rendering. Transient:
/// lives only for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Plain page title
    pub title: String,
    /// Pre-highlighted title snippet, if the backend marked one up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_title: Option<String>,
    /// Page path within the documentation set
    pub path: String,
    /// Absolute link to the page; falls back to `path` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Originating sub-project, when the backend reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_project: Option<String>,
    /// Pre-highlighted content excerpt, if the backend marked one up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_content: Option<String>,
}
