//! Project-scoped REST endpoint integration
//!
//! Queries `{api_host}/api/v2/docsearch/` with the full project context and
//! decodes its `{ results: [...] }` response shape.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::backend::{SearchQuery, SearchResult};

/// Response envelope of `/api/v2/docsearch/`.
#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub results: Vec<ProjectHit>,
}

/// One ranked hit as the endpoint reports it.
#[derive(Debug, Deserialize)]
pub struct ProjectHit {
    pub link: String,
    pub title: String,
    pub path: String,
    pub project: String,
    #[serde(default)]
    pub highlight: ProjectHighlight,
}

/// Highlighted snippets for a hit. The service sends the title as a list of
/// marked-up fragments and the content as a single excerpt; either may be
/// missing when nothing matched that field.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectHighlight {
    pub title: Option<Vec<String>>,
    pub content: Option<String>,
}

/// Build the request URL. The free text is the only parameter that gets
/// percent-encoded; the service expects project/version/language verbatim.
pub(crate) fn request_url(query: &SearchQuery, api_host: &str) -> String {
    format!(
        "{api_host}/api/v2/docsearch/?q={}&project={}&version={}&language={}",
        urlencoding::encode(&query.text),
        query.project,
        query.version,
        query.language,
    )
}

/// Decode a response body into normalized results.
pub(crate) fn parse_response(body: &str) -> Result<Vec<SearchResult>> {
    let response: ProjectResponse =
        serde_json::from_str(body).context("Failed to decode docsearch response")?;
    Ok(response.results.into_iter().map(normalize).collect())
}

fn normalize(hit: ProjectHit) -> SearchResult {
    let highlighted_title = hit.highlight.title.and_then(|mut t| {
        if t.is_empty() { None } else { Some(t.remove(0)) }
    });

    SearchResult {
        title: hit.title,
        highlighted_title,
        path: hit.path,
        link: Some(hit.link),
        source_project: Some(hit.project),
        highlighted_content: hit.highlight.content,
    }
}
