//! Raw search-index endpoint integration
//!
//! Queries `{api_host}/search/auto` and decodes the index engine's nested
//! `hits.hits` response shape. Unlike the project endpoint, the free text is
//! sent verbatim and hits carry no link or sub-project attribution.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::backend::{SearchQuery, SearchResult};

/// Response envelope of `/search/auto`.
#[derive(Debug, Deserialize)]
pub struct IndexResponse {
    pub hits: IndexHits,
}

#[derive(Debug, Deserialize)]
pub struct IndexHits {
    pub hits: Vec<IndexHit>,
}

/// One hit as the index engine reports it.
#[derive(Debug, Deserialize)]
pub struct IndexHit {
    #[serde(default)]
    pub highlight: IndexHighlight,
    #[serde(rename = "_source")]
    pub source: IndexSource,
}

/// Highlighted autocomplete fragments, keyed by sub-field name on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct IndexHighlight {
    #[serde(rename = "title.autocomplete")]
    pub title: Option<Vec<String>>,
    #[serde(rename = "content.autocomplete")]
    pub content: Option<Vec<String>>,
}

/// Stored document fields of a hit.
#[derive(Debug, Deserialize)]
pub struct IndexSource {
    pub title: String,
    pub path: String,
}

/// Build the request URL. The index endpoint takes the text as-is.
pub(crate) fn request_url(query: &SearchQuery, api_host: &str) -> String {
    format!("{api_host}/search/auto?q={}", query.text)
}

/// Decode a response body into normalized results.
pub(crate) fn parse_response(body: &str) -> Result<Vec<SearchResult>> {
    let response: IndexResponse =
        serde_json::from_str(body).context("Failed to decode search index response")?;
    Ok(response.hits.hits.into_iter().map(normalize).collect())
}

fn normalize(hit: IndexHit) -> SearchResult {
    SearchResult {
        title: hit.source.title,
        highlighted_title: first_fragment(hit.highlight.title),
        path: hit.source.path,
        link: None,
        source_project: None,
        highlighted_content: first_fragment(hit.highlight.content),
    }
}

fn first_fragment(fragments: Option<Vec<String>>) -> Option<String> {
    fragments.and_then(|mut f| if f.is_empty() { None } else { Some(f.remove(0)) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Backend, SearchQuery};
    use crate::config::SearchConfig;

    #[test]
    fn test_request_url_passes_text_through() {
        let config = SearchConfig::new("docs", "latest", "https://docs.example.com", Backend::Index);
        let query = SearchQuery::from_config(&config, "install");
        assert_eq!(
            request_url(&query, "https://docs.example.com"),
            "https://docs.example.com/search/auto?q=install"
        );
    }

    #[test]
    fn test_parse_response_maps_nested_hits() {
        let body = r#"{
            "hits": {
                "hits": [
                    {
                        "highlight": {
                            "title.autocomplete": ["<span>Install</span>ation"],
                            "content.autocomplete": ["how to <span>install</span>"]
                        },
                        "_source": {
                            "title": "Installation",
                            "path": "install.html"
                        }
                    },
                    {
                        "_source": {
                            "title": "Usage",
                            "path": "usage.html"
                        }
                    }
                ]
            }
        }"#;

        let results = parse_response(body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].highlighted_title.as_deref(),
            Some("<span>Install</span>ation")
        );
        assert_eq!(
            results[0].highlighted_content.as_deref(),
            Some("how to <span>install</span>")
        );
        assert_eq!(results[1].title, "Usage");
        assert_eq!(results[1].highlighted_title, None);
        assert_eq!(results[1].link, None);
        assert_eq!(results[1].source_project, None);
    }

    #[test]
    fn test_parse_response_rejects_wrong_shape() {
        assert!(parse_response(r#"{"results": []}"#).is_err());
    }
}
