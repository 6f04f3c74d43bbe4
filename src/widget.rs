//! Search-as-you-type widget
//!
//! Wires a page's search input to a documentation search backend: every
//! input event dispatches one query, and only the freshest response may
//! touch the results panel.
//!
//! Dispatch is split into three steps so that all panel mutation stays on
//! the caller's thread: [`SearchWidget::begin_query`] stamps the event with
//! a sequence number, [`SearchWidget::run_query`] performs the fetch, and
//! [`SearchWidget::apply`] updates the panel. Responses may be awaited and
//! applied in any order; an earlier query finishing after a later one is
//! discarded rather than overwriting the panel.

use anyhow::Result;

use crate::backend::{SearchQuery, SearchResult};
use crate::client::SearchClient;
use crate::config::SearchConfig;
use crate::page::Page;
use crate::render::{ResultsPanel, WIDGET_STYLESHEET};

/// Whether a results panel is currently attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    ResultsShown,
}

/// A dispatched query, tagged with its sequence number.
#[derive(Debug, Clone)]
pub struct PendingQuery {
    seq: u64,
    query: SearchQuery,
}

impl PendingQuery {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// The outcome of one query, ready to be applied to the panel.
#[derive(Debug)]
pub struct QueryOutcome {
    seq: u64,
    results: Result<Vec<SearchResult>>,
}

/// Search-as-you-type widget for one page.
///
/// Holds the immutable search context, the HTTP client, and the sequence
/// bookkeeping that keeps the panel consistent under out-of-order responses.
#[derive(Debug)]
pub struct SearchWidget {
    config: SearchConfig,
    client: SearchClient,
    next_seq: u64,
    last_seq: u64,
    state: WidgetState,
}

impl SearchWidget {
    /// Attach to `page`, injecting the widget stylesheet once.
    ///
    /// Returns `None` without touching the page when the search input or
    /// results anchor is missing; providing both is the host page's
    /// precondition.
    pub fn attach(config: SearchConfig, page: &mut Page) -> Option<Self> {
        if !page.has_search_input() || !page.has_results_anchor() {
            tracing::debug!("Page has no search input, widget not attached");
            return None;
        }

        page.inject_stylesheet(WIDGET_STYLESHEET);
        let client = SearchClient::new(config.backend, &config.api_host);

        Some(Self {
            config,
            client,
            next_seq: 0,
            last_seq: 0,
            state: WidgetState::Idle,
        })
    }

    /// Stamp a new query for the current input text.
    pub fn begin_query(&mut self, text: &str) -> PendingQuery {
        self.next_seq += 1;
        PendingQuery {
            seq: self.next_seq,
            query: SearchQuery::from_config(&self.config, text),
        }
    }

    /// Fetch one pending query. Takes `&self` so multiple in-flight queries
    /// can be awaited concurrently and applied later.
    pub async fn run_query(&self, pending: &PendingQuery) -> QueryOutcome {
        QueryOutcome {
            seq: pending.seq,
            results: self.client.search(&pending.query).await,
        }
    }

    /// Apply an outcome to the page's panel slot.
    ///
    /// An outcome older than the latest one handled is discarded. A
    /// non-empty result set replaces the panel, an empty one clears it, and
    /// a failed fetch is logged and leaves the panel as-is; the next
    /// keystroke replaces it anyway.
    pub fn apply(&mut self, outcome: QueryOutcome, page: &mut Page) {
        if outcome.seq <= self.last_seq {
            tracing::debug!(seq = outcome.seq, "Discarding stale search response");
            return;
        }
        self.last_seq = outcome.seq;

        match outcome.results {
            Ok(results) if !results.is_empty() => {
                page.show_panel(ResultsPanel::render(&results, &self.config.project));
                self.state = WidgetState::ResultsShown;
            }
            Ok(_) => {
                tracing::debug!(seq = outcome.seq, "No results");
                page.clear_panel();
                self.state = WidgetState::Idle;
            }
            Err(error) => {
                tracing::warn!("Search request failed: {error:#}");
            }
        }
    }

    /// Convenience path for drivers that await each query before the next
    /// input event, like the CLI.
    pub async fn handle_input(&mut self, text: &str, page: &mut Page) {
        let pending = self.begin_query(text);
        let outcome = self.run_query(&pending).await;
        self.apply(outcome, page);
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
