//! # Widget Configuration
//!
//! Provides the fixed search context supplied once at widget initialization,
//! plus the constants that bound rendering.

use crate::backend::Backend;

/// Maximum number of suggestions rendered in the results panel
pub const MAX_SUGGESTIONS: usize = 5;

/// Default documentation language when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Fixed search context for one widget: which project, version, and language
/// every query is scoped to, and which backend endpoint answers it.
///
/// Built once at initialization and immutable for the widget's lifetime.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Project slug the search is scoped to
    pub project: String,
    /// Documentation version (e.g. "latest", "stable", "v2.1")
    pub version: String,
    /// Documentation language code
    pub language: String,
    /// Base URL of the search API host, without a trailing slash
    pub api_host: String,
    /// Which endpoint variant this deployment talks to
    pub backend: Backend,
}

impl SearchConfig {
    /// Create a configuration with the default language.
    pub fn new(
        project: impl Into<String>,
        version: impl Into<String>,
        api_host: impl Into<String>,
        backend: Backend,
    ) -> Self {
        Self {
            project: project.into(),
            version: version.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            api_host: api_host.into(),
            backend,
        }
    }

    /// Override the documentation language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
