//! Results panel construction
//!
//! A [`ResultsPanel`] is an owned handle over one query's rendered matches.
//! Building one is a pure function of the results; attaching it to a page
//! replaces whatever panel was there before, so at most one can ever be
//! visible.
//!
//! Highlighted fields from the backend arrive pre-marked-up and are passed
//! through verbatim, per the service contract.

use crate::backend::SearchResult;
use crate::config::MAX_SUGGESTIONS;

/// One rendered entry: a link wrapping a title, a path line, and a content
/// excerpt.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelEntry {
    /// Link target; the page path when the backend supplied no absolute link
    pub href: String,
    /// Title markup, highlighted when the backend marked one up
    pub title_html: String,
    /// Path line, annotated with the originating sub-project when it differs
    pub path_html: String,
    /// Excerpt markup; empty when the backend sent no content highlight
    pub content_html: String,
}

/// The rendered subtree for one query's matches.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPanel {
    entries: Vec<PanelEntry>,
}

impl ResultsPanel {
    /// Render up to [`MAX_SUGGESTIONS`] results, starting from the
    /// top-ranked hit.
    pub fn render(results: &[SearchResult], configured_project: &str) -> Self {
        let entries = results
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|result| render_entry(result, configured_project))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the panel subtree with its documented class names.
    pub fn to_html(&self) -> String {
        let mut html =
            String::from("<div class=\"search__outer\"><div class=\"search__result__box\">");
        for entry in &self.entries {
            html.push_str("<div class=\"search__result__single\">");
            html.push_str(&format!("<a href=\"{}\"><div class=\"content\">", entry.href));
            html.push_str(&format!(
                "<h2 class=\"search__result__title\">{}</h2><br>",
                entry.title_html
            ));
            html.push_str(&format!(
                "<small class=\"search__result__path\">{}</small>",
                entry.path_html
            ));
            html.push_str(&format!(
                "<p class=\"search__result__content\">{}</p>",
                entry.content_html
            ));
            html.push_str("</div></a></div>");
        }
        html.push_str("</div></div>");
        html
    }
}

fn render_entry(result: &SearchResult, configured_project: &str) -> PanelEntry {
    let title_html = result
        .highlighted_title
        .clone()
        .unwrap_or_else(|| result.title.clone());

    let path_html = match &result.source_project {
        Some(project) if project != configured_project => {
            format!("{}(from <strong>{}</strong>)", result.path, project)
        }
        _ => result.path.clone(),
    };

    let content_html = match &result.highlighted_content {
        Some(excerpt) => format!("... {} ...", excerpt),
        None => String::new(),
    };

    let href = result
        .link
        .clone()
        .unwrap_or_else(|| result.path.clone());

    PanelEntry {
        href,
        title_html,
        path_html,
        content_html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_result(title: &str, path: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            highlighted_title: None,
            path: path.to_string(),
            link: Some(format!("https://docs.example.com/{path}")),
            source_project: Some("docs".to_string()),
            highlighted_content: None,
        }
    }

    #[test]
    fn test_render_caps_at_five_from_the_top() {
        let results: Vec<_> = (0..7)
            .map(|i| plain_result(&format!("Page {i}"), &format!("page-{i}.html")))
            .collect();

        let panel = ResultsPanel::render(&results, "docs");
        assert_eq!(panel.len(), 5);
        assert_eq!(panel.entries()[0].title_html, "Page 0");
        assert_eq!(panel.entries()[4].title_html, "Page 4");
    }

    #[test]
    fn test_highlighted_title_preferred_over_plain() {
        let mut result = plain_result("Installation", "install.html");
        result.highlighted_title = Some("<em>Install</em>ation".to_string());

        let panel = ResultsPanel::render(std::slice::from_ref(&result), "docs");
        assert_eq!(panel.entries()[0].title_html, "<em>Install</em>ation");
    }

    #[test]
    fn test_content_excerpt_wrapped_in_ellipses() {
        let mut result = plain_result("Installation", "install.html");
        result.highlighted_content = Some("the <em>install</em> step".to_string());

        let panel = ResultsPanel::render(std::slice::from_ref(&result), "docs");
        assert_eq!(
            panel.entries()[0].content_html,
            "... the <em>install</em> step ..."
        );
    }

    #[test]
    fn test_missing_content_renders_empty() {
        let result = plain_result("Installation", "install.html");
        let panel = ResultsPanel::render(std::slice::from_ref(&result), "docs");
        assert_eq!(panel.entries()[0].content_html, "");
    }

    #[test]
    fn test_cross_project_path_annotation() {
        let mut result = plain_result("Installation", "install.html");
        result.source_project = Some("subproject".to_string());

        let panel = ResultsPanel::render(std::slice::from_ref(&result), "docs");
        assert_eq!(
            panel.entries()[0].path_html,
            "install.html(from <strong>subproject</strong>)"
        );
    }

    #[test]
    fn test_same_project_path_unannotated() {
        let result = plain_result("Installation", "install.html");
        let panel = ResultsPanel::render(std::slice::from_ref(&result), "docs");
        assert_eq!(panel.entries()[0].path_html, "install.html");
    }

    #[test]
    fn test_href_falls_back_to_path() {
        let mut result = plain_result("Installation", "install.html");
        result.link = None;

        let panel = ResultsPanel::render(std::slice::from_ref(&result), "docs");
        assert_eq!(panel.entries()[0].href, "install.html");
    }

    #[test]
    fn test_html_uses_documented_class_names() {
        let result = plain_result("Installation", "install.html");
        let html = ResultsPanel::render(std::slice::from_ref(&result), "docs").to_html();

        assert!(html.starts_with("<div class=\"search__outer\">"));
        for class in [
            "search__result__box",
            "search__result__single",
            "search__result__title",
            "search__result__path",
            "search__result__content",
        ] {
            assert!(html.contains(class), "missing class: {class}");
        }
    }
}
