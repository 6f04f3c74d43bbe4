//! Minimal host-page model
//!
//! Models only the slice of the page the widget touches: an ordered list of
//! head elements (which fixes the stylesheet insertion point), the presence
//! of the `role="search"` input and results anchor, and the exclusive panel
//! slot. The real document, its CSS, and every other element belong to the
//! host and are out of scope.

use crate::render::ResultsPanel;

/// An element in the page's document order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageElement {
    /// A script element, identified by its source
    Script(String),
    /// An injected stylesheet block
    Style(String),
}

/// The host-page slice a widget attaches to.
///
/// The panel slot holds at most one [`ResultsPanel`] by construction;
/// attaching a new one discards the old.
#[derive(Debug, Default)]
pub struct Page {
    elements: Vec<PageElement>,
    has_search_input: bool,
    has_results_anchor: bool,
    panel: Option<ResultsPanel>,
}

impl Page {
    /// A page carrying the `role="search"` input and its anchor container.
    pub fn with_search_role() -> Self {
        Self {
            has_search_input: true,
            has_results_anchor: true,
            ..Self::default()
        }
    }

    /// A page without any search elements; widgets cannot attach to it.
    pub fn bare() -> Self {
        Self::default()
    }

    /// Append a script element at the end of the document order.
    pub fn push_script(&mut self, src: impl Into<String>) {
        self.elements.push(PageElement::Script(src.into()));
    }

    pub fn has_search_input(&self) -> bool {
        self.has_search_input
    }

    pub fn has_results_anchor(&self) -> bool {
        self.has_results_anchor
    }

    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    /// Insert `css` immediately before the first script element, appending
    /// at the end when the page has no script. Injecting the same block
    /// twice is a no-op, so the stylesheet lands once per page lifetime.
    pub fn inject_stylesheet(&mut self, css: &str) {
        let already_injected = self
            .elements
            .iter()
            .any(|element| matches!(element, PageElement::Style(existing) if existing == css));
        if already_injected {
            return;
        }

        let position = self
            .elements
            .iter()
            .position(|element| matches!(element, PageElement::Script(_)))
            .unwrap_or(self.elements.len());
        self.elements
            .insert(position, PageElement::Style(css.to_string()));
    }

    /// Attach a panel, discarding any panel currently shown.
    pub fn show_panel(&mut self, panel: ResultsPanel) {
        self.panel = Some(panel);
    }

    /// Detach and discard the current panel, if any.
    pub fn clear_panel(&mut self) {
        self.panel = None;
    }

    pub fn panel(&self) -> Option<&ResultsPanel> {
        self.panel.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SearchResult;

    fn panel_with(titles: &[&str]) -> ResultsPanel {
        let results: Vec<_> = titles
            .iter()
            .map(|title| SearchResult {
                title: title.to_string(),
                highlighted_title: None,
                path: "page.html".to_string(),
                link: None,
                source_project: None,
                highlighted_content: None,
            })
            .collect();
        ResultsPanel::render(&results, "docs")
    }

    #[test]
    fn test_stylesheet_inserted_before_first_script() {
        let mut page = Page::with_search_role();
        page.push_script("theme.js");
        page.push_script("analytics.js");

        page.inject_stylesheet(".search__outer {}");

        assert_eq!(
            page.elements()[0],
            PageElement::Style(".search__outer {}".to_string())
        );
        assert_eq!(page.elements()[1], PageElement::Script("theme.js".to_string()));
    }

    #[test]
    fn test_stylesheet_appended_when_no_script() {
        let mut page = Page::with_search_role();
        page.inject_stylesheet(".search__outer {}");

        assert_eq!(page.elements().len(), 1);
    }

    #[test]
    fn test_stylesheet_injected_once() {
        let mut page = Page::with_search_role();
        page.push_script("theme.js");

        page.inject_stylesheet(".search__outer {}");
        page.inject_stylesheet(".search__outer {}");

        let styles = page
            .elements()
            .iter()
            .filter(|e| matches!(e, PageElement::Style(_)))
            .count();
        assert_eq!(styles, 1);
    }

    #[test]
    fn test_show_panel_replaces_previous() {
        let mut page = Page::with_search_role();

        page.show_panel(panel_with(&["First", "Second"]));
        assert_eq!(page.panel().unwrap().len(), 2);

        page.show_panel(panel_with(&["Third"]));
        assert_eq!(page.panel().unwrap().len(), 1);
        assert_eq!(page.panel().unwrap().entries()[0].title_html, "Third");
    }

    #[test]
    fn test_clear_panel() {
        let mut page = Page::with_search_role();
        page.show_panel(panel_with(&["First"]));

        page.clear_panel();
        assert!(page.panel().is_none());
    }
}
