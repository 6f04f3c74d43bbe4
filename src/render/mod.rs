//! Results panel rendering and styling

pub mod panel;
pub mod style;

pub use panel::{PanelEntry, ResultsPanel};
pub use style::WIDGET_STYLESHEET;
