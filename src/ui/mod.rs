//! UI rendering using ratatui.
//!
//! Rendering is a pure function of the orchestrator's [`CycleState`] and the
//! [`AppState`]; nothing here mutates state.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{
    DISCLAIMER, Footer, HelpPanel, NewsPanel, SelectorBar, SignalPanel, StatusBar,
};

use crate::config::KeyBindings;
use crate::state::{AppState, CycleState};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, cycle: &CycleState, app: &AppState, keys: &KeyBindings) {
        let layout = Layout::new(frame.area(), cycle.error.is_some(), app.show_help_bar);

        StatusBar::render(frame, layout.status_area, cycle);
        SelectorBar::render(frame, layout.selector_area, &cycle.selection);
        SignalPanel::render(frame, layout.signal_area, cycle);
        NewsPanel::render(frame, layout.news_area, cycle);

        if let Some(error) = &cycle.error {
            widgets::render_error(frame, layout.banner_area, error);
        }

        Footer::render(frame, layout.footer_area, keys, app.show_help_bar);

        if app.show_help {
            HelpPanel::render(frame, frame.area(), keys);
        }
    }
}
