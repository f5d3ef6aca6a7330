//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Height of the error banner when shown.
const BANNER_HEIGHT: u16 = 3;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Pair and timeframe selector.
    pub selector_area: Rect,
    /// Indicators and recommendation.
    pub signal_area: Rect,
    /// Headlines.
    pub news_area: Rect,
    /// Error banner, zero-height when there is no error.
    pub banner_area: Rect,
    /// Disclaimer and key hints.
    pub footer_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, show_banner: bool, show_help_bar: bool) -> Self {
        let banner_height = if show_banner { BANNER_HEIGHT } else { 0 };
        let footer_height = if show_help_bar { 2 } else { 1 };

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Status bar
                Constraint::Length(2),             // Selector
                Constraint::Min(0),                // Body
                Constraint::Length(banner_height), // Error banner
                Constraint::Length(footer_height), // Footer
            ])
            .split(area);

        let body = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(chunks[2]);

        Self {
            status_area: chunks[0],
            selector_area: chunks[1],
            signal_area: body[0],
            news_area: body[1],
            banner_area: chunks[3],
            footer_area: chunks[4],
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
