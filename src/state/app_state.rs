//! Application-level (non-cycle) state.

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Whether to show the key hint line.
    pub show_help_bar: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state.
    pub fn new(show_help_bar: bool) -> Self {
        Self {
            show_help_bar,
            ..Default::default()
        }
    }
}
