//! TUI widgets.

mod footer;
mod help;
mod news_panel;
mod notifications;
mod selector;
mod signal_panel;
mod status_bar;

pub use footer::{DISCLAIMER, Footer};
pub use help::HelpPanel;
pub use news_panel::NewsPanel;
pub use notifications::render_error;
pub use selector::SelectorBar;
pub use signal_panel::SignalPanel;
pub use status_bar::StatusBar;
