//! State management for fxpulse.
//!
//! User input is turned into [`Action`]s. Purely presentational actions are
//! reduced into [`AppState`]; selection and refresh actions are routed to the
//! refresh orchestrator, which is the only writer of [`CycleState`].

mod app_state;
mod cycle_state;
mod selection;

pub use app_state::AppState;
pub use cycle_state::{CyclePhase, CycleState, CycleTag};
pub use selection::{Selection, SelectionState};

use crate::catalog::{CurrencyPair, Timeframe};

/// Actions that can be dispatched from input handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Selection
    SelectPair(CurrencyPair),
    SelectTimeframe(Timeframe),
    NextPair,
    PrevPair,
    NextTimeframe,
    PrevTimeframe,

    // Data refresh
    Refresh,

    // UI actions
    ToggleHelp,

    // Quit
    Quit,
}

impl Action {
    /// Whether this action is handled by the orchestrator rather than the app state.
    pub fn targets_orchestrator(&self) -> bool {
        !matches!(self, Self::ToggleHelp | Self::Quit)
    }
}

impl AppState {
    /// Apply a UI action. Orchestrator actions are ignored here.
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }
}
