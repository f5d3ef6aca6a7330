//! Event handler for turning terminal input into actions.

use super::InputEvent;
use crate::catalog::TIMEFRAMES;
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::Action;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    keybindings: KeyBindings,
    /// How long a single poll waits for input.
    poll_timeout: Duration,
}

impl EventHandler {
    pub fn new(keybindings: KeyBindings, poll_timeout: Duration) -> Self {
        Self {
            keybindings,
            poll_timeout,
        }
    }

    /// Get the next action from user input, if any arrived within the poll timeout.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(self.handle_key(key)),
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Map a key press to an action.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let input = InputEvent::from(key);
        let bindings = &self.keybindings;

        if input.matches(&bindings.quit) || input.matches("Ctrl+c") || key.code == KeyCode::Esc {
            return Some(Action::Quit);
        }
        if input.matches(&bindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&bindings.refresh) {
            return Some(Action::Refresh);
        }

        if input.matches(&bindings.next_pair) || key.code == KeyCode::Down {
            return Some(Action::NextPair);
        }
        if input.matches(&bindings.prev_pair) || key.code == KeyCode::Up {
            return Some(Action::PrevPair);
        }
        if input.matches(&bindings.next_timeframe)
            || key.code == KeyCode::Right
            || key.code == KeyCode::Tab
        {
            return Some(Action::NextTimeframe);
        }
        if input.matches(&bindings.prev_timeframe)
            || key.code == KeyCode::Left
            || key.code == KeyCode::BackTab
        {
            return Some(Action::PrevTimeframe);
        }

        // 1-4 jump straight to a timeframe
        input
            .char()
            .and_then(|c| c.to_digit(10))
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|i| TIMEFRAMES.get(i).copied())
            .map(Action::SelectTimeframe)
    }
}
