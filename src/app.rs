//! Main application module.
//!
//! This module contains the main `App` struct that owns the terminal, the
//! refresh orchestrator and the event loop multiplexing the two.

use crate::api::{AiNewsClient, AiSignalClient, GeminiTransport};
use crate::config::{ApiKey, Config, KeyBindings};
use crate::error::{Error, Result};
use crate::events::EventHandler;
use crate::orchestrator::RefreshOrchestrator;
use crate::state::{Action, AppState, Selection};
use crate::ui::Ui;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use tracing::info;

/// Build the orchestrator from configuration.
///
/// The API credential is resolved first through `lookup`, so a missing key
/// fails here before any client exists or any cycle runs.
pub fn init_orchestrator(
    config: &Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<RefreshOrchestrator> {
    let api_key = ApiKey::from_lookup(&config.api.api_key_env, lookup)?;

    let transport = Arc::new(
        GeminiTransport::builder(api_key)
            .config(config.api.clone())
            .build()?,
    );
    let signal_client = Arc::new(AiSignalClient::new(transport.clone(), &config.api));
    let news_client = Arc::new(AiNewsClient::new(transport, &config.api));

    let selection = Selection::new(config.ui.default_pair()?, config.ui.default_timeframe()?);

    Ok(
        RefreshOrchestrator::new(signal_client, news_client, selection)
            .with_refresh_interval(config.ui.refresh_interval()),
    )
}

/// Route an action to the app state or the orchestrator.
pub fn dispatch_action(orchestrator: &mut RefreshOrchestrator, app: &mut AppState, action: Action) {
    if !action.targets_orchestrator() {
        app.reduce(&action);
        return;
    }

    let selection = orchestrator.selection().clone();
    match action {
        Action::SelectPair(pair) => {
            orchestrator.set_pair(pair);
        }
        Action::SelectTimeframe(timeframe) => {
            orchestrator.set_timeframe(timeframe);
        }
        Action::NextPair => {
            let pair = selection.next_pair();
            orchestrator.set_pair(pair);
        }
        Action::PrevPair => {
            let pair = selection.prev_pair();
            orchestrator.set_pair(pair);
        }
        Action::NextTimeframe => {
            let timeframe = selection.next_timeframe();
            orchestrator.set_timeframe(timeframe);
        }
        Action::PrevTimeframe => {
            let timeframe = selection.prev_timeframe();
            orchestrator.set_timeframe(timeframe);
        }
        Action::Refresh => {
            orchestrator.refresh();
        }
        Action::ToggleHelp | Action::Quit => {}
    }
}

/// The main application.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    orchestrator: RefreshOrchestrator,
    app_state: AppState,
    event_handler: EventHandler,
    keybindings: KeyBindings,
}

impl App {
    /// Set up the terminal and create the application.
    pub fn new(config: Config, orchestrator: RefreshOrchestrator) -> Result<Self> {
        // Set up terminal
        enable_raw_mode().map_err(|e| Error::terminal(format!("failed to enable raw mode: {e}")))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| Error::terminal(format!("failed to enter alternate screen: {e}")))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let event_handler = EventHandler::new(config.keybindings.clone(), config.ui.tick_rate());

        Ok(Self {
            terminal,
            orchestrator,
            app_state: AppState::new(config.ui.show_help_bar),
            event_handler,
            keybindings: config.keybindings,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        self.orchestrator.start();

        loop {
            self.terminal.draw(|frame| {
                Ui::render(
                    frame,
                    self.orchestrator.state(),
                    &self.app_state,
                    &self.keybindings,
                );
            })?;

            tokio::select! {
                // Handle terminal input
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        dispatch_action(&mut self.orchestrator, &mut self.app_state, action);
                    }
                }

                // Handle responses and timer ticks
                event = self.orchestrator.next_event() => {
                    self.orchestrator.handle_event(event);
                }
            }

            if self.app_state.should_quit {
                break;
            }
        }

        self.orchestrator.stop();
        info!("Exiting");
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CURRENCY_PAIRS, TIMEFRAMES};
    use crate::state::CyclePhase;

    fn offline_config() -> Config {
        let mut config = Config::default();
        config.api.base_url = "http://127.0.0.1:9".to_string();
        config
    }

    fn with_key(var: &str) -> Option<String> {
        (var == "API_KEY").then(|| "test-key".to_string())
    }

    #[test]
    fn test_missing_credential_fails_before_any_cycle() {
        let err = init_orchestrator(&Config::default(), |_| None)
            .err()
            .expect("missing key must fail");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: API_KEY environment variable not set"
        );
    }

    #[test]
    fn test_init_uses_configured_selection() {
        let mut config = Config::default();
        config.ui.default_pair = "USD/JPY".to_string();
        config.ui.default_timeframe = "1 minute".to_string();

        let orchestrator = init_orchestrator(&config, with_key).unwrap();
        let selection = orchestrator.selection().current();
        assert_eq!(selection.pair.name, "USD/JPY");
        assert_eq!(selection.timeframe, TIMEFRAMES[0]);
        assert_eq!(orchestrator.state().phase, CyclePhase::Idle);
        assert!(!orchestrator.is_running());
    }

    #[test]
    fn test_init_honours_custom_key_variable() {
        let mut config = Config::default();
        config.api.api_key_env = "GEMINI_KEY".to_string();

        assert!(init_orchestrator(&config, with_key).is_err());
        assert!(init_orchestrator(&config, |var| (var == "GEMINI_KEY").then(|| "k".into())).is_ok());
    }

    #[tokio::test]
    async fn test_dispatch_routes_actions() {
        let mut orchestrator = init_orchestrator(&offline_config(), with_key).unwrap();
        let mut app = AppState::new(true);

        dispatch_action(&mut orchestrator, &mut app, Action::NextPair);
        assert_eq!(orchestrator.selection().pair(), CURRENCY_PAIRS[1]);
        assert!(orchestrator.state().is_fetching());
        let first = orchestrator.current_tag().unwrap();

        dispatch_action(&mut orchestrator, &mut app, Action::SelectTimeframe(TIMEFRAMES[3]));
        let second = orchestrator.current_tag().unwrap();
        assert_eq!(second.selection.timeframe, TIMEFRAMES[3]);
        assert!(second.generation > first.generation);

        // unchanged selection is a no-op
        dispatch_action(&mut orchestrator, &mut app, Action::SelectTimeframe(TIMEFRAMES[3]));
        assert_eq!(orchestrator.current_tag(), Some(second));

        dispatch_action(&mut orchestrator, &mut app, Action::Refresh);
        assert_eq!(
            orchestrator.current_tag().map(|t| t.generation),
            Some(second.generation + 1)
        );

        dispatch_action(&mut orchestrator, &mut app, Action::ToggleHelp);
        assert!(app.show_help);
        dispatch_action(&mut orchestrator, &mut app, Action::Quit);
        assert!(app.should_quit);
    }
}
