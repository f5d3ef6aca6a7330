//! fxpulse - a terminal dashboard for AI-assisted forex signals.

use anyhow::Context;
use fxpulse::{App, Config, init_orchestrator};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log to a daily rolling file so output never lands on the TUI.
fn init_logging() -> WorkerGuard {
    let log_dir = fxpulse::config::log_dir().unwrap_or_else(|_| "logs".into());
    let file_appender = tracing_appender::rolling::daily(log_dir, "fxpulse.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxpulse=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = init_logging();

    // Load configuration
    let config = Config::load_or_default().context("failed to load configuration")?;

    // Fail on a missing credential before the terminal is touched
    let orchestrator = init_orchestrator(&config, |var| std::env::var(var).ok())?;

    tracing::info!(
        pair = %orchestrator.selection().pair(),
        timeframe = %orchestrator.selection().timeframe(),
        "Starting fxpulse"
    );

    // Run the application
    let mut app = App::new(config, orchestrator).context("failed to set up terminal")?;
    app.run().await?;

    Ok(())
}
