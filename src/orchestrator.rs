//! Refresh orchestration.
//!
//! The [`RefreshOrchestrator`] owns the polling timer and the [`CycleState`].
//! Each cycle generates a fresh indicator snapshot, then asks the signal and
//! news clients concurrently. Every response travels back through a channel
//! together with the [`CycleTag`] it was dispatched under, and is written
//! only if that tag is still the current one. Superseded requests are left
//! to finish; their results are dropped.

use crate::api::{NewsClient, NewsItem, SignalClient, SignalResult};
use crate::catalog::{CurrencyPair, Timeframe};
use crate::error::{Error, Result};
use crate::indicators::{IndicatorGenerator, IndicatorSnapshot};
use crate::state::{CycleState, CycleTag, Selection, SelectionState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Default auto-refresh cadence.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Banner text when a request could not be completed at all.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch data from the AI service. Please check your API key and try again.";

/// Something the orchestrator has to react to.
#[derive(Debug)]
pub enum CycleEvent {
    /// The refresh timer elapsed.
    Tick,
    /// The signal request of a cycle finished.
    SignalResolved {
        tag: CycleTag,
        result: Result<SignalResult>,
    },
    /// The news request of a cycle finished.
    NewsResolved {
        tag: CycleTag,
        result: Result<Vec<NewsItem>>,
    },
}

/// Drives refresh cycles and owns the display state.
pub struct RefreshOrchestrator {
    signal_client: Arc<dyn SignalClient>,
    news_client: Arc<dyn NewsClient>,
    generator: IndicatorGenerator,
    selection: SelectionState,
    state: CycleState,
    generation: u64,
    current_tag: Option<CycleTag>,
    refresh_interval: Duration,
    /// Present while started.
    timer: Option<Interval>,
    event_tx: mpsc::UnboundedSender<CycleEvent>,
    event_rx: mpsc::UnboundedReceiver<CycleEvent>,
}

impl RefreshOrchestrator {
    /// Create an orchestrator for `selection`. No cycle runs until [`start`](Self::start).
    pub fn new(
        signal_client: Arc<dyn SignalClient>,
        news_client: Arc<dyn NewsClient>,
        selection: Selection,
    ) -> Self {
        Self::with_generator(
            signal_client,
            news_client,
            selection,
            IndicatorGenerator::new(),
        )
    }

    /// Create an orchestrator with a specific indicator generator.
    pub fn with_generator(
        signal_client: Arc<dyn SignalClient>,
        news_client: Arc<dyn NewsClient>,
        selection: Selection,
        mut generator: IndicatorGenerator,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let state = CycleState::new(selection, generator.generate());

        Self {
            signal_client,
            news_client,
            generator,
            selection: SelectionState::new(selection),
            state,
            generation: 0,
            current_tag: None,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            timer: None,
            event_tx,
            event_rx,
        }
    }

    /// Set the auto-refresh cadence. Takes effect the next time the timer is created.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Current display state.
    pub fn state(&self) -> &CycleState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Tag of the cycle whose responses are currently accepted.
    pub fn current_tag(&self) -> Option<CycleTag> {
        self.current_tag
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Create the timer and run the first cycle. No-op if already started.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        info!(
            interval_secs = self.refresh_interval.as_secs(),
            "Refresh orchestrator started"
        );
        self.reset_timer();
        self.start_cycle();
    }

    /// Drop the timer. In-flight responses are still applied if current.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            info!("Refresh orchestrator stopped");
        }
    }

    /// Begin a new cycle for the current selection.
    ///
    /// The new indicators and both loading flags are visible as soon as this
    /// returns; the two requests resolve later through [`next_event`](Self::next_event).
    pub fn start_cycle(&mut self) -> CycleTag {
        self.generation += 1;
        let tag = CycleTag {
            generation: self.generation,
            selection: self.selection.current(),
        };
        let indicators = self.generator.generate();

        self.state.begin(tag.selection, indicators);
        self.current_tag = Some(tag);

        debug!(
            generation = tag.generation,
            pair = tag.selection.pair.name,
            timeframe = tag.selection.timeframe.value,
            "Starting refresh cycle"
        );
        self.dispatch(tag, indicators);
        tag
    }

    /// Switch to a new selection and start a cycle for it.
    ///
    /// Responses tagged with the previous selection are discarded from now on,
    /// and the timer restarts its full interval.
    pub fn change_selection(&mut self, pair: CurrencyPair, timeframe: Timeframe) -> CycleTag {
        self.selection.set_pair(pair);
        self.selection.set_timeframe(timeframe);
        if self.is_running() {
            self.reset_timer();
        }
        self.start_cycle()
    }

    /// Change only the pair. Returns `None` if it was already selected.
    pub fn set_pair(&mut self, pair: CurrencyPair) -> Option<CycleTag> {
        if pair == self.selection.pair() {
            return None;
        }
        Some(self.change_selection(pair, self.selection.timeframe()))
    }

    /// Change only the timeframe. Returns `None` if it was already selected.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> Option<CycleTag> {
        if timeframe == self.selection.timeframe() {
            return None;
        }
        Some(self.change_selection(self.selection.pair(), timeframe))
    }

    /// Manual refresh. Always starts a cycle, superseding any in flight.
    pub fn refresh(&mut self) -> CycleTag {
        self.start_cycle()
    }

    /// Timer tick: start a cycle unless one is already fetching.
    pub fn on_tick(&mut self) -> Option<CycleTag> {
        if self.state.is_fetching() {
            debug!("Refresh tick skipped, cycle still fetching");
            return None;
        }
        Some(self.start_cycle())
    }

    /// Wait for the next response or timer tick.
    pub async fn next_event(&mut self) -> CycleEvent {
        tokio::select! {
            Some(event) = self.event_rx.recv() => event,
            () = next_tick(&mut self.timer) => CycleEvent::Tick,
        }
    }

    /// Apply an event to the display state.
    pub fn handle_event(&mut self, event: CycleEvent) {
        match event {
            CycleEvent::Tick => {
                self.on_tick();
            }
            CycleEvent::SignalResolved { tag, result } => {
                if !self.accepts(&tag) {
                    debug!(
                        generation = tag.generation,
                        pair = tag.selection.pair.name,
                        "Discarding stale signal"
                    );
                    return;
                }
                match result {
                    Ok(signal) => self.state.signal = Some(signal),
                    Err(e) => self.record_failure("signal", &e),
                }
                self.state.signal_loading = false;
                self.settle();
            }
            CycleEvent::NewsResolved { tag, result } => {
                if !self.accepts(&tag) {
                    debug!(
                        generation = tag.generation,
                        pair = tag.selection.pair.name,
                        "Discarding stale news"
                    );
                    return;
                }
                match result {
                    Ok(news) => self.state.news = news,
                    Err(e) => self.record_failure("news", &e),
                }
                self.state.news_loading = false;
                self.settle();
            }
        }
    }

    /// Staleness guard: only the current cycle, for the current selection, may write.
    fn accepts(&self, tag: &CycleTag) -> bool {
        self.current_tag.as_ref() == Some(tag) && tag.selection == self.selection.current()
    }

    fn record_failure(&mut self, request: &str, error: &Error) {
        warn!(request, error = %error, "Request did not complete");
        self.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
    }

    fn settle(&mut self) {
        if self.state.settle_if_done() {
            debug!(phase = %self.state.phase, "Refresh cycle finished");
        }
    }

    fn reset_timer(&mut self) {
        let period = self.refresh_interval;
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(interval);
    }

    /// Spawn both requests and a driver that reports each as it resolves.
    fn dispatch(&self, tag: CycleTag, indicators: IndicatorSnapshot) {
        let Selection { pair, timeframe } = tag.selection;

        let signal_client = Arc::clone(&self.signal_client);
        let signal_task = tokio::spawn(async move {
            signal_client
                .trading_signal(pair, timeframe, indicators)
                .await
        });

        let news_client = Arc::clone(&self.news_client);
        let news_task = tokio::spawn(async move { news_client.currency_news(pair).await });

        let signal_tx = self.event_tx.clone();
        let news_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let signal = async move {
                let result = signal_task.await.map_err(|e| Error::task(e.to_string()));
                if signal_tx
                    .send(CycleEvent::SignalResolved { tag, result })
                    .is_err()
                {
                    debug!("Orchestrator gone before signal resolved");
                }
            };
            let news = async move {
                let result = news_task.await.map_err(|e| Error::task(e.to_string()));
                if news_tx.send(CycleEvent::NewsResolved { tag, result }).is_err() {
                    debug!("Orchestrator gone before news resolved");
                }
            };

            futures::future::join(signal, news).await;
        });
    }
}

async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
