//! Display state produced by refresh cycles.

use super::Selection;
use crate::api::{NewsItem, SignalResult};
use crate::indicators::IndicatorSnapshot;
use chrono::{DateTime, Utc};

/// Phase of the current refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePhase {
    /// No cycle has run yet.
    #[default]
    Idle,
    /// Requests are outstanding.
    Fetching,
    /// Both requests resolved.
    Settled,
    /// Both requests resolved and at least one request task panicked or was
    /// aborted. Requires `panic = "unwind"`.
    Failed,
}

impl std::fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Fetching => write!(f, "Fetching"),
            Self::Settled => write!(f, "Settled"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Identifies the cycle a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleTag {
    /// Monotonic per orchestrator.
    pub generation: u64,
    pub selection: Selection,
}

/// Everything the view renders. Written only by the orchestrator.
#[derive(Debug, Clone)]
pub struct CycleState {
    pub selection: Selection,
    pub indicators: IndicatorSnapshot,
    /// Last accepted signal.
    pub signal: Option<SignalResult>,
    /// Last accepted headlines.
    pub news: Vec<NewsItem>,
    pub signal_loading: bool,
    pub news_loading: bool,
    /// Banner message, cleared when a new cycle starts.
    pub error: Option<String>,
    pub phase: CyclePhase,
    /// When the last cycle finished.
    pub last_updated: Option<DateTime<Utc>>,
}

impl CycleState {
    pub fn new(selection: Selection, indicators: IndicatorSnapshot) -> Self {
        Self {
            selection,
            indicators,
            signal: None,
            news: Vec::new(),
            signal_loading: false,
            news_loading: false,
            error: None,
            phase: CyclePhase::Idle,
            last_updated: None,
        }
    }

    /// Enter a new cycle: fresh indicators, both requests pending, no error.
    pub(crate) fn begin(&mut self, selection: Selection, indicators: IndicatorSnapshot) {
        self.selection = selection;
        self.indicators = indicators;
        self.signal_loading = true;
        self.news_loading = true;
        self.error = None;
        self.phase = CyclePhase::Fetching;
    }

    /// Close the cycle once nothing is loading.
    pub(crate) fn settle_if_done(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = if self.error.is_some() {
            CyclePhase::Failed
        } else {
            CyclePhase::Settled
        };
        self.last_updated = Some(Utc::now());
        true
    }

    pub fn is_loading(&self) -> bool {
        self.signal_loading || self.news_loading
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == CyclePhase::Fetching
    }
}
