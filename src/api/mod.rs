//! Generative-model API integration.
//!
//! This module provides the two clients the dashboard talks to (trading
//! signal and currency news), both sitting on a single [`ModelTransport`]
//! that performs the actual `generateContent` HTTP call.
//!
//! Both clients are infallible by contract: any transport or parsing
//! failure is logged and converted into a safe fallback value.

mod converter;
mod news;
mod signal;
mod transport;
mod types;

pub use converter::{DataConverter, MAX_NEWS_ITEMS};
pub use news::AiNewsClient;
pub use signal::AiSignalClient;
pub use transport::{GeminiTransport, GeminiTransportBuilder, ModelTransport};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GroundingChunk, GroundingMetadata, Part, Tool, WebSource,
};

#[cfg(test)]
pub use transport::MockModelTransport;

use crate::catalog::{CurrencyPair, Timeframe};
use crate::indicators::IndicatorSnapshot;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended trading action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

impl SignalAction {
    /// All actions, in the order used by the response schema.
    pub const ALL: [SignalAction; 3] = [Self::Buy, Self::Sell, Self::Hold];

    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Hold => "HOLD",
        }
    }

    /// Parse an exact wire name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trading recommendation with its confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalResult {
    pub action: SignalAction,
    /// Integer score in 1..=10.
    pub confidence: u8,
}

impl SignalResult {
    pub const MIN_CONFIDENCE: u8 = 1;
    pub const MAX_CONFIDENCE: u8 = 10;

    /// Create a new signal, rejecting confidence outside 1..=10.
    pub fn new(action: SignalAction, confidence: u8) -> Option<Self> {
        (Self::MIN_CONFIDENCE..=Self::MAX_CONFIDENCE)
            .contains(&confidence)
            .then_some(Self { action, confidence })
    }

    /// The neutral signal used whenever the model cannot be consulted.
    pub fn fallback() -> Self {
        Self {
            action: SignalAction::Hold,
            confidence: Self::MIN_CONFIDENCE,
        }
    }

    /// Check if this is the neutral fallback value.
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

impl Default for SignalResult {
    fn default() -> Self {
        Self::fallback()
    }
}

/// A news headline with its source link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    /// De-duplication key.
    pub uri: String,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// Source of trading recommendations.
///
/// Implementations must never fail: anything that goes wrong is reported
/// as [`SignalResult::fallback`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignalClient: Send + Sync {
    async fn trading_signal(
        &self,
        pair: CurrencyPair,
        timeframe: Timeframe,
        indicators: IndicatorSnapshot,
    ) -> SignalResult;
}

/// Source of news headlines for a pair.
///
/// Implementations must never fail: anything that goes wrong is reported
/// as an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsClient: Send + Sync {
    async fn currency_news(&self, pair: CurrencyPair) -> Vec<NewsItem>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_round_trips_through_wire_name() {
        for action in SignalAction::ALL {
            assert_eq!(SignalAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(SignalAction::parse("buy"), None);
        assert_eq!(SignalAction::parse("STRONG BUY"), None);
    }

    #[test]
    fn test_action_serde_uses_uppercase() {
        let json = serde_json::to_string(&SignalAction::Sell).unwrap();
        assert_eq!(json, "\"SELL\"");
    }

    #[test]
    fn test_signal_confidence_bounds() {
        assert!(SignalResult::new(SignalAction::Buy, 0).is_none());
        assert!(SignalResult::new(SignalAction::Buy, 11).is_none());
        assert_eq!(
            SignalResult::new(SignalAction::Buy, 10).map(|s| s.confidence),
            Some(10)
        );
    }

    #[test]
    fn test_fallback_is_hold_one() {
        let fallback = SignalResult::fallback();
        assert_eq!(fallback.action, SignalAction::Hold);
        assert_eq!(fallback.confidence, 1);
        assert!(fallback.is_fallback());
        assert!(!SignalResult::new(SignalAction::Hold, 2).unwrap().is_fallback());
    }
}
