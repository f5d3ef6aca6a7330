//! Trading signal client.

use super::types::{GenerateContentRequest, GenerationConfig};
use super::{DataConverter, ModelTransport, SignalAction, SignalClient, SignalResult};
use crate::catalog::{CurrencyPair, Timeframe};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::indicators::IndicatorSnapshot;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Asks a generative model for a BUY/SELL/HOLD call on the current indicators.
pub struct AiSignalClient {
    transport: Arc<dyn ModelTransport>,
    model: String,
    temperature: f32,
}

impl AiSignalClient {
    /// Create a new signal client.
    pub fn new(transport: Arc<dyn ModelTransport>, config: &ApiConfig) -> Self {
        Self {
            transport,
            model: config.signal_model.clone(),
            temperature: config.signal_temperature,
        }
    }

    async fn request_signal(
        &self,
        pair: CurrencyPair,
        timeframe: Timeframe,
        indicators: IndicatorSnapshot,
    ) -> Result<SignalResult> {
        let request = GenerateContentRequest::prompt(signal_prompt(pair, timeframe, &indicators))
            .with_generation_config(GenerationConfig::json(signal_schema(), self.temperature));

        let response = self.transport.generate_content(&self.model, request).await?;
        let text = response
            .text()
            .ok_or_else(|| Error::invalid_response("signal response had no text"))?;

        DataConverter::parse_signal(&text)
    }
}

#[async_trait]
impl SignalClient for AiSignalClient {
    async fn trading_signal(
        &self,
        pair: CurrencyPair,
        timeframe: Timeframe,
        indicators: IndicatorSnapshot,
    ) -> SignalResult {
        match self.request_signal(pair, timeframe, indicators).await {
            Ok(signal) => {
                debug!(pair = pair.name, action = %signal.action, confidence = signal.confidence, "Signal received");
                signal
            }
            Err(e) => {
                warn!(pair = pair.name, error = %e, "Signal request failed, using HOLD fallback");
                SignalResult::fallback()
            }
        }
    }
}

/// Response schema constraining the model to `{signal, confidence}`.
pub(crate) fn signal_schema() -> serde_json::Value {
    let actions: Vec<&str> = SignalAction::ALL.iter().map(|a| a.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "signal": {
                "type": "STRING",
                "enum": actions,
                "description": "The trading decision."
            },
            "confidence": {
                "type": "INTEGER",
                "description": "Confidence from 1 (very low) to 10 (very high)."
            }
        },
        "required": ["signal", "confidence"]
    })
}

pub(crate) fn signal_prompt(
    pair: CurrencyPair,
    timeframe: Timeframe,
    indicators: &IndicatorSnapshot,
) -> String {
    format!(
        "Act as a forex technical analyst. Using only the indicator readings below, \
reply with a trading decision (BUY, SELL or HOLD) and a confidence score \
between 1 (very low) and 10 (very high), as JSON.

Market:
- Pair: {pair}
- Timeframe: {timeframe}
- RSI(14): {rsi:.2}
- MACD line: {macd:.5}
- MACD signal line: {signal_line:.5}
- MACD histogram: {histogram:.5}

Rules:
1. RSI above 70 is overbought and leans SELL; RSI below 30 is oversold and leans BUY.
2. MACD above its signal line with a positive, widening histogram leans BUY; \
MACD below its signal line with a negative, widening histogram leans SELL.
3. Scale confidence with how strongly and consistently the readings agree. \
Oversold RSI together with a fresh bullish crossover deserves a high BUY score. \
Mixed or neutral readings (RSI near 50, MACD lines close together) call for HOLD \
with low confidence.",
        pair = pair.name,
        timeframe = timeframe.value,
        rsi = indicators.rsi,
        macd = indicators.macd,
        signal_line = indicators.signal_line,
        histogram = indicators.histogram,
    )
}
