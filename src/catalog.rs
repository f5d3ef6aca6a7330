//! Static catalog of tradeable currency pairs and chart timeframes.

use std::fmt;

/// A currency pair, e.g. `EUR/USD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    /// Unique display id.
    pub name: &'static str,
    pub base: &'static str,
    pub quote: &'static str,
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A chart timeframe. `value` is the duration token sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timeframe {
    pub label: &'static str,
    pub value: &'static str,
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const fn pair(name: &'static str, base: &'static str, quote: &'static str) -> CurrencyPair {
    CurrencyPair { name, base, quote }
}

/// All selectable pairs, in display order.
pub const CURRENCY_PAIRS: [CurrencyPair; 10] = [
    pair("EUR/USD", "EUR", "USD"),
    pair("GBP/USD", "GBP", "USD"),
    pair("USD/JPY", "USD", "JPY"),
    pair("USD/CHF", "USD", "CHF"),
    pair("AUD/USD", "AUD", "USD"),
    pair("USD/CAD", "USD", "CAD"),
    pair("NZD/USD", "NZD", "USD"),
    pair("EUR/JPY", "EUR", "JPY"),
    pair("GBP/JPY", "GBP", "JPY"),
    pair("BTC/USD", "BTC", "USD"),
];

/// All selectable timeframes, in display order.
pub const TIMEFRAMES: [Timeframe; 4] = [
    Timeframe {
        label: "1 Min",
        value: "1 minute",
    },
    Timeframe {
        label: "2 Min",
        value: "2 minutes",
    },
    Timeframe {
        label: "5 Min",
        value: "5 minutes",
    },
    Timeframe {
        label: "24 Hour",
        value: "24 hours",
    },
];

/// Pair selected at startup.
pub const DEFAULT_PAIR: CurrencyPair = CURRENCY_PAIRS[0];

/// Timeframe selected at startup.
pub const DEFAULT_TIMEFRAME: Timeframe = TIMEFRAMES[2];

/// Look up a pair by its display name (case-insensitive).
pub fn find_pair(name: &str) -> Option<CurrencyPair> {
    CURRENCY_PAIRS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// Look up a timeframe by label or value (case-insensitive).
pub fn find_timeframe(name: &str) -> Option<Timeframe> {
    let name = name.trim();
    TIMEFRAMES
        .iter()
        .find(|t| t.label.eq_ignore_ascii_case(name) || t.value.eq_ignore_ascii_case(name))
        .copied()
}

/// Position of a pair in [`CURRENCY_PAIRS`].
pub fn pair_index(pair: &CurrencyPair) -> Option<usize> {
    CURRENCY_PAIRS.iter().position(|p| p == pair)
}

/// Position of a timeframe in [`TIMEFRAMES`].
pub fn timeframe_index(timeframe: &Timeframe) -> Option<usize> {
    TIMEFRAMES.iter().position(|t| t == timeframe)
}
