//! Currently selected pair and timeframe.

use crate::catalog::{self, CURRENCY_PAIRS, CurrencyPair, TIMEFRAMES, Timeframe};

/// A (pair, timeframe) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub pair: CurrencyPair,
    pub timeframe: Timeframe,
}

impl Selection {
    pub fn new(pair: CurrencyPair, timeframe: Timeframe) -> Self {
        Self { pair, timeframe }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(catalog::DEFAULT_PAIR, catalog::DEFAULT_TIMEFRAME)
    }
}

/// Holds the user's selection. Setters report whether anything changed.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub fn new(selection: Selection) -> Self {
        Self { current: selection }
    }

    pub fn current(&self) -> Selection {
        self.current
    }

    pub fn pair(&self) -> CurrencyPair {
        self.current.pair
    }

    pub fn timeframe(&self) -> Timeframe {
        self.current.timeframe
    }

    /// Set the pair. Returns `true` if it changed.
    pub fn set_pair(&mut self, pair: CurrencyPair) -> bool {
        let changed = self.current.pair != pair;
        self.current.pair = pair;
        changed
    }

    /// Set the timeframe. Returns `true` if it changed.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> bool {
        let changed = self.current.timeframe != timeframe;
        self.current.timeframe = timeframe;
        changed
    }

    /// Pair after the current one in catalog order, wrapping around.
    pub fn next_pair(&self) -> CurrencyPair {
        let index = catalog::pair_index(&self.current.pair).map_or(0, |i| i + 1);
        CURRENCY_PAIRS[index % CURRENCY_PAIRS.len()]
    }

    /// Pair before the current one in catalog order, wrapping around.
    pub fn prev_pair(&self) -> CurrencyPair {
        let len = CURRENCY_PAIRS.len();
        let index = catalog::pair_index(&self.current.pair).unwrap_or(0);
        CURRENCY_PAIRS[(index + len - 1) % len]
    }

    /// Timeframe after the current one, wrapping around.
    pub fn next_timeframe(&self) -> Timeframe {
        let index = catalog::timeframe_index(&self.current.timeframe).map_or(0, |i| i + 1);
        TIMEFRAMES[index % TIMEFRAMES.len()]
    }

    /// Timeframe before the current one, wrapping around.
    pub fn prev_timeframe(&self) -> Timeframe {
        let len = TIMEFRAMES.len();
        let index = catalog::timeframe_index(&self.current.timeframe).unwrap_or(0);
        TIMEFRAMES[(index + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let state = SelectionState::default();
        assert_eq!(state.pair().name, "EUR/USD");
        assert_eq!(state.timeframe().label, "5 Min");
    }

    #[test]
    fn test_setters_report_change() {
        let mut state = SelectionState::default();
        assert!(!state.set_pair(CURRENCY_PAIRS[0]));
        assert!(state.set_pair(CURRENCY_PAIRS[3]));
        assert_eq!(state.pair(), CURRENCY_PAIRS[3]);

        assert!(!state.set_timeframe(TIMEFRAMES[2]));
        assert!(state.set_timeframe(TIMEFRAMES[0]));
        assert_eq!(state.current(), Selection::new(CURRENCY_PAIRS[3], TIMEFRAMES[0]));
    }

    #[test]
    fn test_pair_cycling_wraps() {
        let mut state = SelectionState::default();
        assert_eq!(state.prev_pair(), CURRENCY_PAIRS[9]);
        assert_eq!(state.next_pair(), CURRENCY_PAIRS[1]);

        state.set_pair(CURRENCY_PAIRS[9]);
        assert_eq!(state.next_pair(), CURRENCY_PAIRS[0]);
    }

    #[test]
    fn test_timeframe_cycling_wraps() {
        let mut state = SelectionState::default();
        assert_eq!(state.next_timeframe(), TIMEFRAMES[3]);
        state.set_timeframe(TIMEFRAMES[3]);
        assert_eq!(state.next_timeframe(), TIMEFRAMES[0]);
        state.set_timeframe(TIMEFRAMES[0]);
        assert_eq!(state.prev_timeframe(), TIMEFRAMES[3]);
    }
}
