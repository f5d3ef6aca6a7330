//! Synthetic indicator generation.
//!
//! Values are drawn directly on their decimal grid (2 dp for RSI, 5 dp for the
//! MACD family), so the histogram is an exact decimal difference.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// RSI bounds, in hundredths.
const RSI_RANGE: (i64, i64) = (1_500, 8_500);
/// MACD line bounds, in units of 1e-5.
const MACD_RANGE: (i64, i64) = (-250, 250);
/// Signal line bounds, in units of 1e-5.
const SIGNAL_LINE_RANGE: (i64, i64) = (-200, 200);

/// A single snapshot of the indicator set shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// RSI(14), in [15, 85] at 2 decimals.
    pub rsi: Decimal,
    /// MACD line at 5 decimals.
    pub macd: Decimal,
    /// MACD signal line at 5 decimals.
    pub signal_line: Decimal,
    /// `macd - signal_line` at 5 decimals.
    pub histogram: Decimal,
}

impl IndicatorSnapshot {
    /// Build a snapshot, deriving the histogram.
    pub fn new(rsi: Decimal, macd: Decimal, signal_line: Decimal) -> Self {
        let macd = macd.round_dp(5);
        let signal_line = signal_line.round_dp(5);
        Self {
            rsi: rsi.round_dp(2),
            macd,
            signal_line,
            histogram: (macd - signal_line).round_dp(5),
        }
    }

    /// Whether the MACD line sits above its signal line.
    pub fn is_bullish_crossover(&self) -> bool {
        self.histogram > Decimal::ZERO
    }

    /// RSI above 70.
    pub fn is_overbought(&self) -> bool {
        self.rsi > Decimal::from(70)
    }

    /// RSI below 30.
    pub fn is_oversold(&self) -> bool {
        self.rsi < Decimal::from(30)
    }
}

/// Produces fresh [`IndicatorSnapshot`]s.
#[derive(Debug)]
pub struct IndicatorGenerator {
    rng: StdRng,
}

impl IndicatorGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a new snapshot.
    pub fn generate(&mut self) -> IndicatorSnapshot {
        let rsi = Decimal::new(self.draw(RSI_RANGE), 2);
        let macd = Decimal::new(self.draw(MACD_RANGE), 5);
        let signal_line = Decimal::new(self.draw(SIGNAL_LINE_RANGE), 5);
        IndicatorSnapshot::new(rsi, macd, signal_line)
    }

    fn draw(&mut self, (low, high): (i64, i64)) -> i64 {
        self.rng.gen_range(low..=high)
    }
}

impl Default for IndicatorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_histogram_is_exact_difference() {
        let mut generator = IndicatorGenerator::seeded(7);
        for _ in 0..5_000 {
            let s = generator.generate();
            assert_eq!(s.histogram, (s.macd - s.signal_line).round_dp(5));
        }
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut generator = IndicatorGenerator::seeded(42);
        for _ in 0..5_000 {
            let s = generator.generate();
            assert!(s.rsi >= dec!(15) && s.rsi <= dec!(85), "rsi {}", s.rsi);
            assert!(s.macd >= dec!(-0.0025) && s.macd <= dec!(0.0025));
            assert!(s.signal_line >= dec!(-0.002) && s.signal_line <= dec!(0.002));
            assert!(s.rsi.scale() <= 2);
            assert!(s.macd.scale() <= 5 && s.histogram.scale() <= 5);
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = IndicatorGenerator::seeded(99);
        let mut b = IndicatorGenerator::seeded(99);
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_new_rounds_inputs() {
        let s = IndicatorSnapshot::new(dec!(55.555), dec!(0.0012345), dec!(-0.0004321));
        assert_eq!(s.rsi, dec!(55.56));
        assert_eq!(s.macd, dec!(0.00123));
        assert_eq!(s.signal_line, dec!(-0.00043));
        assert_eq!(s.histogram, dec!(0.00166));
    }

    #[test]
    fn test_rsi_zones() {
        let hot = IndicatorSnapshot::new(dec!(78.2), dec!(0.001), dec!(0.002));
        assert!(hot.is_overbought());
        assert!(!hot.is_bullish_crossover());

        let cold = IndicatorSnapshot::new(dec!(21.0), dec!(0.002), dec!(0.001));
        assert!(cold.is_oversold());
        assert!(cold.is_bullish_crossover());
    }
}
