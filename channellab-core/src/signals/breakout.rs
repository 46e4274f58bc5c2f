//! Donchian channel breakout over closing prices.
//!
//! - Long when the close breaks above the highest close of the prior N bars
//! - Short when the close breaks below the lowest close of the prior N bars
//! - Otherwise hold the last decision (Flat before the first breakout)

use crate::domain::{Position, PriceSeries, SignalSeries};
use crate::error::CoreError;
use crate::indicators::{channel_bounds, ChannelBounds};

/// Donchian channel breakout signal.
///
/// # Parameters
/// - `period`: number of trailing closes forming the channel (>= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonchianBreakout {
    period: usize,
}

impl DonchianBreakout {
    pub fn new(period: usize) -> Result<Self, CoreError> {
        if period == 0 {
            return Err(CoreError::invalid("window must be a positive integer"));
        }
        Ok(Self { period })
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Breakout decision for one bar, `None` when the close stays inside the
    /// channel or no channel exists yet. Equality never triggers.
    pub fn decide(close: f64, bounds: Option<ChannelBounds>) -> Option<Position> {
        let bounds = bounds?;
        if close > bounds.upper {
            Some(Position::Long)
        } else if close < bounds.lower {
            Some(Position::Short)
        } else {
            None
        }
    }

    /// Position series for every bar of `prices`.
    ///
    /// The hold-last-decision rule is a scan whose accumulator starts Flat.
    pub fn generate(&self, prices: &PriceSeries) -> SignalSeries {
        let closes = prices.closes();
        let bounds = channel_bounds(closes, self.period);

        closes
            .iter()
            .zip(bounds)
            .scan(Position::Flat, |held, (&close, bounds)| {
                if let Some(decision) = Self::decide(close, bounds) {
                    *held = decision;
                }
                Some(*held)
            })
            .collect()
    }
}

/// Generate the breakout signal for `prices` with a `window`-bar channel.
///
/// Fails with [`CoreError::InvalidInput`] when `window` is zero.
pub fn generate_signal(prices: &PriceSeries, window: usize) -> Result<SignalSeries, CoreError> {
    Ok(DonchianBreakout::new(window)?.generate(prices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(closes: &[f64]) -> PriceSeries {
        PriceSeries::from_closes(closes.to_vec()).unwrap()
    }

    #[test]
    fn test_donchian_upside_breakout() {
        let s = series(&[100.0, 101.0, 102.0, 108.0]);
        let sig = generate_signal(&s, 3).unwrap();
        assert_eq!(sig.positions()[3], Position::Long);
    }

    #[test]
    fn test_donchian_downside_breakout() {
        let s = series(&[100.0, 101.0, 102.0, 94.0]);
        let sig = generate_signal(&s, 3).unwrap();
        assert_eq!(sig.positions()[3], Position::Short);
    }

    #[test]
    fn test_donchian_inside_channel_holds() {
        // Long at bar 2, then bar 3 sits inside [11, 12] and keeps Long.
        let s = series(&[10.0, 11.0, 12.0, 11.5]);
        let sig = generate_signal(&s, 2).unwrap();
        assert_eq!(sig.values(), vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_donchian_insufficient_data() {
        let s = series(&[100.0, 150.0]);
        let sig = generate_signal(&s, 20).unwrap();
        assert_eq!(sig.values(), vec![0, 0]);
    }

    #[test]
    fn ties_do_not_trigger() {
        // Bar 2 equals the upper bound, bar 3 equals the lower bound.
        let s = series(&[11.0, 10.0, 11.0, 10.0]);
        let sig = generate_signal(&s, 2).unwrap();
        assert_eq!(sig.values(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn decide_without_channel_is_none() {
        assert_eq!(DonchianBreakout::decide(5.0, None), None);
    }

    #[test]
    fn zero_window_is_invalid_input() {
        let s = series(&[1.0, 2.0]);
        let err = generate_signal(&s, 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn empty_series_gives_empty_signal() {
        let s = series(&[]);
        assert!(generate_signal(&s, 3).unwrap().is_empty());
    }
}
