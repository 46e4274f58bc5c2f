//! Donchian Channel over closing prices, lagged one bar.
//!
//! For bar t with period N:
//! - Upper: max(close[t-N..t])
//! - Lower: min(close[t-N..t])
//!
//! The window ends at t-1, so bar t is compared against a channel it did not
//! contribute to. Bars t < N have no channel.

use serde::Serialize;

/// Channel boundaries for a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelBounds {
    pub upper: f64,
    pub lower: f64,
}

/// Which band of the Donchian channel to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonchianBand {
    Upper,
    Lower,
}

/// Lagged channel bounds for every bar; `None` while fewer than `period`
/// prior closes exist.
///
/// Each bar rescans its full window. `period` must be >= 1.
pub fn channel_bounds(closes: &[f64], period: usize) -> Vec<Option<ChannelBounds>> {
    assert!(period >= 1, "Donchian period must be >= 1");
    let n = closes.len();
    let mut result = vec![None; n];

    for i in period..n {
        let window = &closes[i - period..i];
        result[i] = Some(ChannelBounds {
            upper: band(window, DonchianBand::Upper),
            lower: band(window, DonchianBand::Lower),
        });
    }

    result
}

fn band(window: &[f64], which: DonchianBand) -> f64 {
    match which {
        DonchianBand::Upper => window.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        DonchianBand::Lower => window.iter().copied().fold(f64::INFINITY, f64::min),
    }
}
