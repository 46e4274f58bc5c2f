//! Log-return arithmetic shared by the optimizer and the chart.
//!
//! The forward return at bar i is the return realized by holding the
//! position decided at bar i into bar i+1. The last bar has none.

use crate::domain::{PriceSeries, SignalSeries};
use crate::error::CoreError;

/// Forward one-bar log returns, `ln(close[i+1]) - ln(close[i])`.
///
/// The result has one entry per bar; the final entry is always `None`.
/// Fails when any close is not strictly positive.
pub fn forward_log_returns(prices: &PriceSeries) -> Result<Vec<Option<f64>>, CoreError> {
    let closes = prices.closes();
    if let Some(index) = closes.iter().position(|&c| c <= 0.0) {
        return Err(CoreError::NonPositiveClose {
            index,
            value: closes[index],
        });
    }

    let logs: Vec<f64> = closes.iter().map(|c| c.ln()).collect();
    let mut out: Vec<Option<f64>> = logs.windows(2).map(|w| Some(w[1] - w[0])).collect();
    if !closes.is_empty() {
        out.push(None);
    }
    Ok(out)
}

/// Per-bar strategy returns `signal[i] * logret[i]`, skipping bars without a
/// forward return.
pub fn strategy_returns(
    signal: &SignalSeries,
    forward_returns: &[Option<f64>],
) -> Result<Vec<f64>, CoreError> {
    if signal.len() != forward_returns.len() {
        return Err(CoreError::invalid(format!(
            "signal has {} bars but return series has {}",
            signal.len(),
            forward_returns.len()
        )));
    }
    Ok(signal
        .iter()
        .zip(forward_returns)
        .filter_map(|(pos, r)| r.map(|r| pos.as_f64() * r))
        .collect())
}

/// Running sum of strategy returns.
pub fn cumulative(returns: &[f64]) -> Vec<f64> {
    returns
        .iter()
        .scan(0.0, |acc, r| {
            *acc += r;
            Some(*acc)
        })
        .collect()
}
