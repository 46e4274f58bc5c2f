//! Cumulative strategy log-return curve.
//!
//! One point per bar that has a forward return, so the final bar of the
//! price series never appears on the curve.

use chrono::NaiveDateTime;

use channellab_core::returns::{cumulative, forward_log_returns, strategy_returns};
use channellab_core::{PriceSeries, SignalSeries};

use crate::ChartError;

pub const Y_LABEL: &str = "Cumulative Log Return";
pub const X_LABEL: &str = "Date";
pub const LEGEND: &str = "Cumulative Log Return";

/// Cumulative log return of a signal, ready to plot against dates.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeCurve {
    window: usize,
    timestamps: Vec<NaiveDateTime>,
    values: Vec<f64>,
}

impl CumulativeCurve {
    /// Build the curve for `signal` applied to `prices`.
    ///
    /// Requires a timestamp column and a signal of the same length as the
    /// prices.
    pub fn from_signal(
        prices: &PriceSeries,
        signal: &SignalSeries,
        window: usize,
    ) -> Result<Self, ChartError> {
        let timestamps = prices.timestamps().ok_or_else(|| {
            ChartError::InvalidInput("price series must have a date column to chart".into())
        })?;
        if signal.len() != prices.len() {
            return Err(ChartError::InvalidInput(format!(
                "signal has {} bars but price series has {}",
                signal.len(),
                prices.len()
            )));
        }

        let forward = forward_log_returns(prices)?;
        let values = cumulative(&strategy_returns(signal, &forward)?);
        let timestamps = timestamps[..values.len()].to_vec();

        Ok(Self {
            window,
            timestamps,
            values,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn title(&self) -> String {
        format!("Donchian Breakout Strategy (Lookback = {})", self.window)
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Final cumulative log return, if any bar had a forward return.
    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}
