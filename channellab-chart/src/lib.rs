//! ChannelLab Chart — cumulative return visualization for a chosen window.
//!
//! Provides:
//! - `CumulativeCurve`: cumulative strategy log return per dated bar
//! - `CumulativeReturnChart`: ratatui widget for the curve
//! - `TerminalChart`: full-screen renderer behind the `ChartSink` seam

pub mod curve;
pub mod terminal;
pub mod theme;
pub mod widget;

use thiserror::Error;

use channellab_core::{CoreError, PriceSeries, SignalSeries};

pub use curve::CumulativeCurve;
pub use terminal::TerminalChart;
pub use theme::Theme;
pub use widget::CumulativeReturnChart;

/// Errors from building or drawing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Rendering backend for a finished curve.
pub trait ChartSink {
    fn show(&mut self, curve: &CumulativeCurve) -> Result<(), ChartError>;
}

/// Build the cumulative return curve of `signal` over `prices` and hand it to
/// `sink`.
///
/// Fails with [`ChartError::InvalidInput`] when the series has no dates or the
/// signal is not aligned with it.
pub fn render(
    prices: &PriceSeries,
    signal: &SignalSeries,
    window: usize,
    sink: &mut dyn ChartSink,
) -> Result<(), ChartError> {
    let curve = CumulativeCurve::from_signal(prices, signal, window)?;
    sink.show(&curve)
}
