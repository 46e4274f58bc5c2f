//! ChannelLab Core — domain types, Donchian breakout signal, return math.
//!
//! This crate contains the pure computations:
//! - Domain types (price series, positions, signal series)
//! - Lagged Donchian channel over closing prices
//! - Breakout signal with hold-last-decision semantics
//! - Forward log returns, strategy returns, cumulative curves
//! - Profit factor

pub mod domain;
pub mod error;
pub mod indicators;
pub mod metrics;
pub mod returns;
pub mod signals;

pub use domain::{Position, PriceSeries, SignalSeries};
pub use error::CoreError;
pub use metrics::{profit_factor, ReturnTally};
pub use signals::{generate_signal, DonchianBreakout};
