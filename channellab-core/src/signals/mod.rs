//! Signal generation: pure functions of closing prices.
//!
//! Signals never see strategy returns or any state beyond the price series.
//! The same series and window always produce the same signal.

pub mod breakout;

pub use breakout::{generate_signal, DonchianBreakout};
