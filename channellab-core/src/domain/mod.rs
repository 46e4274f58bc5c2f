//! Domain types for ChannelLab

pub mod position;
pub mod series;

pub use position::{Position, SignalSeries};
pub use series::PriceSeries;
