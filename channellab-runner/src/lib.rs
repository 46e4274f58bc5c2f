//! ChannelLab Runner — data loading, configuration, and the lookback sweep.
//!
//! This crate builds on `channellab-core` to provide:
//! - CSV price tables with lenient mixed-format dates
//! - Synthetic random-walk series
//! - TOML run configuration
//! - The brute-force lookback optimizer (sequential or rayon-parallel)

pub mod config;
pub mod data_loader;
pub mod dates;
pub mod optimizer;
pub mod synthetic;

pub use config::{ChartConfig, ConfigError, DataConfig, OptimizerConfig, RunConfig};
pub use data_loader::{
    dataset_hash, load_csv, load_price_series, ColumnSpec, LoadError, PriceTable,
};
pub use dates::parse_datetime;
pub use optimizer::{
    optimize, select_best, Optimizer, Optimum, RunError, SweepReport, WindowScore,
    DEFAULT_MAX_WINDOW,
};
pub use synthetic::synthetic_series;

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn optimizer_types_are_send_sync() {
        assert_send::<Optimizer>();
        assert_sync::<Optimizer>();
        assert_send::<SweepReport>();
        assert_sync::<SweepReport>();
        assert_send::<WindowScore>();
        assert_sync::<WindowScore>();
        assert_send::<RunError>();
        assert_sync::<RunError>();
    }

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<RunConfig>();
        assert_sync::<RunConfig>();
        assert_send::<ColumnSpec>();
        assert_sync::<ColumnSpec>();
    }

    #[test]
    fn load_error_is_send_sync() {
        assert_send::<LoadError>();
        assert_sync::<LoadError>();
    }
}
