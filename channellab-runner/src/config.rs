//! TOML run configuration.
//!
//! ```toml
//! [data]
//! path = "eth_clean.csv"
//! close_column = "Close"
//! date_column = "Date"
//!
//! [optimizer]
//! max_window = 168
//! parallel = true
//!
//! [chart]
//! enabled = true
//! ```
//!
//! Every section and key is optional; missing values fall back to defaults.
//! The CLI layers its flags on top of whatever the file provides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_loader::ColumnSpec;
use crate::optimizer::{Optimizer, DEFAULT_MAX_WINDOW};

/// Errors from reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub data: DataConfig,
    pub optimizer: OptimizerConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// CSV input; `None` means the caller must supply one.
    pub path: Option<PathBuf>,
    pub close_column: String,
    pub date_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        let cols = ColumnSpec::default();
        Self {
            path: None,
            close_column: cols.close,
            date_column: cols.date,
        }
    }
}

impl DataConfig {
    pub fn columns(&self) -> ColumnSpec {
        ColumnSpec {
            close: self.close_column.clone(),
            date: self.date_column.clone(),
            require_dates: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizerConfig {
    pub max_window: usize,
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_window: DEFAULT_MAX_WINDOW,
            parallel: false,
        }
    }
}

impl OptimizerConfig {
    pub fn build(&self) -> Optimizer {
        Optimizer::new(self.max_window).with_parallelism(self.parallel)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub enabled: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl RunConfig {
    /// Load from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.optimizer.max_window == 0 {
            return Err(ConfigError::Invalid(
                "optimizer.max_window must be >= 1".into(),
            ));
        }
        if self.data.close_column.is_empty() {
            return Err(ConfigError::Invalid("data.close_column is empty".into()));
        }
        Ok(())
    }
}
