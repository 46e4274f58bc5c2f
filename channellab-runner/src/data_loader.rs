//! Price table loading and column extraction.
//!
//! A CSV file is read into a [`PriceTable`] of raw string cells keyed by
//! header. Extracting a [`PriceSeries`] is where required columns are
//! enforced: the close column always, the date column only when the caller
//! asks for it (charting needs it, the optimizer does not).

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use channellab_core::{CoreError, PriceSeries};

use crate::dates::parse_datetime;

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input must contain a '{column}' column")]
    MissingColumn { column: String },

    #[error("row {row}: cannot parse '{value}' as a number")]
    InvalidNumber { row: usize, value: String },

    #[error("row {row}: cannot parse '{value}' as a date")]
    InvalidDate { row: usize, value: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Which columns hold closes and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    pub close: String,
    pub date: String,
    /// Fail when the date column is absent instead of loading closes only.
    pub require_dates: bool,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            close: "Close".into(),
            date: "Date".into(),
            require_dates: false,
        }
    }
}

impl ColumnSpec {
    pub fn requiring_dates(mut self) -> Self {
        self.require_dates = true;
        self
    }
}

/// Raw tabular dataset: header names plus string cells.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PriceTable {
    /// Read a headed CSV from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let rows = rdr
            .records()
            .map(|rec| rec.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()?;

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require(&self, name: &str) -> Result<usize, LoadError> {
        self.column_index(name).ok_or_else(|| LoadError::MissingColumn {
            column: name.to_string(),
        })
    }

    fn cell(&self, row: usize, col: usize) -> &str {
        self.rows[row].get(col).map(String::as_str).unwrap_or("")
    }

    /// Extract the price series described by `spec`.
    ///
    /// Row numbers in errors are 1-based data rows (the header is not
    /// counted).
    pub fn price_series(&self, spec: &ColumnSpec) -> Result<PriceSeries, LoadError> {
        let close_col = self.require(&spec.close)?;
        let date_col = if spec.require_dates {
            Some(self.require(&spec.date)?)
        } else {
            self.column_index(&spec.date)
        };

        let closes = (0..self.rows.len())
            .map(|row| {
                let raw = self.cell(row, close_col);
                raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                    row: row + 1,
                    value: raw.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let series = match date_col {
            Some(col) => {
                let timestamps = (0..self.rows.len())
                    .map(|row| {
                        let raw = self.cell(row, col);
                        parse_datetime(raw).ok_or_else(|| LoadError::InvalidDate {
                            row: row + 1,
                            value: raw.to_string(),
                        })
                    })
                    .collect::<Result<Vec<NaiveDateTime>, _>>()?;
                PriceSeries::with_timestamps(closes, timestamps)?
            }
            None => {
                debug!(column = %spec.date, "no date column, loading closes only");
                PriceSeries::from_closes(closes)?
            }
        };

        Ok(series)
    }
}

/// Read a CSV file into a [`PriceTable`].
pub fn load_csv(path: &Path) -> Result<PriceTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = PriceTable::from_reader(file)?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.headers().len(),
        "loaded price table"
    );
    Ok(table)
}

/// Load a CSV file and extract its price series in one step.
pub fn load_price_series(path: &Path, spec: &ColumnSpec) -> Result<PriceSeries, LoadError> {
    let series = load_csv(path)?.price_series(spec)?;
    debug!(dataset_hash = %dataset_hash(&series), bars = series.len(), "price series ready");
    Ok(series)
}

/// Deterministic BLAKE3 fingerprint over closes and timestamps.
///
/// Identical input files always produce the same hash, so two sweep logs can
/// be matched to the data they ran on.
pub fn dataset_hash(series: &PriceSeries) -> String {
    let mut hasher = blake3::Hasher::new();
    for close in series.closes() {
        hasher.update(&close.to_le_bytes());
    }
    if let Some(ts) = series.timestamps() {
        for t in ts {
            hasher.update(t.and_utc().timestamp().to_le_bytes().as_slice());
        }
    }
    hasher.finalize().to_hex().to_string()
}
