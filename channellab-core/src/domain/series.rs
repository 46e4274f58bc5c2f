//! PriceSeries: the closing-price time series every computation starts from.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::CoreError;

/// Ordered closing prices with an optional, aligned timestamp column.
///
/// Closes are guaranteed finite. Timestamps, when present, have exactly one
/// entry per close; their ordering is assumed, not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    closes: Vec<f64>,
    timestamps: Option<Vec<NaiveDateTime>>,
}

impl PriceSeries {
    /// Build a series from closes only (no timestamp column).
    pub fn from_closes(closes: Vec<f64>) -> Result<Self, CoreError> {
        check_finite(&closes)?;
        Ok(Self {
            closes,
            timestamps: None,
        })
    }

    /// Build a series with a timestamp per close.
    pub fn with_timestamps(
        closes: Vec<f64>,
        timestamps: Vec<NaiveDateTime>,
    ) -> Result<Self, CoreError> {
        if closes.len() != timestamps.len() {
            return Err(CoreError::LengthMismatch {
                closes: closes.len(),
                timestamps: timestamps.len(),
            });
        }
        check_finite(&closes)?;
        Ok(Self {
            closes,
            timestamps: Some(timestamps),
        })
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Timestamp column, if the source had one.
    pub fn timestamps(&self) -> Option<&[NaiveDateTime]> {
        self.timestamps.as_deref()
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Copy of the first `len` observations (clamped to the series length).
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.min(self.closes.len());
        Self {
            closes: self.closes[..len].to_vec(),
            timestamps: self.timestamps.as_ref().map(|ts| ts[..len].to_vec()),
        }
    }
}

fn check_finite(closes: &[f64]) -> Result<(), CoreError> {
    match closes.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(CoreError::NonFiniteClose {
            index,
            value: closes[index],
        }),
        None => Ok(()),
    }
}
