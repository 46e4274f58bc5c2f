//! Position and SignalSeries: the output of the breakout signal.

use serde::{Deserialize, Serialize};

/// Desired market exposure at one bar.
///
/// Serialized as its signed integer value (`1`, `-1`, `0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Position {
    Long,
    Short,
    #[default]
    Flat,
}

impl Position {
    /// Signed exposure: +1 long, -1 short, 0 flat.
    pub fn value(self) -> i8 {
        match self {
            Position::Long => 1,
            Position::Short => -1,
            Position::Flat => 0,
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.value())
    }

    pub fn is_directional(self) -> bool {
        matches!(self, Position::Long | Position::Short)
    }
}

impl From<Position> for i8 {
    fn from(p: Position) -> i8 {
        p.value()
    }
}

impl TryFrom<i8> for Position {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Position::Long),
            -1 => Ok(Position::Short),
            0 => Ok(Position::Flat),
            other => Err(format!("position must be -1, 0 or 1, got {other}")),
        }
    }
}

/// Signal series aligned 1:1 with the price series it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSeries(Vec<Position>);

impl SignalSeries {
    pub fn new(positions: Vec<Position>) -> Self {
        Self(positions)
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Signed values (+1/-1/0) per bar.
    pub fn values(&self) -> Vec<i8> {
        self.0.iter().map(|p| p.value()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Position> for SignalSeries {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
