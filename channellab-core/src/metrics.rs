//! Profit factor over per-bar strategy log returns.

use serde::{Deserialize, Serialize};

/// Gross positive and gross absolute negative strategy returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnTally {
    pub total_positive: f64,
    pub total_negative: f64,
}

impl ReturnTally {
    pub fn from_returns(returns: &[f64]) -> Self {
        returns.iter().fold(Self::default(), |mut acc, &r| {
            if r > 0.0 {
                acc.total_positive += r;
            } else if r < 0.0 {
                acc.total_negative += r.abs();
            }
            acc
        })
    }

    /// `total_positive / total_negative`, or `None` when there were no
    /// losing bars.
    pub fn profit_factor(&self) -> Option<f64> {
        if self.total_negative > 0.0 {
            Some(self.total_positive / self.total_negative)
        } else {
            None
        }
    }
}

/// Profit factor of a strategy return series; `None` when undefined.
pub fn profit_factor(returns: &[f64]) -> Option<f64> {
    ReturnTally::from_returns(returns).profit_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_factor_mixed() {
        let pf = profit_factor(&[0.3, -0.1, 0.1, -0.1]).unwrap();
        assert!((pf - 2.0).abs() < 1e-10);
    }

    #[test]
    fn profit_factor_all_winners_undefined() {
        assert_eq!(profit_factor(&[0.1, 0.2]), None);
    }

    #[test]
    fn profit_factor_all_losers_is_zero() {
        assert_eq!(profit_factor(&[-0.1, -0.2]), Some(0.0));
    }

    #[test]
    fn profit_factor_empty_undefined() {
        assert_eq!(profit_factor(&[]), None);
    }

    #[test]
    fn zeros_count_for_neither_side() {
        let tally = ReturnTally::from_returns(&[0.0, -0.0, 0.5]);
        assert_eq!(tally.total_positive, 0.5);
        assert_eq!(tally.total_negative, 0.0);
    }
}
