//! Synthetic price series for demos and benchmarks.
//!
//! Produces a simple multiplicative random walk from 100.0 with one bar per
//! calendar day. These series are clearly fake; the CLI logs a warning when
//! it runs on one.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use channellab_core::PriceSeries;

/// Deterministic random-walk series of `bars` daily closes.
pub fn synthetic_series(seed: u64, bars: usize) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN);

    let mut price = 100.0_f64;
    let mut closes = Vec::with_capacity(bars);
    let mut timestamps: Vec<NaiveDateTime> = Vec::with_capacity(bars);

    for i in 0..bars {
        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        price *= 1.0 + daily_return;
        closes.push(price);
        timestamps.push(start + Duration::days(i as i64));
    }

    // Closes are finite by construction and lengths match.
    PriceSeries::with_timestamps(closes, timestamps)
        .unwrap_or_else(|e| unreachable!("synthetic series is always valid: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_series() {
        assert_eq!(synthetic_series(7, 50), synthetic_series(7, 50));
        assert_ne!(synthetic_series(7, 50), synthetic_series(8, 50));
    }

    #[test]
    fn closes_stay_positive_with_daily_timestamps() {
        let s = synthetic_series(1, 500);
        assert_eq!(s.len(), 500);
        assert!(s.closes().iter().all(|&c| c > 0.0));
        let ts = s.timestamps().unwrap();
        assert_eq!(ts[1] - ts[0], Duration::days(1));
    }

    #[test]
    fn zero_bars_is_empty() {
        assert!(synthetic_series(3, 0).is_empty());
    }
}
