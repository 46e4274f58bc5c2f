//! Lookback optimizer behavior on hand-checked and generated series.

use channellab_core::PriceSeries;
use channellab_runner::{optimize, synthetic_series, Optimizer, Optimum};
use proptest::prelude::*;

fn series(closes: &[f64]) -> PriceSeries {
    PriceSeries::from_closes(closes.to_vec()).unwrap()
}

#[test]
fn reference_trace_picks_window_one() {
    let s = series(&[10.0, 11.0, 12.0, 9.0, 13.0, 8.0, 14.0]);
    let best = optimize(&s, 7).unwrap();

    // Window 1 wins only bar 1 (long into 12); every other held bar loses.
    let positive = (12.0_f64 / 11.0).ln();
    let negative = (12.0_f64 / 9.0).ln()
        + (13.0_f64 / 9.0).ln()
        + (13.0_f64 / 8.0).ln()
        + (14.0_f64 / 8.0).ln();
    assert_eq!(best.window, Some(1));
    assert!((best.profit_factor - positive / negative).abs() < 1e-12);
}

#[test]
fn reference_trace_disqualifies_long_windows() {
    let s = series(&[10.0, 11.0, 12.0, 9.0, 13.0, 8.0, 14.0]);
    let report = Optimizer::new(7).sweep(&s).unwrap();
    // Windows 6 and 7 leave at most the last bar directional, which has no
    // forward return.
    assert!(!report.scores[5].is_qualified());
    assert!(!report.scores[6].is_qualified());
    // Windows 2..=5 lose on every directional bar.
    for score in &report.scores[1..5] {
        assert_eq!(score.profit_factor, Some(0.0), "window {}", score.window);
    }
}

#[test]
fn flat_series_finds_nothing() {
    let s = series(&[50.0; 40]);
    let best = optimize(&s, 20).unwrap();
    assert_eq!(best, Optimum::none_found());
    assert_eq!(best.window_or_sentinel(), -1);
}

#[test]
fn rising_series_finds_nothing() {
    let closes: Vec<f64> = (1..=60).map(|i| 100.0 + f64::from(i)).collect();
    let report = Optimizer::new(30).sweep(&series(&closes)).unwrap();
    assert!(report.qualified().next().is_none());
    assert_eq!(report.best(), Optimum::none_found());
}

#[test]
fn tie_goes_to_smallest_window() {
    // Windows 3 and 4 emit identical signals and share the top score.
    let s = series(&[10.0, 10.0, 10.0, 10.0, 12.0, 14.0, 11.0, 9.0, 13.0, 8.0, 15.0]);
    let report = Optimizer::new(5).sweep(&s).unwrap();
    assert_eq!(report.scores[2].profit_factor, report.scores[3].profit_factor);
    assert_eq!(report.best().window, Some(3));
}

#[test]
fn parallel_matches_sequential() {
    let s = synthetic_series(42, 400);
    let seq = Optimizer::new(60).sweep(&s).unwrap();
    let par = Optimizer::new(60).with_parallelism(true).sweep(&s).unwrap();
    assert_eq!(seq.scores, par.scores);
    assert_eq!(seq.best(), par.best());
}

#[test]
fn empty_and_single_bar_series() {
    assert_eq!(optimize(&series(&[]), 5).unwrap(), Optimum::none_found());
    assert_eq!(optimize(&series(&[3.0]), 5).unwrap(), Optimum::none_found());
}

#[test]
fn report_serializes_to_json() {
    let report = Optimizer::new(3)
        .sweep(&series(&[10.0, 11.0, 12.0, 9.0, 13.0, 8.0, 14.0]))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["max_window"], 3);
    assert_eq!(json["best"]["window"], 1);
    assert_eq!(json["scores"].as_array().unwrap().len(), 3);
}

proptest! {
    #[test]
    fn best_window_in_range(seed in 0u64..500, bars in 0usize..150, max_window in 1usize..30) {
        let s = synthetic_series(seed, bars);
        let best = optimize(&s, max_window).unwrap();
        match best.window {
            Some(w) => {
                prop_assert!((1..=max_window).contains(&w));
                prop_assert!(best.profit_factor > 0.0);
            }
            None => prop_assert_eq!(best.profit_factor, 0.0),
        }
    }

    #[test]
    fn best_is_maximum_of_report(seed in 0u64..500, max_window in 1usize..25) {
        let s = synthetic_series(seed, 120);
        let report = Optimizer::new(max_window).sweep(&s).unwrap();
        let best = report.best();
        for score in report.qualified() {
            prop_assert!(score.profit_factor.unwrap() <= best.profit_factor);
            if score.profit_factor == Some(best.profit_factor) {
                prop_assert!(Some(score.window) >= best.window);
            }
        }
    }
}
