//! Lookback optimizer: brute-force sweep over Donchian windows.
//!
//! Every candidate window in `1..=max_window` re-runs the breakout signal
//! and scores it by the profit factor of its per-bar strategy log returns.
//! Windows without a single losing bar are disqualified, not zero-scored.
//!
//! The best window is chosen by a sequential fold in ascending window order
//! that only replaces the incumbent on a strictly greater profit factor, so
//! ties go to the smallest window. Parallel sweeps collect scores in window
//! order before the same fold runs, making both modes bit-identical.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use channellab_core::returns::{forward_log_returns, strategy_returns};
use channellab_core::{CoreError, DonchianBreakout, PriceSeries, ReturnTally};

/// Default upper bound on candidate windows.
pub const DEFAULT_MAX_WINDOW: usize = 168;

/// Errors from the optimizer.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Score for a single candidate window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowScore {
    pub window: usize,
    pub total_positive: f64,
    pub total_negative: f64,
    /// `None` when the window had no losing bars (disqualified).
    pub profit_factor: Option<f64>,
}

impl WindowScore {
    pub fn is_qualified(&self) -> bool {
        self.profit_factor.is_some()
    }
}

/// Outcome of a sweep: the winning window and its profit factor.
///
/// `window == None` means no window beat the initial 0.0 profit factor.
/// That is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Optimum {
    pub window: Option<usize>,
    pub profit_factor: f64,
}

impl Optimum {
    pub fn none_found() -> Self {
        Self {
            window: None,
            profit_factor: 0.0,
        }
    }

    pub fn is_found(&self) -> bool {
        self.window.is_some()
    }

    /// Window as printed by the driver: `-1` when none was found.
    pub fn window_or_sentinel(&self) -> i64 {
        self.window.map_or(-1, |w| w as i64)
    }
}

/// Every window's score, in ascending window order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub max_window: usize,
    pub bars: usize,
    pub scores: Vec<WindowScore>,
    pub best: Optimum,
}

impl SweepReport {
    fn new(max_window: usize, bars: usize, scores: Vec<WindowScore>) -> Self {
        let best = select_best(&scores);
        Self {
            max_window,
            bars,
            scores,
            best,
        }
    }

    pub fn best(&self) -> Optimum {
        self.best
    }

    /// Scores that produced a defined profit factor.
    pub fn qualified(&self) -> impl Iterator<Item = &WindowScore> {
        self.scores.iter().filter(|s| s.is_qualified())
    }

    /// The `n` best qualified windows: profit factor descending, window
    /// ascending on ties.
    pub fn top_n(&self, n: usize) -> Vec<&WindowScore> {
        let mut ranked: Vec<&WindowScore> = self.qualified().collect();
        ranked.sort_by(|a, b| {
            b.profit_factor
                .partial_cmp(&a.profit_factor)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.window.cmp(&b.window))
        });
        ranked.truncate(n);
        ranked
    }
}

/// Strict-greater fold from `Optimum::none_found()`, in slice order.
pub fn select_best(scores: &[WindowScore]) -> Optimum {
    scores.iter().fold(Optimum::none_found(), |best, score| {
        match score.profit_factor {
            Some(pf) if pf > best.profit_factor => Optimum {
                window: Some(score.window),
                profit_factor: pf,
            },
            _ => best,
        }
    })
}

/// Sweep executor.
///
/// Sequential by default; parallelism only changes how scores are computed,
/// never which window wins.
#[derive(Debug, Clone)]
pub struct Optimizer {
    max_window: usize,
    parallel: bool,
}

impl Optimizer {
    /// Creates an optimizer trying windows `1..=max_window`.
    pub fn new(max_window: usize) -> Self {
        Self {
            max_window,
            parallel: false,
        }
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn max_window(&self) -> usize {
        self.max_window
    }

    /// Scores every candidate window.
    pub fn sweep(&self, prices: &PriceSeries) -> Result<SweepReport, RunError> {
        if self.max_window == 0 {
            return Err(RunError::InvalidInput(
                "max_window must be a positive integer".into(),
            ));
        }

        let forward = forward_log_returns(prices)?;
        info!(
            bars = prices.len(),
            max_window = self.max_window,
            parallel = self.parallel,
            "starting lookback sweep"
        );

        let scores: Vec<WindowScore> = if self.parallel {
            (1..=self.max_window)
                .into_par_iter()
                .map(|window| score_window(prices, &forward, window))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            (1..=self.max_window)
                .map(|window| score_window(prices, &forward, window))
                .collect::<Result<Vec<_>, _>>()?
        };

        let report = SweepReport::new(self.max_window, prices.len(), scores);
        info!(
            best_window = report.best.window_or_sentinel(),
            best_profit_factor = report.best.profit_factor,
            qualified = report.qualified().count(),
            "sweep complete"
        );
        Ok(report)
    }

    /// Runs the sweep and returns only the winner.
    pub fn optimize(&self, prices: &PriceSeries) -> Result<Optimum, RunError> {
        Ok(self.sweep(prices)?.best())
    }
}

/// Find the window in `1..=max_window` with the highest profit factor.
pub fn optimize(prices: &PriceSeries, max_window: usize) -> Result<Optimum, RunError> {
    Optimizer::new(max_window).optimize(prices)
}

fn score_window(
    prices: &PriceSeries,
    forward: &[Option<f64>],
    window: usize,
) -> Result<WindowScore, RunError> {
    let signal = DonchianBreakout::new(window)?.generate(prices);
    let returns = strategy_returns(&signal, forward)?;
    let tally = ReturnTally::from_returns(&returns);
    let profit_factor = tally.profit_factor();

    if profit_factor.is_none() {
        debug!(window, "window disqualified: no losing bars");
    }

    Ok(WindowScore {
        window,
        total_positive: tally.total_positive,
        total_negative: tally.total_negative,
        profit_factor,
    })
}
