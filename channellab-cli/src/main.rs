//! ChannelLab CLI — Donchian breakout lookback search and signal dump.
//!
//! Commands:
//! - `optimize`: sweep windows, print the best lookback, chart its returns
//! - `signal`: print the breakout signal for one window as CSV
//!
//! Any error in a run is reported as `Error: <message>` on stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use channellab_chart::{render, TerminalChart};
use channellab_core::{generate_signal, PriceSeries};
use channellab_runner::{
    dataset_hash, load_price_series, synthetic_series, ColumnSpec, RunConfig, SweepReport,
};

#[derive(Parser)]
#[command(
    name = "channellab",
    about = "ChannelLab: Donchian channel breakout lookback search"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the lookback window with the best profit factor.
    Optimize {
        #[command(flatten)]
        input: InputArgs,

        /// Largest window to try (inclusive). Defaults to 168.
        #[arg(long)]
        max_window: Option<usize>,

        /// Score windows in parallel.
        #[arg(long, default_value_t = false)]
        parallel: bool,

        /// Skip the chart of the winning window.
        #[arg(long, default_value_t = false)]
        no_chart: bool,

        /// Also list the N best windows.
        #[arg(long)]
        top: Option<usize>,

        /// Print the full sweep report as JSON instead of the summary line.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the breakout signal for one window as CSV.
    Signal {
        #[command(flatten)]
        input: InputArgs,

        /// Channel lookback window.
        #[arg(long)]
        window: usize,
    },
}

#[derive(Args)]
struct InputArgs {
    /// CSV file with a header row.
    #[arg(long)]
    data: Option<PathBuf>,

    /// TOML config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Close price column name. Defaults to "Close".
    #[arg(long)]
    close_column: Option<String>,

    /// Date column name. Defaults to "Date".
    #[arg(long)]
    date_column: Option<String>,

    /// Use N bars of synthetic random-walk data instead of a file.
    #[arg(long, value_name = "BARS", conflicts_with = "data")]
    synthetic: Option<usize>,

    /// Seed for --synthetic.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl InputArgs {
    /// Config file (or defaults) with command-line overrides applied.
    fn resolve_config(&self) -> Result<RunConfig> {
        let mut cfg = match &self.config {
            Some(path) => RunConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(path) = &self.data {
            cfg.data.path = Some(path.clone());
        }
        if let Some(col) = &self.close_column {
            cfg.data.close_column = col.clone();
        }
        if let Some(col) = &self.date_column {
            cfg.data.date_column = col.clone();
        }
        Ok(cfg)
    }

    fn load(&self, cfg: &RunConfig, columns: &ColumnSpec) -> Result<PriceSeries> {
        if let Some(bars) = self.synthetic {
            warn!(bars, seed = self.seed, "using synthetic data, results are not meaningful");
            return Ok(synthetic_series(self.seed, bars));
        }
        let Some(path) = cfg.data.path.as_deref() else {
            bail!("no input data: pass --data, --synthetic, or set [data].path in --config");
        };
        let series = load_price_series(path, columns)?;
        info!(
            path = %path.display(),
            bars = series.len(),
            dataset_hash = %dataset_hash(&series),
            "loaded price series"
        );
        Ok(series)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Optimize {
            input,
            max_window,
            parallel,
            no_chart,
            top,
            json,
        } => run_optimize(&input, max_window, parallel, no_chart, top, json),
        Commands::Signal { input, window } => run_signal(&input, window),
    };

    if let Err(e) = result {
        println!("Error: {e:#}");
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_optimize(
    input: &InputArgs,
    max_window: Option<usize>,
    parallel: bool,
    no_chart: bool,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut cfg = input.resolve_config()?;
    if let Some(max) = max_window {
        cfg.optimizer.max_window = max;
    }
    cfg.optimizer.parallel |= parallel;
    if no_chart {
        cfg.chart.enabled = false;
    }
    cfg.validate()?;

    // Charting needs a date axis, so fail on a missing date column before sweeping.
    let mut columns = cfg.data.columns();
    if cfg.chart.enabled {
        columns = columns.requiring_dates();
    }
    let prices = input.load(&cfg, &columns)?;
    let report = cfg.optimizer.build().sweep(&prices)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, top);
    }

    let best = report.best();
    match best.window {
        Some(window) if cfg.chart.enabled => {
            let signal = generate_signal(&prices, window)?;
            render(&prices, &signal, window, &mut TerminalChart::default())?;
        }
        Some(_) => {}
        None => warn!("no window qualified; nothing to chart"),
    }

    Ok(())
}

fn print_summary(report: &SweepReport, top: Option<usize>) {
    let best = report.best();
    println!(
        "Best Lookback: {}, Best Profit Factor: {:.2}",
        best.window_or_sentinel(),
        best.profit_factor
    );

    if let Some(n) = top {
        println!("{:>8}  {:>13}", "Lookback", "Profit Factor");
        for score in report.top_n(n) {
            println!(
                "{:>8}  {:>13.4}",
                score.window,
                score.profit_factor.unwrap_or_default()
            );
        }
    }
}

fn run_signal(input: &InputArgs, window: usize) -> Result<()> {
    let cfg = input.resolve_config()?;
    let prices = input.load(&cfg, &cfg.data.columns())?;
    let signal = generate_signal(&prices, window)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "index,date,close,signal")?;
    for (i, (close, position)) in prices.closes().iter().zip(signal.iter()).enumerate() {
        let date = prices
            .timestamps()
            .map(|ts| ts[i].to_string())
            .unwrap_or_default();
        writeln!(out, "{i},{date},{close},{}", position.value())?;
    }
    Ok(())
}
