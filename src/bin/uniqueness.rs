//! Finds the input size at which one uniqueness run exceeds a time budget.
//!
//! # Usage
//!
//! ```bash
//! # Reference run: quadratic algorithm, start at 100M, one-minute budget
//! cargo run --release --bin uniqueness
//!
//! # Quick exploration of the sort-based algorithm
//! cargo run --release --bin uniqueness -- \
//!   --algorithm sorted --initial-size 1000000 --threshold-ms 500 --step 100000
//! ```

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use u_growth::bench::{
    AdaptiveConfig, AdaptiveSearch, SearchState, DEFAULT_INITIAL_SIZE, DEFAULT_STEP,
    DEFAULT_THRESHOLD,
};
use u_growth::random::{create_rng, entropy_rng};
use u_growth::timer::SystemClock;
use u_growth::uniqueness::UniquenessAlgorithm;

/// Element-uniqueness growth benchmark
#[derive(Parser, Debug)]
#[command(name = "uniqueness")]
#[command(about = "Grow the input until a single uniqueness run exceeds a time budget")]
#[command(version)]
struct Args {
    /// Algorithm to probe: quadratic (unique1) or sorted (unique2)
    #[arg(short, long, default_value_t = UniquenessAlgorithm::Quadratic)]
    algorithm: UniquenessAlgorithm,

    /// Size of the first probe
    #[arg(short, long, default_value_t = DEFAULT_INITIAL_SIZE)]
    initial_size: usize,

    /// Budget for a single run, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD.as_millis() as u64)]
    threshold_ms: u64,

    /// Size increment after a run that stayed under budget
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: usize,

    /// Give up instead of probing past this size
    #[arg(long)]
    max_size: Option<usize>,

    /// Seed for the input generator (OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = AdaptiveConfig::new(
        args.initial_size,
        Duration::from_millis(args.threshold_ms),
        args.step,
    )
    .context("invalid benchmark arguments")?
    .with_max_size(args.max_size)
    .with_algorithm(args.algorithm);
    let mut rng = match args.seed {
        Some(seed) => create_rng(seed),
        None => entropy_rng(),
    };
    let clock = SystemClock::new();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .context("invalid progress template")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut search = AdaptiveSearch::new(config);
    let report = loop {
        if let SearchState::Growing { size, attempts } = search.state() {
            spinner.set_message(format!("{}: probing n={size} (probe {})", args.algorithm, attempts + 1));
        }
        match search.step(&mut rng, &clock) {
            Ok(SearchState::Done(report)) => break report.clone(),
            Ok(SearchState::Growing { .. }) => {}
            Err(e) => {
                spinner.abandon_with_message("search stopped");
                return Err(e).context("adaptive search failed");
            }
        }
    };
    spinner.finish_and_clear();

    println!(
        "n: {}, Time taken: {} milliseconds",
        report.size,
        report.elapsed.as_millis()
    );
    Ok(())
}
