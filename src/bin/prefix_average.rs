//! Times both prefix-average algorithms on one random array.
//!
//! # Usage
//!
//! ```bash
//! # Reference run: 1000 elements, 100 repetitions
//! cargo run --release --bin prefix-average
//!
//! # Larger input, reproducible data
//! cargo run --release --bin prefix-average -- --size 20000 --repetitions 10 --seed 7
//! ```

use anyhow::Context;
use clap::Parser;

use u_growth::bench::{run_fixed, FixedConfig, DEFAULT_FIXED_SIZE, DEFAULT_REPETITIONS};
use u_growth::prefix::PrefixAlgorithm;
use u_growth::random::{create_rng, entropy_rng};
use u_growth::timer::SystemClock;

/// Prefix-average growth benchmark
#[derive(Parser, Debug)]
#[command(name = "prefix-average")]
#[command(about = "Compare the quadratic and linear prefix-average algorithms")]
#[command(version)]
struct Args {
    /// Number of elements in the random input array
    #[arg(short, long, default_value_t = DEFAULT_FIXED_SIZE)]
    size: usize,

    /// Timed runs of each algorithm on the same array
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Seed for the input generator (OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config =
        FixedConfig::new(args.size, args.repetitions).context("invalid benchmark arguments")?;
    let mut rng = match args.seed {
        Some(seed) => create_rng(seed),
        None => entropy_rng(),
    };

    let report = run_fixed(&config, &mut rng, &SystemClock::new());
    if !report.outputs_agree {
        log::warn!("prefix-average variants disagree on the generated input");
    }

    println!("Array: {}", report.size);
    for algorithm in PrefixAlgorithm::ALL {
        let stats = report.stats(algorithm);
        println!(
            "Average runtime for {algorithm}: {:.6} milliseconds (min {:?}, max {:?})",
            stats.mean_millis().unwrap_or_default(),
            stats.min().unwrap_or_default(),
            stats.max().unwrap_or_default(),
        );
    }
    println!();
    Ok(())
}
