//! Benchmark drivers.
//!
//! Two independent drivers measure the algorithm pairs empirically:
//!
//! - [`fixed`]: times both prefix-average variants on one random array of a
//!   fixed size, repeated a fixed number of times, and reports the mean.
//! - [`adaptive`]: grows the input size for a uniqueness variant until a
//!   single run meets a wall-clock threshold.
//!
//! Both take their RNG and [`Clock`](crate::timer::Clock) as parameters.

pub mod adaptive;
pub mod fixed;

use std::time::Duration;

pub use adaptive::{AdaptiveConfig, AdaptiveReport, AdaptiveSearch, SearchState};
pub use fixed::{run_fixed, FixedConfig, FixedReport};

/// Default array size of the fixed-size driver.
pub const DEFAULT_FIXED_SIZE: usize = 1000;
/// Default repetition count of the fixed-size driver.
pub const DEFAULT_REPETITIONS: usize = 100;
/// Default starting size of the adaptive driver.
pub const DEFAULT_INITIAL_SIZE: usize = 100_000_000;
/// Default wall-clock budget of a single adaptive probe (one minute).
pub const DEFAULT_THRESHOLD: Duration = Duration::from_secs(60);
/// Default size increment between adaptive probes.
pub const DEFAULT_STEP: usize = 1;

/// Error type for the benchmark drivers.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchError {
    /// Driver parameters violate their constraints.
    InvalidConfig(String),
    /// The adaptive search would grow past its configured ceiling.
    SizeLimitReached { size: usize, limit: usize },
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::InvalidConfig(msg) => write!(f, "invalid benchmark configuration: {msg}"),
            BenchError::SizeLimitReached { size, limit } => write!(
                f,
                "threshold not reached at size {size} before the size limit {limit}"
            ),
        }
    }
}

impl std::error::Error for BenchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = BenchError::InvalidConfig("repetitions must be > 0".into());
        assert_eq!(
            e.to_string(),
            "invalid benchmark configuration: repetitions must be > 0"
        );
        let e = BenchError::SizeLimitReached { size: 10, limit: 10 };
        assert!(e.to_string().contains("size limit 10"));
    }

    #[test]
    fn test_reference_defaults() {
        assert_eq!(DEFAULT_THRESHOLD, Duration::from_millis(60_000));
        assert_eq!(DEFAULT_STEP, 1);
        assert_eq!(DEFAULT_FIXED_SIZE, 1000);
        assert_eq!(DEFAULT_REPETITIONS, 100);
    }
}
