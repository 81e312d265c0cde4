//! Adaptive-size driver for the uniqueness pair.
//!
//! Searches for the input size at which a single run of one uniqueness
//! variant first takes at least a wall-clock threshold.
//!
//! # State machine
//!
//! ```text
//! Growing { size } --(elapsed <  threshold)--> Growing { size + step }
//! Growing { size } --(elapsed >= threshold)--> Done(report)
//! ```
//!
//! Every probe draws a fresh random array of the current size and times
//! exactly one invocation. Generation is outside the timed region. With the
//! default step of 1 the search re-generates an array for every size it
//! passes through, which makes the search itself expensive for large sizes;
//! the reported boundary depends on that step, so it is kept as configured.

use std::time::Duration;

use rand::Rng;

use super::{BenchError, DEFAULT_INITIAL_SIZE, DEFAULT_STEP, DEFAULT_THRESHOLD};
use crate::random::random_i32_vec;
use crate::timer::{time_call, Clock};
use crate::uniqueness::UniquenessAlgorithm;

/// Parameters of an adaptive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveConfig {
    initial_size: usize,
    threshold: Duration,
    step: usize,
    max_size: Option<usize>,
    algorithm: UniquenessAlgorithm,
}

impl AdaptiveConfig {
    /// Creates a search starting at `initial_size` that stops once one run
    /// takes at least `threshold`, growing by `step` otherwise.
    ///
    /// # Errors
    /// Returns `Err` if `threshold` is zero or `step` is zero.
    pub fn new(initial_size: usize, threshold: Duration, step: usize) -> Result<Self, BenchError> {
        if threshold.is_zero() {
            return Err(BenchError::InvalidConfig("threshold must be positive".into()));
        }
        if step == 0 {
            return Err(BenchError::InvalidConfig("step must be at least 1".into()));
        }
        Ok(Self {
            initial_size,
            threshold,
            step,
            max_size: None,
            algorithm: UniquenessAlgorithm::default(),
        })
    }

    /// Caps the probed size; the search fails rather than probe past it.
    pub fn with_max_size(mut self, max_size: Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_algorithm(mut self, algorithm: UniquenessAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    pub fn algorithm(&self) -> UniquenessAlgorithm {
        self.algorithm
    }
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_INITIAL_SIZE,
            threshold: DEFAULT_THRESHOLD,
            step: DEFAULT_STEP,
            max_size: None,
            algorithm: UniquenessAlgorithm::default(),
        }
    }
}

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveReport {
    pub algorithm: UniquenessAlgorithm,
    /// First probed size whose run met the threshold.
    pub size: usize,
    /// Duration of that run.
    pub elapsed: Duration,
    /// Number of probes, including the final one.
    pub attempts: u64,
    /// Verdict returned by the final run.
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Growing { size: usize, attempts: u64 },
    Done(AdaptiveReport),
}

/// Drives the growth state machine one probe at a time.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use u_growth::bench::{AdaptiveConfig, AdaptiveSearch};
/// use u_growth::timer::ManualClock;
///
/// // Synthetic cost: one millisecond per element.
/// let clock = ManualClock::new();
/// let config = AdaptiveConfig::new(10, Duration::from_millis(25), 5).unwrap();
/// let report = AdaptiveSearch::new(config)
///     .run_with(&clock, |n| vec![0u8; n], |data| {
///         clock.advance(Duration::from_millis(data.len() as u64));
///         true
///     })
///     .unwrap();
/// assert_eq!(report.size, 25);
/// assert_eq!(report.attempts, 4);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveSearch {
    config: AdaptiveConfig,
    state: SearchState,
}

impl AdaptiveSearch {
    pub fn new(config: AdaptiveConfig) -> Self {
        let state = SearchState::Growing {
            size: config.initial_size,
            attempts: 0,
        };
        Self { config, state }
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, SearchState::Done(_))
    }

    /// Probes the current size with random `i32` input and the configured
    /// algorithm. A no-op once the search is done.
    pub fn step<R, C>(&mut self, rng: &mut R, clock: &C) -> Result<&SearchState, BenchError>
    where
        R: Rng,
        C: Clock + ?Sized,
    {
        let algorithm = self.config.algorithm;
        self.step_with(
            clock,
            |n| random_i32_vec(n, rng),
            |data| algorithm.run(data),
        )
    }

    /// Probes the current size with caller-supplied input and probe.
    ///
    /// `generate` builds the input for a size and is not timed; `probe`
    /// is timed once and returns the uniqueness verdict.
    pub fn step_with<T, C, G, P>(
        &mut self,
        clock: &C,
        mut generate: G,
        mut probe: P,
    ) -> Result<&SearchState, BenchError>
    where
        C: Clock + ?Sized,
        G: FnMut(usize) -> Vec<T>,
        P: FnMut(&[T]) -> bool,
    {
        let (size, attempts) = match self.state {
            SearchState::Growing { size, attempts } => (size, attempts),
            SearchState::Done(_) => return Ok(&self.state),
        };
        if let Some(limit) = self.config.max_size {
            if size > limit {
                return Err(BenchError::SizeLimitReached { size, limit });
            }
        }

        let data = generate(size);
        let (unique, elapsed) = time_call(clock, || probe(&data));
        let attempts = attempts + 1;
        log::debug!(
            "probe {attempts}: {} on n={size} took {elapsed:?}",
            self.config.algorithm
        );

        if elapsed < self.config.threshold {
            let next = size
                .checked_add(self.config.step)
                .ok_or(BenchError::SizeLimitReached {
                    size,
                    limit: usize::MAX,
                })?;
            self.state = SearchState::Growing {
                size: next,
                attempts,
            };
        } else {
            log::info!(
                "{} reached {:?} at n={size} after {attempts} probes",
                self.config.algorithm,
                self.config.threshold
            );
            self.state = SearchState::Done(AdaptiveReport {
                algorithm: self.config.algorithm,
                size,
                elapsed,
                attempts,
                unique,
            });
        }
        Ok(&self.state)
    }

    /// Runs the search to completion with random input.
    pub fn run<R, C>(mut self, rng: &mut R, clock: &C) -> Result<AdaptiveReport, BenchError>
    where
        R: Rng,
        C: Clock + ?Sized,
    {
        loop {
            if let SearchState::Done(report) = self.step(rng, clock)? {
                return Ok(report.clone());
            }
        }
    }

    /// Runs the search to completion with caller-supplied input and probe.
    pub fn run_with<T, C, G, P>(
        mut self,
        clock: &C,
        mut generate: G,
        mut probe: P,
    ) -> Result<AdaptiveReport, BenchError>
    where
        C: Clock + ?Sized,
        G: FnMut(usize) -> Vec<T>,
        P: FnMut(&[T]) -> bool,
    {
        loop {
            if let SearchState::Done(report) = self.step_with(clock, &mut generate, &mut probe)? {
                return Ok(report.clone());
            }
        }
    }
}
