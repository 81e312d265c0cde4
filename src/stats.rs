//! Summary statistics over timing samples.
//!
//! [`DurationStats`] folds a stream of [`Duration`] samples into a running
//! total plus Welford moments, so a benchmark never has to keep the samples.
//!
//! # Algorithms
//!
//! - **Mean**: exact `total / count` on the integer-nanosecond total.
//! - **Spread**: Welford's online algorithm on millisecond values.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Merge**: Chan et al. (1979) parallel combination of two accumulators.

use std::time::Duration;

/// Running accumulator of timing samples.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use u_growth::stats::DurationStats;
///
/// let mut stats = DurationStats::new();
/// stats.record(Duration::from_millis(2));
/// stats.record(Duration::from_millis(4));
/// assert_eq!(stats.count(), 2);
/// assert_eq!(stats.mean(), Some(Duration::from_millis(3)));
/// assert_eq!(stats.min(), Some(Duration::from_millis(2)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    count: u64,
    total: Duration,
    min: Option<Duration>,
    max: Option<Duration>,
    mean_ms: f64,
    m2: f64,
}

impl DurationStats {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            total: Duration::ZERO,
            min: None,
            max: None,
            mean_ms: 0.0,
            m2: 0.0,
        }
    }

    /// Feeds one sample into the accumulator.
    pub fn record(&mut self, sample: Duration) {
        self.count += 1;
        self.total += sample;
        self.min = Some(self.min.map_or(sample, |m| m.min(sample)));
        self.max = Some(self.max.map_or(sample, |m| m.max(sample)));

        let x = sample.as_secs_f64() * 1000.0;
        let delta = x - self.mean_ms;
        self.mean_ms += delta / self.count as f64;
        self.m2 += delta * (x - self.mean_ms);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all recorded samples.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Mean sample (`total / count`), or `None` if nothing was recorded.
    pub fn mean(&self) -> Option<Duration> {
        if self.count == 0 {
            return None;
        }
        let nanos = self.total.as_nanos() / u128::from(self.count);
        Some(Duration::new(
            (nanos / 1_000_000_000) as u64,
            (nanos % 1_000_000_000) as u32,
        ))
    }

    /// Mean sample in (fractional) milliseconds.
    pub fn mean_millis(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total.as_secs_f64() * 1000.0 / self.count as f64)
        }
    }

    pub fn min(&self) -> Option<Duration> {
        self.min
    }

    pub fn max(&self) -> Option<Duration> {
        self.max
    }

    /// Sample standard deviation in milliseconds (n − 1 denominator), or
    /// `None` if fewer than 2 samples have been recorded.
    pub fn std_dev_millis(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.m2 / (self.count - 1) as f64).sqrt())
        }
    }

    /// Folds another accumulator into this one.
    ///
    /// The result is identical (up to rounding in the spread) to having
    /// recorded both sample streams into a single accumulator.
    pub fn merge(&mut self, other: &DurationStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let n = n_a + n_b;
        let delta = other.mean_ms - self.mean_ms;

        self.m2 += other.m2 + delta * delta * n_a * n_b / n;
        self.mean_ms += delta * n_b / n;
        self.count += other.count;
        self.total += other.total;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

impl Default for DurationStats {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
