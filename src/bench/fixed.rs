//! Fixed-size driver for the prefix-average pair.
//!
//! One random array is generated up front and reused for every repetition,
//! so the measurements contain only algorithm cost. Each repetition times
//! the quadratic variant, then the linear one, on that same array.

use std::hint::black_box;

use rand::Rng;

use super::{BenchError, DEFAULT_FIXED_SIZE, DEFAULT_REPETITIONS};
use crate::prefix::PrefixAlgorithm;
use crate::random::uniform_unit_vec;
use crate::stats::DurationStats;
use crate::timer::{time_call, Clock};

/// Parameters of a fixed-size run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedConfig {
    size: usize,
    repetitions: usize,
}

impl FixedConfig {
    /// Creates a configuration for `repetitions` runs on an array of `size`.
    ///
    /// # Errors
    /// Returns `Err` if `repetitions` is zero.
    pub fn new(size: usize, repetitions: usize) -> Result<Self, BenchError> {
        if repetitions == 0 {
            return Err(BenchError::InvalidConfig(
                "repetitions must be at least 1".into(),
            ));
        }
        Ok(Self { size, repetitions })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }
}

impl Default for FixedConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_FIXED_SIZE,
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

/// Outcome of a fixed-size run.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedReport {
    pub size: usize,
    pub repetitions: usize,
    pub quadratic: DurationStats,
    pub linear: DurationStats,
    /// Whether both variants produced identical output on the input array.
    pub outputs_agree: bool,
}

impl FixedReport {
    pub fn stats(&self, algorithm: PrefixAlgorithm) -> &DurationStats {
        match algorithm {
            PrefixAlgorithm::Quadratic => &self.quadratic,
            PrefixAlgorithm::Linear => &self.linear,
        }
    }
}

/// Times both prefix-average variants on one random array.
///
/// The array holds `config.size()` values uniform on `[0, 1)`. Output
/// agreement is checked once, after timing, outside the measured region.
///
/// # Examples
/// ```
/// use u_growth::bench::{run_fixed, FixedConfig};
/// use u_growth::random::create_rng;
/// use u_growth::timer::SystemClock;
///
/// let config = FixedConfig::new(64, 3).unwrap();
/// let report = run_fixed(&config, &mut create_rng(1), &SystemClock::new());
/// assert_eq!(report.quadratic.count(), 3);
/// assert!(report.outputs_agree);
/// ```
pub fn run_fixed<R, C>(config: &FixedConfig, rng: &mut R, clock: &C) -> FixedReport
where
    R: Rng,
    C: Clock + ?Sized,
{
    let data = uniform_unit_vec(config.size, rng);
    let mut quadratic = DurationStats::new();
    let mut linear = DurationStats::new();

    for rep in 0..config.repetitions {
        let (_, q) = time_call(clock, || PrefixAlgorithm::Quadratic.run(black_box(&data)));
        quadratic.record(q);
        let (_, l) = time_call(clock, || PrefixAlgorithm::Linear.run(black_box(&data)));
        linear.record(l);
        log::trace!("repetition {rep}: quadratic {q:?}, linear {l:?}");
    }

    let outputs_agree =
        PrefixAlgorithm::Quadratic.run(&data) == PrefixAlgorithm::Linear.run(&data);

    log::debug!(
        "fixed run n={} reps={}: quadratic mean {:?}, linear mean {:?}",
        config.size,
        config.repetitions,
        quadratic.mean(),
        linear.mean()
    );

    FixedReport {
        size: config.size,
        repetitions: config.repetitions,
        quadratic,
        linear,
        outputs_agree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::timer::{ManualClock, SystemClock};
    use std::time::Duration;

    #[test]
    fn test_config_rejects_zero_repetitions() {
        assert!(matches!(
            FixedConfig::new(10, 0),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_defaults() {
        let c = FixedConfig::default();
        assert_eq!(c.size(), 1000);
        assert_eq!(c.repetitions(), 100);
    }

    #[test]
    fn test_records_every_repetition() {
        let config = FixedConfig::new(50, 7).unwrap();
        let report = run_fixed(&config, &mut create_rng(9), &SystemClock::new());
        assert_eq!(report.size, 50);
        assert_eq!(report.repetitions, 7);
        assert_eq!(report.quadratic.count(), 7);
        assert_eq!(report.linear.count(), 7);
        assert!(report.outputs_agree);
    }

    #[test]
    fn test_idle_clock_gives_zero_mean() {
        let config = FixedConfig::new(20, 4).unwrap();
        let report = run_fixed(&config, &mut create_rng(2), &ManualClock::new());
        assert_eq!(report.stats(PrefixAlgorithm::Quadratic).mean(), Some(Duration::ZERO));
        assert_eq!(report.stats(PrefixAlgorithm::Linear).total(), Duration::ZERO);
    }

    #[test]
    fn test_empty_array() {
        let config = FixedConfig::new(0, 2).unwrap();
        let report = run_fixed(&config, &mut create_rng(0), &SystemClock::new());
        assert!(report.outputs_agree);
        assert_eq!(report.linear.count(), 2);
    }

    #[test]
    fn test_quadratic_slower_on_large_input() {
        let config = FixedConfig::new(4000, 3).unwrap();
        let report = run_fixed(&config, &mut create_rng(5), &SystemClock::new());
        assert!(report.quadratic.total() > report.linear.total());
    }
}
