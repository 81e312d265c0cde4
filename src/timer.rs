//! Wall-clock sources for timing algorithm runs.
//!
//! A [`Clock`] reports time since an arbitrary epoch; durations are measured
//! by subtracting two readings. [`SystemClock`] is the monotonic clock used
//! by the executables. [`ManualClock`] only moves when told to, which lets
//! the drivers be tested against a synthetic cost model.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A source of timestamps.
pub trait Clock {
    /// Time elapsed since this clock's (arbitrary) epoch.
    fn now(&self) -> Duration;
}

/// Monotonic clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that advances only through [`ManualClock::advance`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use u_growth::timer::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// clock.advance(Duration::from_millis(5));
/// assert_eq!(clock.now(), Duration::from_millis(5));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Runs `f` once and returns its result with the elapsed time.
///
/// The result is routed through [`std::hint::black_box`] so the call cannot
/// be optimized away when the caller discards it.
///
/// # Examples
/// ```
/// use u_growth::timer::{time_call, SystemClock};
///
/// let clock = SystemClock::new();
/// let (sum, _elapsed) = time_call(&clock, || (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// ```
pub fn time_call<C, F, R>(clock: &C, f: F) -> (R, Duration)
where
    C: Clock + ?Sized,
    F: FnOnce() -> R,
{
    let start = clock.now();
    let result = std::hint::black_box(f());
    let end = clock.now();
    (result, end.saturating_sub(start))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_manual_clock_starts_at_zero() {
        assert_eq!(ManualClock::new().now(), Duration::ZERO);
    }

    #[test]
    fn test_time_call_measures_manual_advance() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(3));
        let (value, elapsed) = time_call(&clock, || {
            clock.advance(Duration::from_millis(250));
            "done"
        });
        assert_eq!(value, "done");
        assert_eq!(elapsed, Duration::from_millis(250));
    }

    #[test]
    fn test_time_call_zero_when_clock_idle() {
        let clock = ManualClock::new();
        let ((), elapsed) = time_call(&clock, || ());
        assert_eq!(elapsed, Duration::ZERO);
    }

    #[test]
    fn test_time_call_real_sleep() {
        let clock = SystemClock::new();
        let ((), elapsed) = time_call(&clock, || std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
    }
}
