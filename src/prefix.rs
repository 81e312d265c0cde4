//! Prefix averages.
//!
//! Computes the running arithmetic mean of a sequence: output element `j`
//! is the mean of input elements `0..=j`.
//!
//! # Algorithms
//!
//! | Function | Time | Extra space |
//! |---|---|---|
//! | [`prefix_average_quadratic`] | Θ(n²) | Θ(n) (output) |
//! | [`prefix_average_linear`] | Θ(n) | Θ(n) (output) |
//!
//! Both accumulate strictly left to right starting from `0.0`, so for
//! IEEE-754 arithmetic they produce bit-identical results. They differ only
//! in how much work they repeat.

use std::fmt;
use std::str::FromStr;

/// Prefix averages by re-summing the prefix for every output index.
///
/// # Complexity
/// Time: Θ(n²), Space: Θ(n)
///
/// # Examples
/// ```
/// use u_growth::prefix::prefix_average_quadratic;
/// assert_eq!(prefix_average_quadratic(&[2.0, 4.0, 6.0]), vec![2.0, 3.0, 4.0]);
/// assert!(prefix_average_quadratic(&[]).is_empty());
/// ```
pub fn prefix_average_quadratic(x: &[f64]) -> Vec<f64> {
    let mut averages = Vec::with_capacity(x.len());
    for j in 0..x.len() {
        let mut total = 0.0;
        for &value in &x[..=j] {
            total += value;
        }
        averages.push(total / (j + 1) as f64);
    }
    averages
}

/// Prefix averages from a single running total.
///
/// # Complexity
/// Time: Θ(n), Space: Θ(n)
///
/// # Examples
/// ```
/// use u_growth::prefix::prefix_average_linear;
/// assert_eq!(prefix_average_linear(&[2.0, 4.0, 6.0]), vec![2.0, 3.0, 4.0]);
/// assert_eq!(prefix_average_linear(&[7.5]), vec![7.5]);
/// ```
pub fn prefix_average_linear(x: &[f64]) -> Vec<f64> {
    let mut averages = Vec::with_capacity(x.len());
    let mut total = 0.0;
    for (j, &value) in x.iter().enumerate() {
        total += value;
        averages.push(total / (j + 1) as f64);
    }
    averages
}

/// Selects one of the prefix-average implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixAlgorithm {
    /// [`prefix_average_quadratic`]
    Quadratic,
    /// [`prefix_average_linear`]
    Linear,
}

impl PrefixAlgorithm {
    /// Every variant, slowest first.
    pub const ALL: [PrefixAlgorithm; 2] = [PrefixAlgorithm::Quadratic, PrefixAlgorithm::Linear];

    /// Runs the selected implementation on `x`.
    pub fn run(self, x: &[f64]) -> Vec<f64> {
        match self {
            PrefixAlgorithm::Quadratic => prefix_average_quadratic(x),
            PrefixAlgorithm::Linear => prefix_average_linear(x),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PrefixAlgorithm::Quadratic => "quadratic",
            PrefixAlgorithm::Linear => "linear",
        }
    }
}

impl fmt::Display for PrefixAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrefixAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quadratic" | "prefixAverage1" => Ok(PrefixAlgorithm::Quadratic),
            "linear" | "prefixAverage2" => Ok(PrefixAlgorithm::Linear),
            other => Err(format!(
                "unknown prefix-average algorithm '{other}' (expected quadratic or linear)"
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
