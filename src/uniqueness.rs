//! Element uniqueness.
//!
//! Decides whether any two positions of a sequence hold equal values.
//!
//! # Algorithms
//!
//! - [`unique_quadratic`]: compares every unordered pair of positions.
//!   Θ(n²) worst case, O(1) extra space.
//! - [`unique_sorted`]: sorts a private copy, then only neighbors need to be
//!   compared. Θ(n log n) time (dominated by the sort), Θ(n) extra space.
//!
//! Both stop at the first duplicate found. Empty and single-element
//! sequences are vacuously unique.

use std::fmt;
use std::str::FromStr;

/// Returns `true` if no two elements of `data` are equal, by checking all pairs.
///
/// # Complexity
/// Time: Θ(n²) worst case, Space: O(1)
///
/// # Examples
/// ```
/// use u_growth::uniqueness::unique_quadratic;
/// assert!(unique_quadratic(&[1, 2, 3, 4]));
/// assert!(!unique_quadratic(&[1, 2, 3, 2]));
/// ```
pub fn unique_quadratic<T: PartialEq>(data: &[T]) -> bool {
    let n = data.len();
    for j in 0..n.saturating_sub(1) {
        for k in (j + 1)..n {
            if data[j] == data[k] {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if no two elements of `data` are equal, by sorting a copy.
///
/// The input is left untouched; the sorted copy is dropped on return.
///
/// # Complexity
/// Time: Θ(n log n), Space: Θ(n)
///
/// # Examples
/// ```
/// use u_growth::uniqueness::unique_sorted;
/// assert!(unique_sorted(&[4, 3, 2, 1]));
/// assert!(!unique_sorted(&[1, 2, 3, 2]));
/// assert!(unique_sorted::<i32>(&[]));
/// ```
pub fn unique_sorted<T: Ord + Clone>(data: &[T]) -> bool {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    !sorted.windows(2).any(|pair| pair[0] == pair[1])
}

/// Selects one of the uniqueness implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UniquenessAlgorithm {
    /// [`unique_quadratic`]
    #[default]
    Quadratic,
    /// [`unique_sorted`]
    Sorted,
}

impl UniquenessAlgorithm {
    pub const ALL: [UniquenessAlgorithm; 2] =
        [UniquenessAlgorithm::Quadratic, UniquenessAlgorithm::Sorted];

    /// Runs the selected implementation on `data`.
    pub fn run<T: Ord + Clone>(self, data: &[T]) -> bool {
        match self {
            UniquenessAlgorithm::Quadratic => unique_quadratic(data),
            UniquenessAlgorithm::Sorted => unique_sorted(data),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UniquenessAlgorithm::Quadratic => "quadratic",
            UniquenessAlgorithm::Sorted => "sorted",
        }
    }
}

impl fmt::Display for UniquenessAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UniquenessAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quadratic" | "unique1" => Ok(UniquenessAlgorithm::Quadratic),
            "sorted" | "unique2" => Ok(UniquenessAlgorithm::Sorted),
            other => Err(format!(
                "unknown uniqueness algorithm '{other}' (expected quadratic or sorted)"
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_cases() {
        assert!(!unique_quadratic(&[1, 2, 3, 2]));
        assert!(!unique_sorted(&[1, 2, 3, 2]));
        assert!(unique_quadratic(&[1, 2, 3, 4]));
        assert!(unique_sorted(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [i32; 0] = [];
        assert!(unique_quadratic(&empty));
        assert!(unique_sorted(&empty));
        assert!(unique_quadratic(&[i32::MIN]));
        assert!(unique_sorted(&[i32::MIN]));
    }

    #[test]
    fn test_adjacent_and_distant_duplicates() {
        assert!(!unique_quadratic(&[5, 5]));
        assert!(!unique_sorted(&[5, 5]));
        assert!(!unique_quadratic(&[9, 1, 2, 3, 4, 9]));
        assert!(!unique_sorted(&[9, 1, 2, 3, 4, 9]));
    }

    #[test]
    fn test_extremes() {
        let data = [i32::MAX, i32::MIN, 0, -1, 1];
        assert!(unique_quadratic(&data));
        assert!(unique_sorted(&data));
    }

    #[test]
    fn test_sorted_leaves_input_untouched() {
        let data = vec![3, 1, 2];
        assert!(unique_sorted(&data));
        assert_eq!(data, vec![3, 1, 2]);
    }

    #[test]
    fn test_quadratic_partial_eq_only() {
        // f64 is not Ord; the pairwise variant still works on it.
        assert!(unique_quadratic(&[0.5, 1.5]));
        assert!(!unique_quadratic(&[0.5, 1.5, 0.5]));
    }

    #[test]
    fn test_algorithm_dispatch() {
        for alg in UniquenessAlgorithm::ALL {
            assert!(alg.run(&[10, 20, 30]));
            assert!(!alg.run(&[10, 20, 10]));
        }
        assert_eq!(UniquenessAlgorithm::default(), UniquenessAlgorithm::Quadratic);
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!(
            "unique2".parse::<UniquenessAlgorithm>(),
            Ok(UniquenessAlgorithm::Sorted)
        );
        assert_eq!(
            "quadratic".parse::<UniquenessAlgorithm>(),
            Ok(UniquenessAlgorithm::Quadratic)
        );
        assert!("hash".parse::<UniquenessAlgorithm>().is_err());
        assert_eq!(UniquenessAlgorithm::Sorted.to_string(), "sorted");
    }
}
