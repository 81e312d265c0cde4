//! Random input generation and shuffling.
//!
//! Provides seeded and entropy-seeded RNG construction, the input
//! generators used by the benchmark drivers, and a Fisher-Yates shuffle.
//!
//! # Reproducibility
//!
//! The drivers take the RNG as a parameter. Use [`create_rng`] with a fixed
//! seed for repeatable inputs; [`entropy_rng`] gives a different sequence on
//! every run. The underlying algorithm (SmallRng) is deterministic for a
//! given seed on the same platform.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
///
/// # Examples
/// ```
/// use u_growth::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Creates a `SmallRng` seeded from the operating system.
pub fn entropy_rng() -> SmallRng {
    SmallRng::from_os_rng()
}

/// Returns `n` values drawn independently and uniformly from `[0, 1)`.
///
/// # Examples
/// ```
/// use u_growth::random::{create_rng, uniform_unit_vec};
/// let mut rng = create_rng(7);
/// let v = uniform_unit_vec(100, &mut rng);
/// assert_eq!(v.len(), 100);
/// assert!(v.iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
pub fn uniform_unit_vec<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.random::<f64>()).collect()
}

/// Returns `n` integers drawn uniformly from the full `i32` range.
pub fn random_i32_vec<R: Rng>(n: usize, rng: &mut R) -> Vec<i32> {
    (0..n).map(|_| rng.random::<i32>()).collect()
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use u_growth::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle(&mut v, &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn shuffle_is_permutation(
            seed in 0_u64..10000,
            data in proptest::collection::vec(0_i32..1000, 0..50),
        ) {
            let mut shuffled = data.clone();
            let mut rng = create_rng(seed);
            shuffle(&mut shuffled, &mut rng);
            let mut sorted_orig = data.clone();
            let mut sorted_shuf = shuffled;
            sorted_orig.sort();
            sorted_shuf.sort();
            prop_assert_eq!(sorted_orig, sorted_shuf);
        }

        #[test]
        fn generators_honor_length(seed in 0_u64..10000, n in 0_usize..200) {
            let mut rng = create_rng(seed);
            prop_assert_eq!(uniform_unit_vec(n, &mut rng).len(), n);
            prop_assert_eq!(random_i32_vec(n, &mut rng).len(), n);
        }
    }
}
