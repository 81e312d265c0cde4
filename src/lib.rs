//! # u-growth
//!
//! Empirical growth-rate demonstrations for two classic algorithm pairs.
//!
//! Each pair solves one problem at two asymptotic complexities, and the
//! benchmark drivers make the difference observable on real hardware.
//!
//! ## Modules
//!
//! - [`prefix`] — Prefix averages in Θ(n²) and Θ(n)
//! - [`uniqueness`] — Element uniqueness in Θ(n²) and Θ(n log n)
//! - [`bench`] — Fixed-size and adaptive-size benchmark drivers
//! - [`stats`] — Running summary of timing samples
//! - [`timer`] — Clock abstraction and single-call timing
//! - [`random`] — Seeded RNG construction and input generation
//!
//! ## Design Philosophy
//!
//! - **Same answer, different cost**: every pair is checked for identical
//!   results, so any timing gap is purely algorithmic
//! - **No hidden state**: RNGs, clocks and accumulators are parameters
//! - **Property-based testing**: invariants verified via proptest

pub mod bench;
pub mod prefix;
pub mod random;
pub mod stats;
pub mod timer;
pub mod uniqueness;
