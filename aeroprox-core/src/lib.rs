//! AeroProx Core - aircraft proximity detection
//!
//! Platform-independent library for finding the closest aircraft pair(s) on a
//! 2D plane and every pair within a collision-risk threshold. No I/O, no
//! logging, no global state: every operation is a pure function over a
//! borrowed point set.
//!
//! # Operations
//!
//! | Function | Cost | Reports |
//! |----------|------|---------|
//! | [`brute_force`] | O(n²) | minimum distance and all tied pairs |
//! | [`closest_pair_divide_and_conquer`] | O(n log n) | same as brute force |
//! | [`pairs_at_risk`] | O(n²) | minimum distance and all pairs within a threshold |
//!
//! Fewer than two aircraft is not an error: the distance is
//! `f64::INFINITY` and no pairs are reported.
//!
//! # Example
//!
//! ```rust
//! use aeroprox_core::{generate_points, closest_pair_divide_and_conquer, pairs_at_risk};
//! use aeroprox_core::{DEFAULT_SEED, PLANE_MAX_X, PLANE_MAX_Y};
//!
//! let points = generate_points(200, PLANE_MAX_X, PLANE_MAX_Y, Some(DEFAULT_SEED));
//! let closest = closest_pair_divide_and_conquer(&points);
//! let risk = pairs_at_risk(&points, closest.distance);
//! assert!(risk.at_risk_pairs.len() >= closest.pairs.len());
//! ```

pub mod aircraft;
pub mod closest;
pub mod generator;
pub mod scene;

pub use aircraft::{Aircraft, AircraftPair, PairResult, ThresholdResult};
pub use closest::{
    brute_force, brute_force_with_stats, closest_pair_divide_and_conquer,
    closest_pair_with_stats, distance_squared, pairs_at_risk, SearchStats,
};
pub use generator::{generate_points, DEFAULT_SEED, PLANE_MAX_X, PLANE_MAX_Y};
