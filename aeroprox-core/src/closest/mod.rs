//! Closest Pair Detection
//!
//! This module finds the aircraft pair(s) with minimum separation and the
//! pairs that come within a risk threshold of each other.
//!
//! # Architecture
//!
//! - **brute_force**: exhaustive pairwise scan, used as the correctness oracle
//!   and as the recursion base case
//! - **divide_conquer**: O(n log n) recursive search over x- and y-ordered views
//! - **threshold**: single pass reporting every pair within a radius
//!
//! All comparisons are made on squared distances. The square root is taken
//! once, when a final minimum is reported, so both solvers report the same
//! distance bit for bit and find the same set of tied pairs.
//!
//! # Usage
//!
//! ```rust
//! use aeroprox_core::{Aircraft, brute_force, closest_pair_divide_and_conquer};
//!
//! let points = vec![
//!     Aircraft::new(0, 0.0, 0.0),
//!     Aircraft::new(1, 0.0, 3.0),
//!     Aircraft::new(2, 4.0, 0.0),
//! ];
//!
//! let oracle = brute_force(&points);
//! let fast = closest_pair_divide_and_conquer(&points);
//! assert_eq!(oracle.distance, 3.0);
//! assert_eq!(fast.distance, oracle.distance);
//! ```

mod brute_force;
mod divide_conquer;
mod threshold;

pub use brute_force::{brute_force, brute_force_with_stats};
pub use divide_conquer::{closest_pair_divide_and_conquer, closest_pair_with_stats};
pub use threshold::pairs_at_risk;

use serde::Serialize;

use crate::aircraft::{Aircraft, AircraftPair, PairResult};

/// Squared Euclidean distance between two aircraft
///
/// Symmetric bit for bit: `distance_squared(a, b) == distance_squared(b, a)`.
#[inline]
pub fn distance_squared(a: &Aircraft, b: &Aircraft) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Work counters for a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Number of pairwise distance evaluations
    pub comparisons: u64,
}

/// Running minimum and the pairs tied at it, kept in squared form
#[derive(Debug, Clone)]
struct TieList<'a> {
    best: f64,
    pairs: Vec<AircraftPair<'a>>,
}

impl<'a> TieList<'a> {
    fn new() -> Self {
        TieList {
            best: f64::INFINITY,
            pairs: Vec::new(),
        }
    }

    /// Offer a pair at squared distance `d2`.
    ///
    /// Strictly smaller resets the list, exact equality appends.
    #[inline]
    fn offer(&mut self, d2: f64, a: &'a Aircraft, b: &'a Aircraft) {
        if d2 < self.best {
            self.best = d2;
            self.pairs.clear();
            self.pairs.push((a, b));
        } else if d2 == self.best {
            self.pairs.push((a, b));
        }
    }

    /// Keep the smaller of two lists; concatenate on an exact tie
    fn merge(mut self, mut other: TieList<'a>) -> TieList<'a> {
        if other.best < self.best {
            other
        } else {
            if self.best == other.best {
                self.pairs.append(&mut other.pairs);
            }
            self
        }
    }

    fn into_result(self) -> PairResult<'a> {
        if self.pairs.is_empty() {
            return PairResult::none();
        }
        PairResult {
            distance: self.best.sqrt(),
            pairs: self.pairs,
        }
    }
}
