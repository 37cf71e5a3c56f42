//! Exhaustive pairwise scan
//!
//! O(n²). Serves as the reference result for the recursive solver and as
//! its base case.

use super::{distance_squared, SearchStats, TieList};
use crate::aircraft::{Aircraft, PairResult};

/// Find the closest pair(s) by checking every unordered pair once.
///
/// Pairs are enumerated as `i < j` in input order, so tied pairs come back in
/// that order. Returns `PairResult::none()` for fewer than two aircraft.
pub fn brute_force(points: &[Aircraft]) -> PairResult<'_> {
    brute_force_with_stats(points).0
}

/// Like [`brute_force`], also reporting how many distances were evaluated
pub fn brute_force_with_stats(points: &[Aircraft]) -> (PairResult<'_>, SearchStats) {
    let mut stats = SearchStats::default();
    if points.len() < 2 {
        return (PairResult::none(), stats);
    }

    let refs: Vec<&Aircraft> = points.iter().collect();
    let mut ties = TieList::new();
    scan(&refs, &mut ties, &mut stats);
    (ties.into_result(), stats)
}

/// Offer every unordered pair of `points` to `ties`, staying in squared form
pub(super) fn scan<'a>(points: &[&'a Aircraft], ties: &mut TieList<'a>, stats: &mut SearchStats) {
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            stats.comparisons += 1;
            ties.offer(distance_squared(a, b), a, b);
        }
    }
}
