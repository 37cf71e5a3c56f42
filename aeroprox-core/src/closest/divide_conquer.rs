//! Divide-and-conquer closest pair
//!
//! Classic O(n log n) recursion. Each level owns a contiguous range of the
//! x-ordered aircraft plus the same aircraft in y order. The y view is split
//! in one pass, so nothing is re-sorted below the top level.
//!
//! Ties are exact: a cross pair is evaluated only at the level where its two
//! aircraft end up on different sides, and the strip bounds are non-strict,
//! so every pair tied at the minimum is reported exactly once.

use super::brute_force::scan;
use super::{distance_squared, SearchStats, TieList};
use crate::aircraft::{Aircraft, PairResult};

/// Below this many aircraft the scan is exhaustive
const BASE_CASE_LEN: usize = 3;

/// An aircraft tagged with its position in x order
#[derive(Debug, Clone, Copy)]
struct Entry<'a> {
    aircraft: &'a Aircraft,
    rank: usize,
}

/// Find the closest pair(s) in O(n log n).
///
/// Reports the same distance as [`brute_force`](super::brute_force) bit for
/// bit, and the same tied pairs when viewed as unordered pairs. Enumeration
/// order of ties differs from the brute-force order.
pub fn closest_pair_divide_and_conquer(points: &[Aircraft]) -> PairResult<'_> {
    closest_pair_with_stats(points).0
}

/// Like [`closest_pair_divide_and_conquer`], also reporting how many
/// distances were evaluated
pub fn closest_pair_with_stats(points: &[Aircraft]) -> (PairResult<'_>, SearchStats) {
    let mut stats = SearchStats::default();
    if points.len() < 2 {
        return (PairResult::none(), stats);
    }

    // Stable sorts keep ties in input order, so the recursion is deterministic
    let mut x_order: Vec<usize> = (0..points.len()).collect();
    x_order.sort_by(|&a, &b| points[a].x.total_cmp(&points[b].x));

    let mut rank = vec![0; points.len()];
    for (position, &index) in x_order.iter().enumerate() {
        rank[index] = position;
    }

    let by_x: Vec<Entry<'_>> = x_order
        .iter()
        .map(|&index| Entry {
            aircraft: &points[index],
            rank: rank[index],
        })
        .collect();

    let mut by_y: Vec<Entry<'_>> = points
        .iter()
        .zip(rank.iter())
        .map(|(aircraft, &rank)| Entry { aircraft, rank })
        .collect();
    by_y.sort_by(|a, b| a.aircraft.y.total_cmp(&b.aircraft.y));

    let ties = search(&by_x, &by_y, &mut stats);
    (ties.into_result(), stats)
}

/// Recursive step over an x range and the y-ordered view of the same aircraft
fn search<'a>(by_x: &[Entry<'a>], by_y: &[Entry<'a>], stats: &mut SearchStats) -> TieList<'a> {
    debug_assert_eq!(by_x.len(), by_y.len());

    if by_x.len() <= BASE_CASE_LEN {
        let refs: Vec<&'a Aircraft> = by_x.iter().map(|e| e.aircraft).collect();
        let mut ties = TieList::new();
        scan(&refs, &mut ties, stats);
        return ties;
    }

    let mid = by_x.len() / 2;
    let split_rank = by_x[mid].rank;
    let split_x = by_x[mid].aircraft.x;

    // Left means x below the split line, or on it and left of the midpoint
    let (left_y, right_y): (Vec<Entry<'a>>, Vec<Entry<'a>>) =
        by_y.iter().partition(|e| e.rank < split_rank);

    let left = search(&by_x[..mid], &left_y, stats);
    let right = search(&by_x[mid..], &right_y, stats);
    let mut ties = left.merge(right);

    let strip: Vec<Entry<'a>> = by_y
        .iter()
        .filter(|e| {
            let dx = e.aircraft.x - split_x;
            dx * dx <= ties.best
        })
        .copied()
        .collect();

    for (i, lower) in strip.iter().enumerate() {
        let lower_is_left = lower.rank < split_rank;
        for upper in &strip[i + 1..] {
            // ties.best can shrink inside this loop
            let dy = upper.aircraft.y - lower.aircraft.y;
            if dy * dy > ties.best {
                break;
            }
            if (upper.rank < split_rank) == lower_is_left {
                continue;
            }
            stats.comparisons += 1;
            ties.offer(
                distance_squared(lower.aircraft, upper.aircraft),
                lower.aircraft,
                upper.aircraft,
            );
        }
    }

    ties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closest::brute_force;
    use std::collections::BTreeSet;

    fn pair_set(result: &PairResult<'_>) -> BTreeSet<(u32, u32)> {
        result
            .pairs
            .iter()
            .map(|(a, b)| (a.id.min(b.id), a.id.max(b.id)))
            .collect()
    }

    #[test]
    fn test_too_few_points() {
        let result = closest_pair_divide_and_conquer(&[]);
        assert!(result.distance.is_infinite());
        assert!(result.pairs.is_empty());

        let single = [Aircraft::new(3, 5.0, 5.0)];
        let result = closest_pair_divide_and_conquer(&single);
        assert!(result.distance.is_infinite());
        assert!(result.pairs.is_empty());
    }

    #[test]
    fn test_right_triangle() {
        let points = vec![
            Aircraft::new(0, 0.0, 0.0),
            Aircraft::new(1, 0.0, 3.0),
            Aircraft::new(2, 4.0, 0.0),
        ];
        let result = closest_pair_divide_and_conquer(&points);
        assert_eq!(result.distance, 3.0);
        assert_eq!(pair_set(&result), BTreeSet::from([(0, 1)]));
    }

    #[test]
    fn test_square_ties_across_split() {
        let points = vec![
            Aircraft::new(0, 0.0, 0.0),
            Aircraft::new(1, 10.0, 10.0),
            Aircraft::new(2, 10.0, 0.0),
            Aircraft::new(3, 0.0, 10.0),
        ];
        let result = closest_pair_divide_and_conquer(&points);
        assert_eq!(result.distance, 10.0);
        assert_eq!(result.pairs.len(), 4);
        assert_eq!(
            pair_set(&result),
            BTreeSet::from([(0, 2), (0, 3), (1, 2), (1, 3)])
        );
    }

    #[test]
    fn test_coincident_points() {
        let points = vec![Aircraft::new(0, 0.0, 0.0), Aircraft::new(1, 0.0, 0.0)];
        let result = closest_pair_divide_and_conquer(&points);
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.pairs.len(), 1);
        let (a, b) = result.pairs[0];
        assert_eq!((a.x, a.y), (b.x, b.y));
    }

    #[test]
    fn test_all_coincident() {
        let points: Vec<Aircraft> = (0..9).map(|i| Aircraft::new(i, 7.0, 7.0)).collect();
        let result = closest_pair_divide_and_conquer(&points);
        assert_eq!(result.distance, 0.0);
        // Every one of the 36 pairs is tied, each reported once
        assert_eq!(result.pairs.len(), 36);
        assert_eq!(pair_set(&result).len(), 36);
    }

    #[test]
    fn test_vertical_line() {
        // Shared x everywhere exercises the rank-based partition
        let points: Vec<Aircraft> = (0..17)
            .map(|i| Aircraft::new(i, 4.0, (i * 2) as f64))
            .collect();
        let result = closest_pair_divide_and_conquer(&points);
        let oracle = brute_force(&points);
        assert_eq!(result.distance, 2.0);
        assert_eq!(result.pairs.len(), 16);
        assert_eq!(pair_set(&result), pair_set(&oracle));
    }

    #[test]
    fn test_horizontal_line() {
        let points: Vec<Aircraft> = (0..12)
            .map(|i| Aircraft::new(i, (11 - i) as f64 * 3.0, 1.0))
            .collect();
        let result = closest_pair_divide_and_conquer(&points);
        let oracle = brute_force(&points);
        assert_eq!(result.distance, 3.0);
        assert_eq!(pair_set(&result), pair_set(&oracle));
    }

    #[test]
    fn test_grid_ties() {
        let mut points = Vec::new();
        for row in 0..6u32 {
            for col in 0..6u32 {
                points.push(Aircraft::new(row * 6 + col, col as f64, row as f64));
            }
        }
        let result = closest_pair_divide_and_conquer(&points);
        let oracle = brute_force(&points);
        assert_eq!(result.distance, 1.0);
        // 6 rows * 5 horizontal + 6 columns * 5 vertical
        assert_eq!(result.pairs.len(), 60);
        assert_eq!(pair_set(&result), pair_set(&oracle));
    }

    #[test]
    fn test_cross_pair_found_in_strip() {
        // The closest pair straddles the split line
        let points = vec![
            Aircraft::new(0, 0.0, 0.0),
            Aircraft::new(1, 1.0, 50.0),
            Aircraft::new(2, 4.9, 20.0),
            Aircraft::new(3, 5.1, 20.5),
            Aircraft::new(4, 9.0, 0.0),
            Aircraft::new(5, 10.0, 50.0),
        ];
        let result = closest_pair_divide_and_conquer(&points);
        let oracle = brute_force(&points);
        assert_eq!(result.distance, oracle.distance);
        assert_eq!(pair_set(&result), BTreeSet::from([(2, 3)]));
    }

    #[test]
    fn test_fewer_comparisons_than_brute_force() {
        let points: Vec<Aircraft> = (0..256)
            .map(|i| Aircraft::new(i, ((i * 37) % 256) as f64, ((i * 91) % 256) as f64))
            .collect();
        let (result, stats) = closest_pair_with_stats(&points);
        let (oracle, oracle_stats) = crate::closest::brute_force_with_stats(&points);
        assert_eq!(result.distance, oracle.distance);
        assert!(stats.comparisons < oracle_stats.comparisons);
    }
}
