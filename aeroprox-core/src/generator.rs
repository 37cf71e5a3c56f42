//! Random Aircraft Generation
//!
//! Produces the point sets the solvers run on: integer-valued positions drawn
//! uniformly from `[0, max_x] × [0, max_y]`, reproducible for a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::aircraft::Aircraft;

/// Width of the standard plane in plane units
pub const PLANE_MAX_X: u32 = 1000;

/// Height of the standard plane in plane units
pub const PLANE_MAX_Y: u32 = 1000;

/// Seed used by the front ends unless told otherwise
pub const DEFAULT_SEED: u64 = 42;

/// Generate `count` aircraft with ids `0..count`.
///
/// The same `seed` always yields the same aircraft. `None` seeds from the
/// operating system.
pub fn generate_points(count: u32, max_x: u32, max_y: u32, seed: Option<u64>) -> Vec<Aircraft> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|id| {
            let x = rng.gen_range(0..=max_x);
            let y = rng.gen_range(0..=max_y);
            Aircraft::new(id, x as f64, y as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_ids() {
        let points = generate_points(25, PLANE_MAX_X, PLANE_MAX_Y, Some(DEFAULT_SEED));
        assert_eq!(points.len(), 25);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.id, i as u32);
        }
    }

    #[test]
    fn test_within_bounds() {
        let points = generate_points(500, 30, 7, Some(1));
        for p in &points {
            assert!((0.0..=30.0).contains(&p.x));
            assert!((0.0..=7.0).contains(&p.y));
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = generate_points(100, PLANE_MAX_X, PLANE_MAX_Y, Some(42));
        let b = generate_points(100, PLANE_MAX_X, PLANE_MAX_Y, Some(42));
        assert_eq!(a, b);

        let c = generate_points(100, PLANE_MAX_X, PLANE_MAX_Y, Some(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty() {
        assert!(generate_points(0, PLANE_MAX_X, PLANE_MAX_Y, None).is_empty());
    }

    #[test]
    fn test_degenerate_plane() {
        let points = generate_points(4, 0, 0, Some(9));
        assert!(points.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
