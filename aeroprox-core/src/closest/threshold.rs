//! Threshold scan
//!
//! Reports every pair within a risk radius in one O(n²) pass. Completeness
//! of the report matters here, not speed, so no spatial index is used.

use super::distance_squared;
use crate::aircraft::{Aircraft, ThresholdResult};

/// Find every pair separated by at most `threshold`, plus the global minimum.
///
/// The minimum is tracked over all pairs regardless of the threshold. A pair
/// is reported when its squared distance is `<= threshold²`; a pair whose
/// reported distance equals `threshold` is always included.
pub fn pairs_at_risk(points: &[Aircraft], threshold: f64) -> ThresholdResult<'_> {
    if points.len() < 2 {
        return ThresholdResult::none();
    }

    let threshold2 = threshold * threshold;
    let mut best = f64::INFINITY;
    let mut at_risk_pairs = Vec::new();

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d2 = distance_squared(a, b);
            if d2 < best {
                best = d2;
            }
            if within(d2, threshold, threshold2) {
                at_risk_pairs.push((a, b));
            }
        }
    }

    ThresholdResult {
        min_distance: best.sqrt(),
        at_risk_pairs,
    }
}

/// `threshold²` may round below the square of a distance equal to
/// `threshold`, so values just above it are settled in linear form.
#[inline]
fn within(d2: f64, threshold: f64, threshold2: f64) -> bool {
    d2 <= threshold2 || (d2 <= threshold2 * (1.0 + 4.0 * f64::EPSILON) && d2.sqrt() <= threshold)
}
