//! Aircraft and Result Types
//!
//! Value types shared by every solver. A point set is owned by the caller;
//! results only hold references into it.

use serde::{Deserialize, Serialize};

/// An aircraft reduced to a point on the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Identifier, unique within one generated set
    pub id: u32,
    /// Horizontal coordinate in plane units
    pub x: f64,
    /// Vertical coordinate in plane units
    pub y: f64,
}

impl Aircraft {
    /// Create a new aircraft at the given position
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Aircraft { id, x, y }
    }

    /// Position as a nalgebra point
    pub fn position(&self) -> nalgebra::Point2<f64> {
        nalgebra::Point2::new(self.x, self.y)
    }
}

/// Two aircraft borrowed from the caller's point set
pub type AircraftPair<'a> = (&'a Aircraft, &'a Aircraft);

/// Closest-pair result
///
/// `distance` is `f64::INFINITY` when fewer than two aircraft were given,
/// in which case `pairs` is empty. Otherwise every pair in `pairs` lies at
/// exactly `distance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult<'a> {
    /// Minimum Euclidean separation
    pub distance: f64,
    /// All pairs tied at the minimum, in discovery order
    pub pairs: Vec<AircraftPair<'a>>,
}

impl<'a> PairResult<'a> {
    /// The "no pair" result for empty or singleton input
    pub fn none() -> Self {
        PairResult {
            distance: f64::INFINITY,
            pairs: Vec::new(),
        }
    }

    /// Whether at least one pair was found
    pub fn has_pair(&self) -> bool {
        !self.pairs.is_empty()
    }

    /// Collision signal: a pair exists and it is no farther apart than `threshold`
    pub fn is_within(&self, threshold: f64) -> bool {
        self.has_pair() && self.distance <= threshold
    }
}

/// Threshold scan result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdResult<'a> {
    /// Global minimum separation, independent of the threshold
    pub min_distance: f64,
    /// Every pair at or below the threshold, in enumeration order
    pub at_risk_pairs: Vec<AircraftPair<'a>>,
}

impl<'a> ThresholdResult<'a> {
    /// The "no pair" result for empty or singleton input
    pub fn none() -> Self {
        ThresholdResult {
            min_distance: f64::INFINITY,
            at_risk_pairs: Vec::new(),
        }
    }
}
