//! Radar Scene Model
//!
//! Display-ready snapshot of one threshold scan, for graphical front ends.
//! The core does not draw anything; it describes what a radar display shows:
//! every aircraft as a blip, at-risk aircraft flagged, and a link for each
//! at-risk pair.
//!
//! # Coordinates
//!
//! Plane coordinates run from `(0, 0)` at the bottom left to
//! `(max_x, max_y)` at the top right. A [`Viewport`] maps them onto a square
//! screen area with the y axis pointing down. Bearing and range are measured
//! from the plane centre, bearing clockwise from the +y axis in degrees.
//!
//! # Example
//!
//! ```rust
//! use aeroprox_core::{generate_points, pairs_at_risk};
//! use aeroprox_core::scene::{Plane, RadarScene};
//!
//! let points = generate_points(50, 1000, 1000, Some(42));
//! let scan = pairs_at_risk(&points, 40.0);
//! let scene = RadarScene::build(Plane::default(), &points, &scan, 40.0);
//! assert_eq!(scene.blips.len(), 50);
//! let json = scene.to_json().unwrap();
//! assert!(json.contains("\"blips\""));
//! ```

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::aircraft::{Aircraft, ThresholdResult};
use crate::generator::{PLANE_MAX_X, PLANE_MAX_Y};

/// Extent of the plane the aircraft live on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plane {
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Plane {
    fn default() -> Self {
        Plane {
            max_x: PLANE_MAX_X as f64,
            max_y: PLANE_MAX_Y as f64,
        }
    }
}

impl Plane {
    pub fn new(max_x: f64, max_y: f64) -> Self {
        Plane { max_x, max_y }
    }

    /// Centre of the plane, where the radar station sits
    pub fn center(&self) -> nalgebra::Point2<f64> {
        nalgebra::Point2::new(self.max_x / 2.0, self.max_y / 2.0)
    }

    /// Bearing (degrees, clockwise from +y, in `[0, 360)`) and range of a
    /// position as seen from the centre
    pub fn polar(&self, x: f64, y: f64) -> (f64, f64) {
        let offset: Vector2<f64> = nalgebra::Point2::new(x, y) - self.center();
        let range = offset.norm();
        if range == 0.0 {
            return (0.0, 0.0);
        }
        let bearing = offset.x.atan2(offset.y).to_degrees().rem_euclid(360.0);
        (bearing, range)
    }
}

/// Square screen area the plane is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

impl Viewport {
    /// Largest square of a `width × height` canvas centred on it, inset by `margin`
    pub fn centered(width: f64, height: f64, margin: f64) -> Self {
        let radius = (width.min(height) / 2.0 - margin).max(0.0);
        Viewport {
            left: width / 2.0 - radius,
            top: height / 2.0 - radius,
            size: 2.0 * radius,
        }
    }

    /// Map plane coordinates to screen coordinates, flipping the y axis
    pub fn project(&self, plane: &Plane, x: f64, y: f64) -> (f64, f64) {
        let nx = x / plane.max_x;
        let ny = y / plane.max_y;
        (self.left + nx * self.size, self.top + (1.0 - ny) * self.size)
    }
}

/// One aircraft as shown on the radar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blip {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub bearing_deg: f64,
    pub range: f64,
    /// Part of at least one at-risk pair
    pub at_risk: bool,
}

/// Line drawn between two aircraft that are too close
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLink {
    pub from: u32,
    pub to: u32,
    pub distance: f64,
}

/// A blip's position on screen after projection through a [`Viewport`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

/// Everything a radar display needs for one scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarScene {
    pub plane: Plane,
    pub threshold: f64,
    /// Global minimum separation, absent with fewer than two aircraft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<f64>,
    pub blips: Vec<Blip>,
    pub links: Vec<RiskLink>,
}

impl RadarScene {
    /// Build a scene from a point set and the threshold scan run on it
    pub fn build(
        plane: Plane,
        points: &[Aircraft],
        scan: &ThresholdResult<'_>,
        threshold: f64,
    ) -> Self {
        let at_risk: HashSet<u32> = scan
            .at_risk_pairs
            .iter()
            .flat_map(|(a, b)| [a.id, b.id])
            .collect();

        let blips = points
            .iter()
            .map(|p| {
                let (bearing_deg, range) = plane.polar(p.x, p.y);
                Blip {
                    id: p.id,
                    x: p.x,
                    y: p.y,
                    bearing_deg,
                    range,
                    at_risk: at_risk.contains(&p.id),
                }
            })
            .collect();

        let links = scan
            .at_risk_pairs
            .iter()
            .map(|(a, b)| RiskLink {
                from: a.id,
                to: b.id,
                distance: (a.position() - b.position()).norm(),
            })
            .collect();

        RadarScene {
            plane,
            threshold,
            min_distance: scan.min_distance.is_finite().then_some(scan.min_distance),
            blips,
            links,
        }
    }

    /// Number of aircraft involved in at least one at-risk pair
    pub fn at_risk_count(&self) -> usize {
        self.blips.iter().filter(|b| b.at_risk).count()
    }

    /// One-line status text for the display
    pub fn summary(&self) -> String {
        match self.min_distance {
            None => "Not enough aircraft to analyse".to_string(),
            Some(min) if self.links.is_empty() => format!(
                "Minimum separation {:.2}. No pairs within {:.2}.",
                min, self.threshold
            ),
            Some(min) => format!(
                "Minimum separation {:.2}. {} pair(s) within {:.2}, {} aircraft at risk.",
                min,
                self.links.len(),
                self.threshold,
                self.at_risk_count()
            ),
        }
    }

    /// Screen position of every blip, in blip order
    pub fn screen_positions(&self, viewport: &Viewport) -> Vec<ScreenPosition> {
        self.blips
            .iter()
            .map(|blip| {
                let (x, y) = viewport.project(&self.plane, blip.x, blip.y);
                ScreenPosition { id: blip.id, x, y }
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
