//! Analysis run and report rendering

use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::time::{Duration, Instant};

use aeroprox_core::scene::{Plane, RadarScene, ScreenPosition, Viewport};
use aeroprox_core::{
    brute_force_with_stats, closest_pair_with_stats, pairs_at_risk, Aircraft, AircraftPair,
    PairResult, SearchStats, ThresholdResult,
};

/// Results of running every solver on one point set
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub threshold: f64,
    pub brute: PairResult<'a>,
    pub brute_stats: SearchStats,
    pub brute_time: Duration,
    pub fast: PairResult<'a>,
    pub fast_stats: SearchStats,
    pub fast_time: Duration,
    pub risk: ThresholdResult<'a>,
}

impl<'a> Analysis<'a> {
    pub fn run(points: &'a [Aircraft], threshold: f64) -> Self {
        let start = Instant::now();
        let (brute, brute_stats) = brute_force_with_stats(points);
        let brute_time = start.elapsed();

        let start = Instant::now();
        let (fast, fast_stats) = closest_pair_with_stats(points);
        let fast_time = start.elapsed();

        let risk = pairs_at_risk(points, threshold);

        log::info!(
            "brute force: {} comparisons in {:?}, divide and conquer: {} comparisons in {:?}",
            brute_stats.comparisons,
            brute_time,
            fast_stats.comparisons,
            fast_time
        );

        Analysis {
            threshold,
            brute,
            brute_stats,
            brute_time,
            fast,
            fast_stats,
            fast_time,
            risk,
        }
    }

    /// Both solvers found the same distance and the same tied pairs
    pub fn solvers_agree(&self) -> bool {
        self.brute.distance.to_bits() == self.fast.distance.to_bits()
            && unordered(&self.brute.pairs) == unordered(&self.fast.pairs)
    }

    pub fn collision_detected(&self) -> bool {
        self.fast.is_within(self.threshold)
    }
}

fn unordered(pairs: &[AircraftPair<'_>]) -> BTreeSet<(u32, u32)> {
    pairs
        .iter()
        .map(|(a, b)| (a.id.min(b.id), a.id.max(b.id)))
        .collect()
}

fn describe(aircraft: &Aircraft) -> String {
    format!("Aircraft {} ({}, {})", aircraft.id, aircraft.x, aircraft.y)
}

/// Render the human-readable report
pub fn write_text<W: Write>(
    out: &mut W,
    analysis: &Analysis<'_>,
    max_listed_pairs: usize,
) -> std::io::Result<()> {
    writeln!(out, "\n=== Results ===")?;
    writeln!(
        out,
        "Minimum distance (brute force): {:.6}",
        analysis.brute.distance
    )?;
    writeln!(
        out,
        "Brute force time: {:.6} s ({} comparisons)",
        analysis.brute_time.as_secs_f64(),
        analysis.brute_stats.comparisons
    )?;
    writeln!(
        out,
        "\nMinimum distance (divide and conquer): {:.6}",
        analysis.fast.distance
    )?;
    writeln!(
        out,
        "Divide and conquer time: {:.6} s ({} comparisons)",
        analysis.fast_time.as_secs_f64(),
        analysis.fast_stats.comparisons
    )?;
    writeln!(
        out,
        "Algorithms agree: {}",
        if analysis.solvers_agree() { "yes" } else { "NO" }
    )?;

    writeln!(out, "\n=== Collision analysis ===")?;
    writeln!(out, "Collision threshold: {}", analysis.threshold)?;

    if !analysis.fast.has_pair() {
        writeln!(out, "Not enough aircraft for the analysis.")?;
        return Ok(());
    }

    let distance = analysis.fast.distance;
    if analysis.collision_detected() {
        writeln!(
            out,
            "Minimum distance {:.4} <= threshold -> POSSIBLE COLLISION DETECTED",
            distance
        )?;
        for (i, (a, b)) in analysis.fast.pairs.iter().take(max_listed_pairs).enumerate() {
            writeln!(out, "#{}: {}  <->  {}", i + 1, describe(a), describe(b))?;
        }
        let remaining = analysis.fast.pairs.len().saturating_sub(max_listed_pairs);
        if remaining > 0 {
            writeln!(
                out,
                "... and {remaining} more pair(s) at the same minimum distance."
            )?;
        }
    } else {
        writeln!(
            out,
            "Minimum distance {:.4} > threshold -> no collision risk.",
            distance
        )?;
    }

    writeln!(
        out,
        "Pairs within threshold: {}",
        analysis.risk.at_risk_pairs.len()
    )?;
    writeln!(out, "\nAnalysis complete.")?;
    Ok(())
}

/// Canvas the radar display draws on, in pixels
pub const CANVAS_WIDTH: f64 = 700.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const CANVAS_MARGIN: f64 = 40.0;

/// Machine-readable report for graphical front ends
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub closest: &'a PairResult<'a>,
    pub solvers_agree: bool,
    pub collision_detected: bool,
    pub status: String,
    pub scene: RadarScene,
    /// Square area of the canvas the plane is drawn into
    pub viewport: Viewport,
    /// Blip positions projected onto the canvas
    pub screen: Vec<ScreenPosition>,
}

impl<'a> JsonReport<'a> {
    pub fn new(plane: Plane, points: &[Aircraft], analysis: &'a Analysis<'a>) -> Self {
        let scene = RadarScene::build(plane, points, &analysis.risk, analysis.threshold);
        let viewport = Viewport::centered(CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_MARGIN);
        let screen = scene.screen_positions(&viewport);
        JsonReport {
            closest: &analysis.fast,
            solvers_agree: analysis.solvers_agree(),
            collision_detected: analysis.collision_detected(),
            status: scene.summary(),
            scene,
            viewport,
            screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(points: &[Aircraft], threshold: f64, max_listed_pairs: usize) -> String {
        let analysis = Analysis::run(points, threshold);
        let mut out = Vec::new();
        write_text(&mut out, &analysis, max_listed_pairs).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_collision_report() {
        let points = vec![
            Aircraft::new(0, 0.0, 0.0),
            Aircraft::new(1, 0.0, 3.0),
            Aircraft::new(2, 4.0, 0.0),
        ];
        let text = render(&points, 5.0, 5);
        assert!(text.contains("Minimum distance (brute force): 3.000000"));
        assert!(text.contains("Algorithms agree: yes"));
        assert!(text.contains("POSSIBLE COLLISION DETECTED"));
        assert!(text.contains("#1: Aircraft 0 (0, 0)  <->  Aircraft 1 (0, 3)"));
        assert!(text.contains("Pairs within threshold: 3"));
    }

    #[test]
    fn test_listing_is_capped() {
        let points = vec![
            Aircraft::new(0, 0.0, 0.0),
            Aircraft::new(1, 10.0, 10.0),
            Aircraft::new(2, 10.0, 0.0),
            Aircraft::new(3, 0.0, 10.0),
        ];
        let text = render(&points, 10.0, 3);
        assert!(text.contains("#3:"));
        assert!(!text.contains("#4:"));
        assert!(text.contains("... and 1 more pair(s)"));
    }

    #[test]
    fn test_no_risk_report() {
        let points = vec![Aircraft::new(0, 0.0, 0.0), Aircraft::new(1, 100.0, 0.0)];
        let text = render(&points, 50.0, 5);
        assert!(text.contains("Minimum distance 100.0000 > threshold -> no collision risk."));
        assert!(text.contains("Pairs within threshold: 0"));
    }

    #[test]
    fn test_single_aircraft_report() {
        let points = vec![Aircraft::new(0, 1.0, 1.0)];
        let text = render(&points, 50.0, 5);
        assert!(text.contains("Not enough aircraft for the analysis."));
        assert!(!text.contains("Analysis complete."));
    }

    #[test]
    fn test_json_report() {
        let points = vec![
            Aircraft::new(0, 500.0, 500.0),
            Aircraft::new(1, 500.0, 510.0),
            Aircraft::new(2, 900.0, 100.0),
        ];
        let analysis = Analysis::run(&points, 20.0);
        let report = JsonReport::new(Plane::default(), &points, &analysis);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["closest"]["distance"], 10.0);
        assert_eq!(json["solversAgree"], true);
        assert_eq!(json["collisionDetected"], true);
        assert_eq!(json["scene"]["links"].as_array().unwrap().len(), 1);
        assert_eq!(json["scene"]["blips"][1]["atRisk"], true);
        assert_eq!(json["scene"]["blips"][2]["atRisk"], false);

        assert_eq!(json["viewport"]["size"], 520.0);
        assert_eq!(json["screen"].as_array().unwrap().len(), 3);
        assert_eq!(json["screen"][0]["id"], 0);
        assert_eq!(json["screen"][0]["x"], 350.0);
        assert_eq!(json["screen"][0]["y"], 300.0);
        let y = json["screen"][1]["y"].as_f64().unwrap();
        assert!(y < 300.0);
    }
}
