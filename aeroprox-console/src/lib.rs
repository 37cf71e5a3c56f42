//! AeroProx console front end
//!
//! Drives the core solvers from the command line: collects the aircraft
//! count and collision threshold (flags or prompts), generates the point set
//! once, runs every solver on it and prints a text or JSON report.

pub mod cli;
pub mod error;
pub mod input;
pub mod prompt;
pub mod report;
pub mod settings;

use std::io::{BufRead, Write};

use aeroprox_core::generate_points;
use aeroprox_core::scene::Plane;

use crate::cli::{Cli, OutputFormat};
use crate::error::ConsoleError;
use crate::prompt::Prompter;
use crate::report::{Analysis, JsonReport};
use crate::settings::Settings;

/// Run one analysis session
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<(), ConsoleError> {
    let settings = Settings::resolve(cli)?;
    log::debug!("settings: {:?}", settings);

    let (count, threshold) = match cli.format {
        OutputFormat::Text => {
            writeln!(output, "=== Aircraft Collision Detection ===\n")?;
            let mut prompter = Prompter::new(input, output);
            let count = match cli.count {
                Some(count) => count,
                None => prompter.ask_count()?,
            };
            let threshold = match cli.threshold {
                Some(threshold) => threshold,
                None => prompter.ask_threshold()?,
            };
            (count, threshold)
        }
        OutputFormat::Json => (
            cli.count.ok_or(ConsoleError::MissingArgument("--count"))?,
            cli.threshold
                .ok_or(ConsoleError::MissingArgument("--threshold"))?,
        ),
    };

    if cli.format == OutputFormat::Text {
        writeln!(
            output,
            "\nGenerating {} aircraft on a {}x{} plane...",
            count, settings.plane_width, settings.plane_height
        )?;
    }
    log::info!(
        "generating {} aircraft, seed {:?}",
        count,
        settings.seed
    );
    let points = generate_points(
        count,
        settings.plane_width,
        settings.plane_height,
        settings.seed,
    );

    let analysis = Analysis::run(&points, threshold);
    if !analysis.solvers_agree() {
        log::warn!(
            "solvers disagree: brute force {} vs divide and conquer {}",
            analysis.brute.distance,
            analysis.fast.distance
        );
    }

    match cli.format {
        OutputFormat::Text => {
            report::write_text(output, &analysis, settings.max_listed_pairs)?;
        }
        OutputFormat::Json => {
            let plane = Plane::new(settings.plane_width as f64, settings.plane_height as f64);
            let report = JsonReport::new(plane, &points, &analysis);
            serde_json::to_writer_pretty(&mut *output, &report)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
