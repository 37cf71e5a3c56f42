//! Command-line arguments

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;

use crate::input::{parse_count, parse_threshold};

/// Aircraft collision detection on a 2D plane
///
/// Generates aircraft positions, finds the closest pair(s) with both a
/// brute-force and a divide-and-conquer search, and lists every pair within
/// the collision threshold.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of aircraft to generate (asked interactively when omitted)
    #[arg(short = 'n', long, value_parser = parse_count)]
    pub count: Option<u32>,

    /// Collision threshold in plane units (asked interactively when omitted)
    #[arg(short, long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Generator seed, overrides the settings file
    #[arg(long, conflicts_with = "random")]
    pub seed: Option<u64>,

    /// Seed the generator from the operating system
    #[arg(long)]
    pub random: bool,

    /// JSON settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Tied minimal pairs to list before summarising the rest
    #[arg(long, value_name = "N")]
    pub max_listed_pairs: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Radar scene and closest-pair result as JSON, for graphical front ends
    Json,
}
