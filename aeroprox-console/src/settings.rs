//! Session settings
//!
//! Defaults describe the standard 1000 × 1000 plane with a fixed seed. A JSON
//! file given with `--config` replaces any of them, and command-line flags
//! win over the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use aeroprox_core::{DEFAULT_SEED, PLANE_MAX_X, PLANE_MAX_Y};

use crate::cli::Cli;
use crate::error::ConsoleError;

/// Pairs listed by default in the collision analysis
pub const DEFAULT_MAX_LISTED_PAIRS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Plane width in plane units
    pub plane_width: u32,

    /// Plane height in plane units
    pub plane_height: u32,

    /// Generator seed, `null` for a different point set on every run
    pub seed: Option<u64>,

    /// Tied minimal pairs printed before the rest are summarised
    pub max_listed_pairs: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            plane_width: PLANE_MAX_X,
            plane_height: PLANE_MAX_Y,
            seed: Some(DEFAULT_SEED),
            max_listed_pairs: DEFAULT_MAX_LISTED_PAIRS,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Settings, ConsoleError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConsoleError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConsoleError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings for this run: file (if any), then command-line overrides
    pub fn resolve(cli: &Cli) -> Result<Settings, ConsoleError> {
        let mut settings = match &cli.config {
            Some(path) => {
                log::debug!("loading settings from {}", path.display());
                Settings::load(path)?
            }
            None => Settings::default(),
        };

        if cli.random {
            settings.seed = None;
        } else if let Some(seed) = cli.seed {
            settings.seed = Some(seed);
        }
        if let Some(max) = cli.max_listed_pairs {
            settings.max_listed_pairs = max;
        }
        Ok(settings)
    }
}
