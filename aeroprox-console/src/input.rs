//! Validation of user-entered values
//!
//! The core assumes validated input; everything typed by a user or passed on
//! the command line goes through these parsers first.

use crate::error::ConsoleError;

/// Parse an aircraft count: a whole number of at least 1
pub fn parse_count(text: &str) -> Result<u32, ConsoleError> {
    match text.trim().parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(ConsoleError::InvalidCount(text.trim().to_string())),
    }
}

/// Parse a collision threshold: a finite number of at least 0
pub fn parse_threshold(text: &str) -> Result<f64, ConsoleError> {
    match text.trim().parse::<f64>() {
        Ok(threshold) if threshold.is_finite() && threshold >= 0.0 => Ok(threshold),
        _ => Err(ConsoleError::InvalidThreshold(text.trim().to_string())),
    }
}
