//! Console error types

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ConsoleError {
    #[error("Invalid aircraft count: {0:?}")]
    #[diagnostic(
        code(aeroprox::input::count),
        help("enter a whole number of at least 1")
    )]
    InvalidCount(String),

    #[error("Invalid collision threshold: {0:?}")]
    #[diagnostic(
        code(aeroprox::input::threshold),
        help("enter a finite number of at least 0")
    )]
    InvalidThreshold(String),

    #[error("Missing {0}")]
    #[diagnostic(
        code(aeroprox::input::missing),
        help("JSON output never prompts; pass the value on the command line")
    )]
    MissingArgument(&'static str),

    #[error("Input ended before a value was entered")]
    #[diagnostic(code(aeroprox::input::eof))]
    EndOfInput,

    #[error("Unable to read settings file {path}")]
    #[diagnostic(code(aeroprox::settings::io))]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file {path}")]
    #[diagnostic(
        code(aeroprox::settings::parse),
        help("settings are a JSON object such as {{\"planeWidth\": 1000, \"seed\": 42}}")
    )]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Console I/O error: {0}")]
    #[diagnostic(code(aeroprox::io))]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    #[diagnostic(code(aeroprox::json))]
    Json(#[from] serde_json::Error),
}
