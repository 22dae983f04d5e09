//! Unified application error type.
//! The core state containers are total and never fail; everything that can
//! go wrong lives at the edges (config, shell input, scripts, output) and is
//! reported through AppError.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Command parsing errors
    // ---------------------------
    #[error("Unknown command: {0} (type 'help' for the list of commands)")]
    UnknownCommand(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(String),

    #[error("Invalid event id: {0}")]
    InvalidId(String),

    #[error("Invalid field: {0} (expected title, start or end)")]
    InvalidField(String),

    #[error("Invalid timestamp: {0} (use RFC 3339 or YYYY-MM-DD HH:MM)")]
    InvalidTimestamp(String),

    // ---------------------------
    // Script errors
    // ---------------------------
    #[error("Script error at line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<AppError>,
    },
}

pub type AppResult<T> = Result<T, AppError>;
