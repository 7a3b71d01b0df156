// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! URL errors and payload errors are fatal to the run; an unrecognized
//! widget type is deliberately *not* an error here — the normalizer logs
//! it and moves on.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::OutputFormat;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The input URL does not follow the expected start.me page shape.
    #[error("URL does not follow the expected start.me format: {0}")]
    UnsupportedUrl(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    /// The server answered, but not with the page resource.
    #[error("Server returned bad status: {status}")]
    ServerStatus { status: reqwest::StatusCode },

    /// The response body is not the page document we expect.
    #[error("Received response is not a valid page document: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A recognized widget whose items payload violates the schema.
    /// Fatal: a broken payload inside a known widget type means our
    /// assumptions about the page schema no longer hold.
    #[error("Malformed {widget_type} widget payload: {source}")]
    MalformedWidget {
        widget_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load cached raw page from {path}: {source}")]
    CacheUnavailable {
        path: PathBuf,
        #[source]
        source: Box<AppError>,
    },

    #[error("Output format not supported yet: {0}")]
    UnsupportedFormat(OutputFormat),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
