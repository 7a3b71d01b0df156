// src/output.rs
//! Serialization and delivery of extracted records.
//!
//! This module is the only place where file I/O occurs, keeping the rest
//! of the codebase pure and testable. It also owns the raw-snapshot side
//! channel: the snapshot written with `--keep-temp` is byte-compatible
//! with what `--load-cached` reads back, so a replay run skips the
//! network without any other change.

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::model::Record;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Renders the record list in the requested format.
///
/// Only JSON is implemented; `csv` and `xml` are accepted by the CLI but
/// rejected here with a typed error.
pub fn render_records(
    records: &[Record],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(records)?
            } else {
                serde_json::to_string(records)?
            };
            Ok(rendered)
        }
        other => Err(AppError::UnsupportedFormat(other)),
    }
}

/// Writes rendered output to a file, creating parent directories.
pub fn write_output(path: &Path, content: &str) -> Result<(), AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(())
}

/// Saves the raw server response next to the output file.
pub fn write_raw_snapshot(path: &Path, raw: &Value, pretty: bool) -> Result<(), AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(raw)?
    } else {
        serde_json::to_string(raw)?
    };
    write_output(path, &rendered)
}

/// Loads a previously saved raw response for a replay run.
pub fn load_cached_page(path: &Path) -> Result<Value, AppError> {
    let cache_unavailable = |source: AppError| AppError::CacheUnavailable {
        path: path.to_path_buf(),
        source: Box::new(source),
    };

    let body = fs::read_to_string(path).map_err(|e| cache_unavailable(e.into()))?;
    let raw: Value = serde_json::from_str(&body).map_err(|e| cache_unavailable(e.into()))?;

    log::info!("Loaded cached version from {}", path.display());
    Ok(raw)
}
