// src/normalizer.rs
//! Page normalizer: walks the column → widget tree and flattens it into
//! one ordered record sequence.
//!
//! Output ordering is fully determined by input ordering — column order,
//! then widget order within each column, then record order within each
//! widget. No reordering, grouping or deduplication. A widget with an
//! unrecognized type tag contributes nothing and logs a warning; one
//! exotic widget must never abort extraction of the rest of the page.

use crate::error::AppError;
use crate::model::{PageDocument, Record};
use crate::registry::WidgetRegistry;

/// Normalizes a page document into a flat record list.
///
/// Pure with respect to its inputs: the document is only read, so calling
/// this twice on the same document yields an identical record sequence.
pub fn normalize(
    document: &PageDocument,
    registry: &WidgetRegistry,
) -> Result<Vec<Record>, AppError> {
    let mut records = Vec::new();

    for widget in document.widgets() {
        match registry.dispatch(widget) {
            Some(parsed) => {
                let parsed = parsed?;
                log::debug!(
                    "Parsed {} widget into {} record(s)",
                    widget.kind(),
                    parsed.len()
                );
                records.extend(parsed);
            }
            None => {
                log::warn!("Unrecognized widget type: {}", widget.widget_type);
            }
        }
    }

    Ok(records)
}
