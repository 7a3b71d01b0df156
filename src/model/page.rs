// src/model/page.rs
//! The raw page document as served by the start.me JSON endpoint.
//!
//! A page is an ordered sequence of columns, each holding an ordered
//! sequence of widgets. The document is read-only to the extraction core;
//! unknown fields are ignored so schema additions on the server side do
//! not break deserialization.

use super::widget::Widget;
use serde::Deserialize;

/// Top-level document: `{ "page": { "columns": [...] } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDocument {
    pub page: Page,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl PageDocument {
    /// Iterates all widgets in document order: column order, then widget
    /// order within each column.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.page
            .columns
            .iter()
            .flat_map(|column| column.widgets.iter())
    }
}
