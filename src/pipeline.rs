// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the
//! page-to-records pipeline.
//!
//! Each trait describes a single capability, enabling testing each stage
//! in isolation. Only the source stage is async; extraction and delivery
//! are synchronous by design.

use crate::error::AppError;
use crate::model::{PageDocument, Record};
use serde_json::Value;

/// Produces the raw page document, from the network or from a cache.
#[async_trait::async_trait]
pub trait PageSource {
    async fn fetch(&self) -> Result<Value, AppError>;
}

/// Transforms a page document into the flat record list.
pub trait RecordExtractor {
    fn extract(&self, document: &PageDocument) -> Result<Vec<Record>, AppError>;
}

/// Delivers extracted records to their destination.
pub trait RecordSink {
    fn deliver(&self, records: &[Record]) -> Result<(), AppError>;
}
