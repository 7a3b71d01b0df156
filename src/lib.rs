// src/lib.rs
//! startme2json library — extracts links, notes and feed subscriptions
//! from public start.me pages into a flat, typed record list.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`
//! - **Configuration** — `PipelineConfig`, `OutputFormat`
//! - **URL resolution** — `PageId`, `resource_url`
//! - **Domain model** — `PageDocument`, `Widget`, `Record`, etc.
//! - **Extraction core** — `WidgetRegistry`, `normalize`
//! - **API client** — `StartMeClient`
//! - **Output** — `render_records`, `write_output`, cache replay helpers

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod error;
mod model;
mod normalizer;
mod output;
mod pipeline;
mod registry;
mod resolver;

// --- Error Handling ---
pub use crate::error::{AppError, Result};

// --- Configuration ---
pub use crate::config::{CommandLineInput, OutputFormat, PipelineConfig};

// --- URL Resolution ---
pub use crate::resolver::{resource_url, PageId};

// --- Domain Model ---
pub use crate::model::{
    Column, FeedItem, Folder, LinkItem, NoteItem, NotesItems, Page, PageDocument, Record,
    RssListItems, UrlListItems, Widget, WidgetType,
};

// --- Extraction Core ---
pub use crate::normalizer::normalize;
pub use crate::registry::{parse_notes, parse_rsslist, parse_urllist, WidgetParser, WidgetRegistry};

// --- API Client ---
pub use crate::api::StartMeClient;

// --- Output ---
pub use crate::output::{load_cached_page, render_records, write_output, write_raw_snapshot};

// --- Pipeline Traits ---
pub use crate::pipeline::{PageSource, RecordExtractor, RecordSink};
