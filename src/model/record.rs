// src/model/record.rs
//! Normalized output records.
//!
//! A record is the terminal artifact of extraction: a faithful structural
//! reshape of widget content, with no back-reference into the page
//! document. The wire format uses a `type` discriminator:
//! `{"type":"link","text":…,"url":…}`, `{"type":"note","texts":[…]}`,
//! `{"type":"feed","text":…,"source":…}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    /// A bookmarked link from a urllist widget.
    Link { text: String, url: String },
    /// All note texts of one notes widget, in widget order. One notes
    /// widget yields exactly one Note record, however many notes it holds.
    Note { texts: Vec<String> },
    /// A feed subscription from an rsslist widget.
    Feed { text: String, source: String },
}
