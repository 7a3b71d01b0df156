// src/model/widget.rs
//! Widget envelope and per-type item payloads.
//!
//! A widget is a tagged union keyed by its `widget_type` string. The
//! envelope keeps the items payload as raw JSON; the payload is only
//! deserialized into its typed shape once the tag has been classified,
//! so a page carrying exotic widget kinds still deserializes as a whole.

use serde::Deserialize;
use serde_json::Value;

/// Raw widget envelope: the declared type tag plus its untyped payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Widget {
    pub widget_type: String,
    #[serde(default)]
    pub items: Value,
}

impl Widget {
    /// Classifies the declared type tag into the known vocabulary.
    pub fn kind(&self) -> WidgetType {
        WidgetType::from_tag(&self.widget_type)
    }
}

/// Closed vocabulary of widget type tags, with an explicit catch-all for
/// tags this tool does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetType {
    UrlList,
    Notes,
    RssList,
    Other(String),
}

impl WidgetType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "urllist" => Self::UrlList,
            "notes" => Self::Notes,
            "rsslist" => Self::RssList,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::UrlList => "urllist",
            Self::Notes => "notes",
            Self::RssList => "rsslist",
            Self::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Items payload of a `urllist` widget.
///
/// Two schema variants exist in the wild: links grouped under folders, or
/// a flat link list directly under `items`. The variant is detected
/// structurally at deserialization time — `Grouped` is tried first, and a
/// payload without a `folders` key falls through to `Flat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UrlListItems {
    Grouped { folders: Vec<Folder> },
    Flat { links: Vec<LinkItem> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Folder {
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkItem {
    pub title: String,
    pub url: String,
}

/// Items payload of a `notes` widget.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesItems {
    pub notes: Vec<NoteItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteItem {
    pub text: String,
}

/// Items payload of an `rsslist` widget.
#[derive(Debug, Clone, Deserialize)]
pub struct RssListItems {
    pub feeds: Vec<FeedItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedItem {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_known_and_unknown_tags() {
        assert_eq!(WidgetType::from_tag("urllist"), WidgetType::UrlList);
        assert_eq!(WidgetType::from_tag("notes"), WidgetType::Notes);
        assert_eq!(WidgetType::from_tag("rsslist"), WidgetType::RssList);
        assert_eq!(
            WidgetType::from_tag("weather"),
            WidgetType::Other("weather".to_string())
        );
    }

    #[test]
    fn urllist_items_prefers_grouped_variant() {
        let value = json!({
            "folders": [{ "links": [{ "title": "A", "url": "u1" }] }],
            "links": [{ "title": "ignored", "url": "ignored" }]
        });
        let items: UrlListItems = serde_json::from_value(value).unwrap();
        assert!(matches!(items, UrlListItems::Grouped { .. }));
    }

    #[test]
    fn urllist_items_falls_back_to_flat_variant() {
        let value = json!({ "links": [{ "title": "C", "url": "u3" }] });
        let items: UrlListItems = serde_json::from_value(value).unwrap();
        match items {
            UrlListItems::Flat { links } => {
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].title, "C");
            }
            UrlListItems::Grouped { .. } => panic!("expected flat variant"),
        }
    }

    #[test]
    fn urllist_items_without_either_key_is_an_error() {
        let value = json!({ "something_else": [] });
        assert!(serde_json::from_value::<UrlListItems>(value).is_err());
    }
}
