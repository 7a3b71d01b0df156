// src/registry.rs
//! Widget type registry and per-type parsers.
//!
//! The registry is an explicitly constructed, immutable table from widget
//! type to parser function, passed into the normalizer. `standard()`
//! covers the three supported widget kinds; adding a kind means adding a
//! tag + parser pair here. Tests can build custom registries to exercise
//! the normalizer in isolation.
//!
//! Parsers reshape structure only: no deduplication, trimming, sorting or
//! URL canonicalization of extracted values.

use crate::error::AppError;
use crate::model::{NotesItems, Record, RssListItems, UrlListItems, Widget, WidgetType};
use serde_json::Value;
use std::collections::HashMap;

/// A parser takes one widget's items payload and produces zero or more
/// records from it.
pub type WidgetParser = fn(&Value) -> Result<Vec<Record>, AppError>;

/// Immutable mapping from widget type to parser.
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    parsers: HashMap<WidgetType, WidgetParser>,
}

impl WidgetRegistry {
    /// Registry with no parsers at all. Every widget dispatches to nothing.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// The standard registry covering all supported widget kinds.
    pub fn standard() -> Self {
        Self::empty()
            .with_parser(WidgetType::UrlList, parse_urllist)
            .with_parser(WidgetType::Notes, parse_notes)
            .with_parser(WidgetType::RssList, parse_rsslist)
    }

    /// Returns a registry extended with one more tag → parser pair.
    pub fn with_parser(mut self, widget_type: WidgetType, parser: WidgetParser) -> Self {
        self.parsers.insert(widget_type, parser);
        self
    }

    /// Looks up the parser responsible for a widget type, if any.
    pub fn parser_for(&self, widget_type: &WidgetType) -> Option<WidgetParser> {
        self.parsers.get(widget_type).copied()
    }

    /// Dispatches one widget to its registered parser.
    ///
    /// `None` means the type tag is unrecognized (no parser registered);
    /// the caller decides the skip-and-warn policy. `Some(Err(_))` is a
    /// malformed payload inside a recognized type and is fatal.
    pub fn dispatch(&self, widget: &Widget) -> Option<Result<Vec<Record>, AppError>> {
        self.parser_for(&widget.kind())
            .map(|parser| parser(&widget.items))
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn malformed(widget_type: &WidgetType, source: serde_json::Error) -> AppError {
    AppError::MalformedWidget {
        widget_type: widget_type.as_tag().to_string(),
        source,
    }
}

/// Parses a urllist widget's items: one Link record per link, in folder
/// order then link order for the grouped variant, item order for the flat
/// variant.
pub fn parse_urllist(items: &Value) -> Result<Vec<Record>, AppError> {
    let items: UrlListItems =
        serde_json::from_value(items.clone()).map_err(|e| malformed(&WidgetType::UrlList, e))?;

    let links: Vec<_> = match items {
        UrlListItems::Grouped { folders } => folders
            .into_iter()
            .flat_map(|folder| folder.links)
            .collect(),
        UrlListItems::Flat { links } => links,
    };

    Ok(links
        .into_iter()
        .map(|link| Record::Link {
            text: link.title,
            url: link.url,
        })
        .collect())
}

/// Parses a notes widget's items: exactly one Note record wrapping all
/// note texts in the widget.
pub fn parse_notes(items: &Value) -> Result<Vec<Record>, AppError> {
    let items: NotesItems =
        serde_json::from_value(items.clone()).map_err(|e| malformed(&WidgetType::Notes, e))?;

    let texts = items.notes.into_iter().map(|note| note.text).collect();
    Ok(vec![Record::Note { texts }])
}

/// Parses an rsslist widget's items: one Feed record per feed, order
/// preserved.
pub fn parse_rsslist(items: &Value) -> Result<Vec<Record>, AppError> {
    let items: RssListItems =
        serde_json::from_value(items.clone()).map_err(|e| malformed(&WidgetType::RssList, e))?;

    Ok(items
        .feeds
        .into_iter()
        .map(|feed| Record::Feed {
            text: feed.name,
            source: feed.url,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn urllist_grouped_preserves_folder_then_link_order() {
        let items = json!({
            "folders": [
                { "links": [{ "title": "A", "url": "u1" }] },
                { "links": [{ "title": "B", "url": "u2" }] }
            ]
        });

        let records = parse_urllist(&items).unwrap();
        assert_eq!(
            records,
            vec![
                Record::Link {
                    text: "A".to_string(),
                    url: "u1".to_string()
                },
                Record::Link {
                    text: "B".to_string(),
                    url: "u2".to_string()
                },
            ]
        );
    }

    #[test]
    fn urllist_flat_variant_without_folders_key() {
        let items = json!({ "links": [{ "title": "C", "url": "u3" }] });

        let records = parse_urllist(&items).unwrap();
        assert_eq!(
            records,
            vec![Record::Link {
                text: "C".to_string(),
                url: "u3".to_string()
            }]
        );
    }

    #[test]
    fn urllist_values_are_kept_verbatim() {
        // No trimming or URL validation on extracted values.
        let items = json!({ "links": [{ "title": "  padded  ", "url": "not a url" }] });

        let records = parse_urllist(&items).unwrap();
        assert_eq!(
            records,
            vec![Record::Link {
                text: "  padded  ".to_string(),
                url: "not a url".to_string()
            }]
        );
    }

    #[test]
    fn notes_widget_yields_a_single_record() {
        let items = json!({ "notes": [{ "text": "n1" }, { "text": "n2" }] });

        let records = parse_notes(&items).unwrap();
        assert_eq!(
            records,
            vec![Record::Note {
                texts: vec!["n1".to_string(), "n2".to_string()]
            }]
        );
    }

    #[test]
    fn empty_notes_widget_still_yields_one_record() {
        let items = json!({ "notes": [] });

        let records = parse_notes(&items).unwrap();
        assert_eq!(records, vec![Record::Note { texts: vec![] }]);
    }

    #[test]
    fn rsslist_yields_one_feed_per_item() {
        let items = json!({
            "feeds": [
                { "name": "Feed one", "url": "https://a.example/rss" },
                { "name": "Feed two", "url": "https://b.example/rss" }
            ]
        });

        let records = parse_rsslist(&items).unwrap();
        assert_eq!(
            records,
            vec![
                Record::Feed {
                    text: "Feed one".to_string(),
                    source: "https://a.example/rss".to_string()
                },
                Record::Feed {
                    text: "Feed two".to_string(),
                    source: "https://b.example/rss".to_string()
                },
            ]
        );
    }

    #[test]
    fn malformed_payload_names_the_widget_type() {
        let items = json!({ "unexpected": true });

        let err = parse_urllist(&items).unwrap_err();
        match err {
            AppError::MalformedWidget { widget_type, .. } => {
                assert_eq!(widget_type, "urllist");
            }
            other => panic!("expected MalformedWidget, got {other:?}"),
        }
    }

    #[test]
    fn standard_registry_knows_all_supported_types() {
        let registry = WidgetRegistry::standard();
        assert!(registry.parser_for(&WidgetType::UrlList).is_some());
        assert!(registry.parser_for(&WidgetType::Notes).is_some());
        assert!(registry.parser_for(&WidgetType::RssList).is_some());
        assert!(registry
            .parser_for(&WidgetType::Other("weather".to_string()))
            .is_none());
    }

    #[test]
    fn custom_registry_controls_dispatch() {
        let registry = WidgetRegistry::empty().with_parser(WidgetType::Notes, parse_notes);

        let notes_widget = Widget {
            widget_type: "notes".to_string(),
            items: json!({ "notes": [{ "text": "kept" }] }),
        };
        let urllist_widget = Widget {
            widget_type: "urllist".to_string(),
            items: json!({ "links": [] }),
        };

        assert!(registry.dispatch(&notes_widget).is_some());
        assert!(registry.dispatch(&urllist_widget).is_none());
    }
}
