// src/resolver.rs
//! URL identifier resolver for start.me pages.
//!
//! A public page lives at `https://start.me/p/<id>/<slug>` and its JSON
//! representation at `https://start.me/p/<id>.json`. The resolver extracts
//! the identifier and derives that resource URL; callers never receive a
//! partially-valid ID.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Length of a start.me page identifier, e.g. `rx6Qj8`.
const PAGE_ID_LEN: usize = 6;

/// Validated 6-character page identifier. Immutable once derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    /// Extracts the page identifier from a public page URL.
    ///
    /// The URL path must follow `/p/<6-char-id>/...`; anything else —
    /// wrong segment count, wrong literal, wrong ID length, or an
    /// unparseable URL — is `AppError::UnsupportedUrl`.
    pub fn from_url(input: &str) -> Result<Self, AppError> {
        let unsupported = || AppError::UnsupportedUrl(input.to_string());

        let url = Url::parse(input).map_err(|_| unsupported())?;
        let mut segments = url.path_segments().ok_or_else(unsupported)?;

        match (segments.next(), segments.next()) {
            (Some("p"), Some(id)) if id.chars().count() == PAGE_ID_LEN => {
                Ok(PageId(id.to_string()))
            }
            _ => Err(unsupported()),
        }
    }

    /// Returns the identifier as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value.chars().count() == PAGE_ID_LEN {
            Ok(PageId(value))
        } else {
            Err(serde::de::Error::custom(format!(
                "invalid page ID length: expected {} characters, got {}",
                PAGE_ID_LEN,
                value.chars().count()
            )))
        }
    }
}

/// Derives the JSON resource URL for a public page URL.
///
/// Only the path component is rewritten, to `/p/<id>.json`; scheme, host,
/// port, query and fragment are preserved verbatim.
pub fn resource_url(input: &str) -> Result<Url, AppError> {
    let page_id = PageId::from_url(input)?;

    let mut url = Url::parse(input).map_err(|_| AppError::UnsupportedUrl(input.to_string()))?;
    url.set_path(&format!("/p/{}.json", page_id));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_page_url() {
        let id = PageId::from_url("https://start.me/p/rx6Qj8/nixintel-s-osint-resource-list")
            .unwrap();
        assert_eq!(id.as_str(), "rx6Qj8");
    }

    #[test]
    fn accepts_url_without_slug() {
        let id = PageId::from_url("https://start.me/p/7kLY9R").unwrap();
        assert_eq!(id.as_str(), "7kLY9R");
    }

    #[test]
    fn rejects_wrong_shapes() {
        // wrong literal
        assert!(PageId::from_url("https://start.me/q/rx6Qj8/page").is_err());
        // wrong ID length
        assert!(PageId::from_url("https://start.me/p/rx6Qj/page").is_err());
        assert!(PageId::from_url("https://start.me/p/rx6Qj8x/page").is_err());
        // missing segments
        assert!(PageId::from_url("https://start.me/p").is_err());
        assert!(PageId::from_url("https://start.me/").is_err());
        // not a URL at all
        assert!(PageId::from_url("not a url").is_err());
    }

    #[test]
    fn unsupported_url_error_names_the_input() {
        let err = PageId::from_url("https://start.me/about").unwrap_err();
        assert!(err.to_string().contains("https://start.me/about"));
    }

    #[test]
    fn resource_url_rewrites_only_the_path() {
        let url = resource_url("https://start.me/p/rxRbpo/ti?x=1#frag").unwrap();
        assert_eq!(url.as_str(), "https://start.me/p/rxRbpo.json?x=1#frag");
    }

    #[test]
    fn resource_url_preserves_host_and_scheme() {
        let url = resource_url("http://mirror.example.com:8080/p/rx6Qj8/list").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("mirror.example.com"));
        assert_eq!(url.port(), Some(8080));
        assert_eq!(url.path(), "/p/rx6Qj8.json");
    }
}
