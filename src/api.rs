// src/api.rs
//! Pure HTTP client wrapper for the start.me page endpoint.
//!
//! A thin wrapper around reqwest for fetching a page's JSON resource.
//! It handles default headers and basic request/response operations
//! without parsing or business logic; the returned body is the raw JSON
//! document, exactly what a cached replay would feed the normalizer.

use crate::error::AppError;
use reqwest::{header, Client};
use serde_json::Value;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:105.0) Gecko/20100101 Firefox/105.0";
const ACCEPT: &str = "application/json, text/plain, */*";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// A thin wrapper around reqwest Client for start.me requests.
#[derive(Clone)]
pub struct StartMeClient {
    client: Client,
}

impl StartMeClient {
    /// Creates a new HTTP client with browser-style default headers.
    ///
    /// The endpoint is an internal one used by the site's own frontend,
    /// so the request is dressed up like an ordinary browser request.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::default_headers())
            .build()?;
        Ok(Self { client })
    }

    // Accept-Encoding (gzip, deflate, br) is sent and the response body
    // decompressed by reqwest's compression features.
    fn default_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers
    }

    /// Fetches the raw page document from its JSON resource URL.
    ///
    /// Non-success status and non-JSON bodies are typed errors; both are
    /// fatal, there is nothing to extract without the document.
    pub async fn fetch_page(&self, resource_url: &Url) -> Result<Value, AppError> {
        log::debug!("GET {}", resource_url);

        let response = self.client.get(resource_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ServerStatus { status });
        }

        let body = response.text().await?;
        let raw: Value = serde_json::from_str(&body)?;

        log::info!("Download completed ({} bytes)", body.len());
        Ok(raw)
    }
}
