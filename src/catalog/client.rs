//! Google Books volume-search client.

use crate::error::RenameError;
use serde::Deserialize;
use std::time::Duration;

const BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// A stuck catalog must not hang the rename forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the catalog's volume-search endpoint.
pub struct CatalogClient {
    http_client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CatalogClient {
    /// Create a client against the public Google Books endpoint.
    /// `GOOGLE_BOOKS_API_KEY`, when set, is forwarded as the `key` parameter.
    pub fn new() -> Result<Self, RenameError> {
        Self::with_endpoint(BOOKS_API_URL)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, RenameError> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            api_key: std::env::var("GOOGLE_BOOKS_API_KEY").ok(),
        })
    }

    /// Look up all volumes matching the ISBN with a single GET, no retries.
    ///
    /// A missing or empty `items` array is `NotFound`. Records are returned
    /// as-is; metadata completeness is judged by the candidate builder.
    pub fn lookup(&self, isbn: &str) -> Result<Vec<Volume>, RenameError> {
        let mut query: Vec<(&str, String)> = vec![("q", format!("isbn:{isbn}"))];
        if let Some(ref key) = self.api_key {
            query.push(("key", key.clone()));
        }

        tracing::debug!(isbn, endpoint = %self.endpoint, "querying catalog");

        let result: SearchResult = self
            .http_client
            .get(&self.endpoint)
            .query(&query)
            .send()?
            .error_for_status()?
            .json()?;

        let items = result.items.unwrap_or_default();
        if items.is_empty() {
            return Err(RenameError::NotFound(isbn.to_string()));
        }

        tracing::debug!(count = items.len(), "catalog returned records");
        Ok(items)
    }
}

// Volume-search response structs.

#[derive(Debug, Deserialize)]
struct SearchResult {
    items: Option<Vec<Volume>>,
}

/// One raw catalog record.
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    #[serde(rename = "volumeInfo")]
    pub volume_info: Option<VolumeInfo>,
}

/// The metadata a filename is built from. A record is usable only when all
/// three fields are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
}
