//! Where stats API documents come from.
//!
//! [`XmlSource`] is the seam between query logic and transport: the
//! production [`HttpSource`] performs a GET with [`reqwest`], tests plug in
//! canned documents.

use std::time::Duration;

use pitwall_core::xml::{parse_document, XmlElement};

use crate::error::ApiError;

/// Longest response excerpt kept in logs and errors.
const BODY_PREVIEW_CHARS: usize = 200;

/// Fetches one XML document from the stats API.
#[async_trait::async_trait]
pub trait XmlSource: Send + Sync {
    /// GET `path` (relative to the API base URL) with the given query
    /// parameters and return the parsed root element.
    async fn fetch_xml(&self, path: &str, query: &[(&str, String)]) -> Result<XmlElement, ApiError>;
}

/// HTTP-backed [`XmlSource`] for a single stats API deployment.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Build a source with its own pooled client.
    ///
    /// * `base_url`   - API root, e.g. `https://stats.example.net/api`.
    /// * `timeout`    - per-request timeout.
    /// * `user_agent` - value of the `User-Agent` header.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl XmlSource for HttpSource {
    async fn fetch_xml(&self, path: &str, query: &[(&str, String)]) -> Result<XmlElement, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, ?query, "GET XML");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map(|text| preview(&text))
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::debug!(url = %url, status = status.as_u16(), "Stats API returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        tracing::trace!(url = %url, body = %preview(&text), "Stats API response");

        parse_document(&text).map_err(|e| {
            tracing::debug!(url = %url, error = %e, "XML parse error");
            ApiError::from(e)
        })
    }
}

fn preview(text: &str) -> String {
    text.chars().take(BODY_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let source = HttpSource::with_client(reqwest::Client::new(), "https://stats.example/api/");
        assert_eq!(source.base_url(), "https://stats.example/api");
    }

    #[test]
    fn new_does_not_panic() {
        let source = HttpSource::new("https://stats.example", Duration::from_secs(5), "pitwall-test");
        assert!(source.is_ok());
    }

    #[test]
    fn preview_is_bounded() {
        assert_eq!(preview(&"x".repeat(500)).len(), BODY_PREVIEW_CHARS);
        assert_eq!(preview("short"), "short");
    }
}
