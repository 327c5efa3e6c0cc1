//! HTTP content fetching
//!
//! Fetches raw article bytes from a user-supplied link.

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Content fetch error types
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Link is not a parseable URL
    InvalidUrl(String),
    /// Request timed out
    Timeout(String),
    /// HTTP request error
    HttpError(String),
    /// HTTP status other than 200
    HttpStatus(u16, String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl(msg) => write!(f, "Invalid link: {}", msg),
            Self::Timeout(url) => write!(f, "Timeout fetching: {}", url),
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::HttpStatus(code, url) => write!(f, "HTTP {} for: {}", code, url),
        }
    }
}

impl std::error::Error for FetchError {}

/// Fetcher for article links
pub struct ContentFetcher {
    client: Client,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(user_agent: &str, timeout_secs: u64, max_redirects: usize) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(max_redirects))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch the raw bytes behind a link.
    ///
    /// Success is strictly HTTP 200; any other status yields
    /// `FetchError::HttpStatus` and no content.
    pub async fn fetch(&self, link: &str) -> Result<Bytes, FetchError> {
        Url::parse(link).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", link, e)))?;

        debug!("Fetching content from: {}", link);

        let response = self.client.get(link).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(link.to_string())
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(FetchError::HttpStatus(status.as_u16(), link.to_string()));
        }

        response
            .bytes()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::HttpStatus(404, "https://example.com/x".to_string());
        assert_eq!(err.to_string(), "HTTP 404 for: https://example.com/x");

        let err = FetchError::Timeout("https://example.com".to_string());
        assert!(err.to_string().contains("Timeout"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url() {
        let fetcher = ContentFetcher::new("test-agent", 5, 5);
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
