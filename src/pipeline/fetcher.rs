//! HTTP fetcher implementation
//!
//! This module retrieves rendered pages from the site being converted:
//! - Building the HTTP client with the tool's user agent
//! - Joining route paths onto the configured base URL
//! - Classifying non-success responses and transport failures

use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every page request
pub const USER_AGENT: &str = concat!("agent-pages/", env!("CARGO_PKG_VERSION"));

/// Trait for page retrieval
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the raw body of the page at `page_path`
    async fn fetch(&self, page_path: &str) -> Result<String, FetchError>;
}

/// Fetcher issuing GET requests against a base URL
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Creates a fetcher for the site at `base_url`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use agent_pages::pipeline::HttpFetcher;
    ///
    /// let fetcher = HttpFetcher::new("http://localhost:3000/").unwrap();
    /// assert_eq!(fetcher.page_url("docs"), "http://localhost:3000/docs");
    /// ```
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for a route path; a missing leading slash is added
    pub fn page_url(&self, page_path: &str) -> String {
        if page_path.starts_with('/') {
            format!("{}{}", self.base_url, page_path)
        } else {
            format!("{}/{}", self.base_url, page_path)
        }
    }
}

/// Builds the HTTP client used for page requests
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, page_path: &str) -> Result<String, FetchError> {
        let url = self.page_url(page_path);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Body { url, source })
    }
}
