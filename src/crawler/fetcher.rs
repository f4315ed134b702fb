//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - The `Transport` seam the page processor fetches through
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests that follow redirects and report the final URL
//! - Error classification
//!
//! HTTP status codes are not failures: a 404 page with a readable body is
//! processed like any other page. Only transport-level errors fail a fetch.

use crate::config::{CrawlerConfig, UserAgentConfig};
use reqwest::{redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// A fetched page, after redirects
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Page body decoded as text
    pub body: String,
}

/// Errors that make a page contribute nothing to the report
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Performs HTTP GETs on behalf of the page processor
pub trait Transport {
    /// Fetches a URL, following redirects
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// `Transport` backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a transport from the crawler and user agent configuration
    pub fn from_config(
        crawler: &CrawlerConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(crawler, user_agent)?))
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `crawler` - Timeouts and redirect limit
/// * `user_agent` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use asset_mapper::config::{CrawlerConfig, UserAgentConfig};
/// use asset_mapper::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    crawler: &CrawlerConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    let redirect = if crawler.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(crawler.max_redirects as usize)
    };

    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(crawler.request_timeout))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and reads its body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - The final URL, status and body
/// * `Err(FetchError)` - The request or the body read failed
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        tracing::debug!("{} answered with HTTP {}", final_url, status.as_u16());
    }

    let body = response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchedPage {
        final_url,
        status: status.as_u16(),
        body,
    })
}

/// Maps a `reqwest` error to a `FetchError`
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Network {
            url: url.to_string(),
            message: "Request timeout".to_string(),
        }
    } else if error.is_connect() {
        FetchError::Network {
            url: url.to_string(),
            message: "Connection failed".to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}
