//! Asset-Mapper: a single-domain site and asset mapper
//!
//! This crate crawls every page reachable from a seed URL within the seed's
//! domain and records, for each page, the scripts, stylesheets, images and
//! icons it references.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Asset-Mapper operations
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to render report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
///
/// `EmptyReference` and `NonHttpReference` are resolver rejections: the crawler
/// drops the offending reference and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Reference is empty")]
    EmptyReference,

    #[error("Reference does not point to an HTTP resource: {0}")]
    NonHttpReference(String),

    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),
}

/// Result type alias for Asset-Mapper operations
pub type Result<T> = std::result::Result<T, MapperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Coordinator;
pub use output::{CrawlReport, PageRecord};
pub use crate::url::{canonical_key, resolve, DomainScope, Seed};
