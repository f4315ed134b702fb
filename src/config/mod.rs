//! Configuration module for Asset-Mapper
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so crawling works without one.
//!
//! # Example
//!
//! ```no_run
//! use asset_mapper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("asset-mapper.toml")).unwrap();
//! println!("Request timeout: {}s", config.crawler.request_timeout);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
