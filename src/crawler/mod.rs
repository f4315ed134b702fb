//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The deduplicating frontier
//! - HTTP fetching behind the `Transport` trait
//! - HTML tokenizing and link/asset classification
//! - Per-page processing and overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod processor;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchError, FetchedPage, HttpTransport, Transport};
pub use frontier::Frontier;
pub use parser::{scan_asset, scan_link, scan_tags, tokenize, ScannedPage, Tag};
pub use processor::{process_page, PageOutcome, Skip};
