//! Report types
//!
//! This module defines the per-page record produced by the page processor
//! and the report accumulated by the coordinator.

use crate::crawler::Skip;
use serde::Serialize;

/// Assets found on one successfully fetched, in-scope page
///
/// Serializes as `{"url": ..., "assets": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// Final (post-redirect) absolute URL of the page
    pub url: String,

    /// Asset URLs in document order, duplicates preserved
    pub assets: Vec<String>,
}

/// A dequeued URL that produced no page record
#[derive(Debug)]
pub struct SkippedPage {
    /// The URL as it was dequeued from the frontier
    pub url: String,

    /// Why the page was dropped
    pub reason: Skip,
}

/// Result of a full crawl
///
/// `pages` is in processing order, which is breadth-first discovery order
/// from the seed. Only `pages` is part of the JSON output.
#[derive(Debug, Default)]
pub struct CrawlReport {
    pub pages: Vec<PageRecord>,
    pub skipped: Vec<SkippedPage>,
}

impl CrawlReport {
    /// Number of URLs taken off the frontier
    pub fn pages_processed(&self) -> usize {
        self.pages.len() + self.skipped.len()
    }

    /// Looks up the record of a page by its final URL
    pub fn page(&self, url: &str) -> Option<&PageRecord> {
        self.pages.iter().find(|page| page.url == url)
    }

    /// URLs of all recorded pages, in report order
    pub fn urls(&self) -> Vec<&str> {
        self.pages.iter().map(|page| page.url.as_str()).collect()
    }
}
