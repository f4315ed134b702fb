//! Output module for rendering crawl reports
//!
//! This module handles:
//! - The page record and crawl report types
//! - Rendering the report as pretty-printed JSON
//! - Writing the report to stdout or a file
//! - Crawl statistics

mod report;
pub mod stats;

pub use report::{CrawlReport, PageRecord, SkippedPage};
pub use stats::{log_statistics, CrawlStatistics};

use crate::MapperError;
use std::io::Write;
use std::path::Path;

/// Renders page records as a JSON array pretty-printed with two-space indentation
///
/// # Example
///
/// ```
/// use asset_mapper::output::{render_report, PageRecord};
///
/// let pages = vec![PageRecord { url: "https://a.com/".to_string(), assets: vec![] }];
/// let json = render_report(&pages).unwrap();
/// assert!(json.starts_with("[\n  {\n    \"url\""));
/// ```
pub fn render_report(pages: &[PageRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(pages)
}

/// Writes the rendered report followed by a newline
///
/// # Arguments
///
/// * `report` - The finished crawl report
/// * `path` - Destination file, or `None` for stdout
pub fn write_report(report: &CrawlReport, path: Option<&Path>) -> Result<(), MapperError> {
    let json = render_report(&report.pages)?;

    match path {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            writeln!(file, "{}", json)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json)?;
        }
    }

    Ok(())
}
