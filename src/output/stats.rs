//! Statistics for a finished crawl
//!
//! Statistics are derived from the report and logged; stdout is reserved for
//! the JSON report itself.

use crate::crawler::Skip;
use crate::output::CrawlReport;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of URLs taken off the frontier
    pub pages_processed: usize,

    /// Number of pages that produced a record
    pub pages_recorded: usize,

    /// Pages dropped because the fetch failed
    pub fetch_failures: usize,

    /// Pages dropped because a redirect left the target domain
    pub out_of_scope_redirects: usize,

    /// Total number of asset references across all records
    pub total_assets: usize,
}

impl CrawlStatistics {
    /// Computes statistics from a crawl report
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut stats = Self {
            pages_processed: report.pages_processed(),
            pages_recorded: report.pages.len(),
            total_assets: report.pages.iter().map(|p| p.assets.len()).sum(),
            ..Self::default()
        };

        for skipped in &report.skipped {
            match skipped.reason {
                Skip::FetchFailure(_) => stats.fetch_failures += 1,
                Skip::OutOfScopeRedirect { .. } => stats.out_of_scope_redirects += 1,
            }
        }

        stats
    }
}

/// Logs statistics at info level
pub fn log_statistics(stats: &CrawlStatistics) {
    tracing::info!(
        "Crawl statistics: {} pages processed, {} recorded, {} assets",
        stats.pages_processed,
        stats.pages_recorded,
        stats.total_assets
    );

    if stats.fetch_failures > 0 || stats.out_of_scope_redirects > 0 {
        tracing::info!(
            "Skipped pages: {} fetch failures, {} out-of-scope redirects",
            stats.fetch_failures,
            stats.out_of_scope_redirects
        );
    }
}
