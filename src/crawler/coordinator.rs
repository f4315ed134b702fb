//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator owns all per-run state (seed, scope, frontier and the
//! report being accumulated) and drains the frontier one page at a time.
//! Pages are fully processed before the next one is dequeued, so the
//! report is in breadth-first discovery order.

use crate::config::Config;
use crate::crawler::fetcher::{HttpTransport, Transport};
use crate::crawler::frontier::Frontier;
use crate::crawler::processor::{process_page, PageOutcome};
use crate::output::{CrawlReport, SkippedPage};
use crate::url::{DomainScope, Seed};
use crate::MapperError;

/// Main crawler coordinator structure
pub struct Coordinator<T = HttpTransport> {
    transport: T,
    seed: Seed,
    scope: DomainScope,
    frontier: Frontier,
    max_pages: u32,
}

impl Coordinator<HttpTransport> {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `seed_url` - The raw seed URL (scheme and trailing slash optional)
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(MapperError)` - Invalid seed or HTTP client construction failed
    pub fn new(config: &Config, seed_url: &str) -> Result<Self, MapperError> {
        let seed = Seed::parse(seed_url)?;
        let transport = HttpTransport::from_config(&config.crawler, &config.user_agent)?;
        Ok(Self::with_transport(transport, seed, config.crawler.max_pages))
    }
}

impl<T: Transport> Coordinator<T> {
    /// Creates a coordinator around any transport
    ///
    /// The frontier is seeded with the normalized seed URL.
    pub fn with_transport(transport: T, seed: Seed, max_pages: u32) -> Self {
        let scope = DomainScope::for_seed(&seed);
        let mut frontier = Frontier::new();
        frontier.admit(seed.url());

        Self {
            transport,
            seed,
            scope,
            frontier,
            max_pages,
        }
    }

    /// The seed this coordinator crawls from
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// The frontier (pending URLs and admitted keys)
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Runs the main crawl loop until the frontier is empty
    ///
    /// Fetch failures and out-of-scope redirects are recorded in
    /// `CrawlReport::skipped` and never abort the run.
    pub async fn run(&mut self) -> CrawlReport {
        tracing::info!(
            "Starting crawl of {} (target domain: {})",
            self.seed.url(),
            self.scope.domain()
        );

        let mut report = CrawlReport::default();
        let start_time = std::time::Instant::now();

        while let Some(url) = self.frontier.next() {
            tracing::debug!("Processing URL: {}", url);

            let outcome = process_page(
                &self.transport,
                &self.seed,
                &self.scope,
                &mut self.frontier,
                &url,
            )
            .await;

            match outcome {
                PageOutcome::Recorded(record) => report.pages.push(record),
                PageOutcome::Skipped(reason) => report.skipped.push(SkippedPage { url, reason }),
            }

            let processed = report.pages_processed();

            // Progress reporting every 10 pages
            if processed % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages processed, {} in frontier, {:.2} pages/sec",
                    processed,
                    self.frontier.len(),
                    processed as f64 / start_time.elapsed().as_secs_f64()
                );
            }

            if self.max_pages > 0 && processed >= self.max_pages as usize {
                tracing::info!(
                    "Reached page limit of {}, {} URLs left unvisited",
                    self.max_pages,
                    self.frontier.len()
                );
                break;
            }
        }

        tracing::info!(
            "Crawl completed: {} pages recorded, {} skipped in {:?}",
            report.pages.len(),
            report.skipped.len(),
            start_time.elapsed()
        );

        report
    }
}

/// Runs a complete crawl from a raw seed URL
///
/// # Example
///
/// ```no_run
/// use asset_mapper::config::Config;
/// use asset_mapper::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(&Config::default(), "eyskens.me").await?;
/// println!("{} pages", report.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config, seed_url: &str) -> Result<CrawlReport, MapperError> {
    let mut coordinator = Coordinator::new(config, seed_url)?;
    Ok(coordinator.run().await)
}
