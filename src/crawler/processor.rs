//! Page processor
//!
//! Handles one dequeued URL: fetch, follow the redirect bookkeeping, scope
//! check the final URL, scan the markup, admit discovered links and build
//! the page record.

use crate::crawler::fetcher::{FetchError, Transport};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::{scan_tags, tokenize};
use crate::output::PageRecord;
use crate::url::{DomainScope, Seed};

/// Why a dequeued URL produced no page record
#[derive(Debug)]
pub enum Skip {
    /// The transport could not fetch the page or read its body
    FetchFailure(FetchError),

    /// The fetch ended on a URL outside the target domain
    OutOfScopeRedirect {
        /// The final URL reported by the transport
        final_url: String,
    },
}

/// Result of processing one URL
#[derive(Debug)]
pub enum PageOutcome {
    /// The page was fetched, in scope, and scanned
    Recorded(PageRecord),

    /// The page contributes nothing to the report
    Skipped(Skip),
}

/// Processes a single URL
///
/// This function:
/// 1. Fetches the page through the transport
/// 2. Marks the final (post-redirect) URL as admitted
/// 3. Skips the page if the final URL left the target domain
/// 4. Tokenizes the body and classifies every tag
/// 5. Admits discovered links to the frontier
/// 6. Returns the page record with its assets in document order
pub async fn process_page<T: Transport>(
    transport: &T,
    seed: &Seed,
    scope: &DomainScope,
    frontier: &mut Frontier,
    url: &str,
) -> PageOutcome {
    let fetched = match transport.fetch(url).await {
        Ok(fetched) => fetched,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", url, e);
            return PageOutcome::Skipped(Skip::FetchFailure(e));
        }
    };

    let final_url = fetched.final_url;
    if final_url != url {
        tracing::debug!("{} redirected to {}", url, final_url);
    }
    frontier.mark_admitted(&final_url);

    if !scope.in_scope(&final_url) {
        tracing::warn!("Skipping {}: redirected out of scope to {}", url, final_url);
        return PageOutcome::Skipped(Skip::OutOfScopeRedirect { final_url });
    }

    let tags = tokenize(&fetched.body);
    let scanned = scan_tags(seed, scope, &final_url, &tags);

    let mut admitted = 0;
    for link in &scanned.links {
        if frontier.admit(link) {
            admitted += 1;
        }
    }

    tracing::debug!(
        "Processed {} (HTTP {}): {} tags, {} new links, {} assets",
        final_url,
        fetched.status,
        tags.len(),
        admitted,
        scanned.assets.len()
    );

    PageOutcome::Recorded(PageRecord {
        url: final_url,
        assets: scanned.assets,
    })
}
