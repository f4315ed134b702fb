//! Deduplicating crawl frontier
//!
//! The frontier is a FIFO queue of absolute URLs waiting to be fetched, backed
//! by the set of canonical keys that were ever admitted. A key never leaves the
//! set, so each logical page is queued at most once per run.

use crate::url::{canonical_key, strip_fragment};
use std::collections::{HashSet, VecDeque};

/// FIFO of pending URLs plus the set of admitted canonical keys
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched, in admission order
    pending: VecDeque<String>,

    /// Canonical keys of every URL ever queued or marked as admitted
    admitted: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a URL unless its canonical key was already admitted
    ///
    /// The fragment is dropped from the queued URL.
    ///
    /// # Returns
    ///
    /// `true` if the URL was queued, `false` if it was a duplicate
    pub fn admit(&mut self, url: &str) -> bool {
        let key = canonical_key(url);
        if !self.admitted.insert(key) {
            return false;
        }

        self.pending.push_back(strip_fragment(url).to_string());
        true
    }

    /// Records a URL as admitted without queueing it
    ///
    /// Used for redirect targets: a page reached through a redirect must not
    /// be fetched again under its final URL.
    pub fn mark_admitted(&mut self, url: &str) {
        self.admitted.insert(canonical_key(url));
    }

    /// Returns true if the URL's canonical key was already admitted
    pub fn is_admitted(&self, url: &str) -> bool {
        self.admitted.contains(&canonical_key(url))
    }

    /// Removes and returns the next URL to fetch
    pub fn next(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    /// Returns the number of URLs waiting to be fetched
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether no URL is waiting to be fetched
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the number of distinct canonical keys admitted so far
    pub fn admitted_count(&self) -> usize {
        self.admitted.len()
    }
}
