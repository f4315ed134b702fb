//! URL handling module for Asset-Mapper
//!
//! This module provides seed normalization, reference classification and
//! resolution, canonical deduplication keys, and the domain scope filter.
//!
//! Everything here works on plain strings: absolute URLs are compared and
//! combined textually so the crawl output keeps the exact spelling found in
//! the markup.

mod canonical;
mod reference;
mod resolve;
mod scope;
mod seed;

// Re-export main functions
pub use canonical::{canonical_key, has_http_scheme, strip_fragment, strip_scheme};
pub use reference::Reference;
pub use resolve::{directory, resolve};
pub use scope::DomainScope;
pub use seed::Seed;
