//! HTML parser for extracting links and assets
//!
//! This module turns a page body into a sequence of start tags and
//! classifies each tag:
//! - `<a href="...">` is a navigable link (candidate frontier entry)
//! - any element with `src`, or `<link href="...">`, is an asset
//!
//! # Asset Rules
//!
//! `<link>` elements are only assets when `rel` is absent, `stylesheet` or
//! `icon`. `preconnect`, `alternate`, `canonical` and friends are ignored.

use crate::url::{has_http_scheme, resolve, DomainScope, Seed};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, StartTag, TagToken, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// An HTML start tag with its attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Lowercase tag name
    pub name: String,

    /// Attributes as (name, value) pairs
    pub attributes: Vec<(String, String)>,
}

impl Tag {
    /// Creates a tag from borrowed parts
    pub fn new(name: &str, attributes: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Returns the value of the first attribute with the given name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true for `<a>` elements
    pub fn is_anchor(&self) -> bool {
        self.name == "a"
    }
}

/// Links and assets extracted from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedPage {
    /// Absolute URLs to offer to the frontier, in document order
    pub links: Vec<String>,

    /// Absolute asset URLs in document order, duplicates preserved
    pub assets: Vec<String>,
}

/// Token sink that keeps start tags and drops everything else
#[derive(Debug, Default)]
struct StartTagCollector {
    tags: Vec<Tag>,
}

impl TokenSink for StartTagCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            TagToken(tag) if tag.kind == StartTag => {
                let content = content_model(&tag.name);
                self.tags.push(Tag {
                    name: tag.name.to_string(),
                    attributes: tag
                        .attrs
                        .iter()
                        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                        .collect(),
                });
                content
            }
            _ => TokenSinkResult::Continue,
        }
    }
}

/// How the tokenizer must read the content following a start tag
///
/// Text-only elements switch the tokenizer out of markup mode so that
/// `<script>if (a<b) ...</script>` yields no bogus tags. `<noscript>` stays
/// markup: nothing here runs scripts, so its fallback content is what the
/// page shows.
fn content_model(name: &str) -> TokenSinkResult<()> {
    match name {
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

/// Tokenizes a page body into its start tags, in document order
///
/// Only tags present in the markup are returned; no implied `<html>`,
/// `<head>` or `<body>` is added. The tokenizer recovers from malformed
/// markup, so there is no error case.
pub fn tokenize(body: &str) -> Vec<Tag> {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(body));

    let mut tokenizer = Tokenizer::new(StartTagCollector::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    tokenizer.sink.tags
}

/// Extracts the link to follow from an anchor
///
/// Absolute `href`s are kept only when in scope. Relative ones are resolved
/// against the page URL and kept without a scope check.
///
/// # Returns
///
/// * `Some(String)` - Absolute URL to admit to the frontier
/// * `None` - No `href`, out of scope, or not resolvable
pub fn scan_link(seed: &Seed, scope: &DomainScope, page_url: &str, tag: &Tag) -> Option<String> {
    let href = tag.attr("href")?;

    if has_http_scheme(href) {
        if scope.in_scope(href) {
            return Some(href.to_string());
        }
        tracing::trace!("Ignoring out-of-scope link {}", href);
        return None;
    }

    match resolve(seed, page_url, href) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::trace!("Dropping link {:?} on {}: {}", href, page_url, e);
            None
        }
    }
}

/// Extracts the asset URL referenced by a tag, if any
///
/// # Returns
///
/// * `Some(String)` - Absolute asset URL
/// * `None` - Not asset-bearing, filtered by `rel`, or not resolvable
pub fn scan_asset(seed: &Seed, page_url: &str, tag: &Tag) -> Option<String> {
    let is_link = tag.name == "link";

    // On <link>, `href` and `src` both count and the later one wins
    let raw = tag
        .attributes
        .iter()
        .rev()
        .find(|(key, _)| key == "src" || (is_link && key == "href"))
        .map(|(_, value)| value.as_str())?;

    if is_link && !matches!(tag.attr("rel"), None | Some("stylesheet") | Some("icon")) {
        return None;
    }

    if has_http_scheme(raw) {
        return Some(raw.to_string());
    }

    match resolve(seed, page_url, raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::trace!("Dropping asset {:?} on {}: {}", raw, page_url, e);
            None
        }
    }
}

/// Classifies every tag of a page into links and assets
pub fn scan_tags(seed: &Seed, scope: &DomainScope, page_url: &str, tags: &[Tag]) -> ScannedPage {
    let mut scanned = ScannedPage::default();

    for tag in tags {
        if tag.is_anchor() {
            if let Some(link) = scan_link(seed, scope, page_url, tag) {
                scanned.links.push(link);
            }
        } else if let Some(asset) = scan_asset(seed, page_url, tag) {
            scanned.assets.push(asset);
        }
    }

    scanned
}
