use crate::url::canonical::http_scheme;
use crate::url::reference::Reference;
use crate::url::seed::Seed;
use crate::UrlError;

/// Segments of `scheme://host` when split on `/`: `["https:", "", "host"]`
const ORIGIN_SEGMENTS: usize = 3;

/// Returns the directory of a URL, optionally going up `offset` levels
///
/// The URL is split on `/`, the last segment (the file name, or the empty
/// segment after a trailing slash) plus `offset` further segments are dropped,
/// and the rest is joined back with a trailing `/`. The result never goes
/// above the origin: `scheme://host/` is the floor.
///
/// # Examples
///
/// ```
/// use asset_mapper::url::directory;
///
/// assert_eq!(directory("https://eyskens.me/test/go/test.html", 0), "https://eyskens.me/test/go/");
/// assert_eq!(directory("https://eyskens.me/test/go/test.html", 1), "https://eyskens.me/test/");
/// assert_eq!(directory("https://eyskens.me/", 4), "https://eyskens.me/");
/// ```
pub fn directory(url: &str, offset: usize) -> String {
    let segments: Vec<&str> = url.split('/').collect();

    let floor = ORIGIN_SEGMENTS.min(segments.len());
    let keep = segments.len().saturating_sub(1 + offset).max(floor);

    let mut dir = segments[..keep].join("/");
    if !dir.ends_with('/') {
        dir.push('/');
    }
    dir
}

/// Resolves a raw reference found on the page at `base` into an absolute URL
///
/// `base` must already be absolute. Root-relative (`/x`) and home-relative
/// (`~/x`) references resolve against the seed origin, not against `base`.
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL
/// * `Err(UrlError::EmptyReference)` - The reference was empty
/// * `Err(UrlError::NonHttpReference)` - The reference uses `mailto:`, `tel:`, `sms:` or `javascript:`
///
/// # Examples
///
/// ```
/// use asset_mapper::url::{resolve, Seed};
///
/// let seed = Seed::parse("https://eyskens.me/").unwrap();
/// let url = resolve(&seed, "https://eyskens.me/hello/world.html", "./test").unwrap();
/// assert_eq!(url, "https://eyskens.me/hello/test");
/// ```
pub fn resolve(seed: &Seed, base: &str, reference: &str) -> Result<String, UrlError> {
    let resolved = match Reference::classify(reference)? {
        Reference::Absolute(url) => url.to_string(),
        Reference::ProtocolRelative(rest) => {
            format!("{}{}", http_scheme(base).unwrap_or("http://"), rest)
        }
        Reference::RootRelative(rest) | Reference::HomeRelative(rest) => {
            format!("{}{}", seed.origin(), rest)
        }
        Reference::CurrentDir(rest) | Reference::Bare(rest) => {
            format!("{}{}", directory(base, 0), rest)
        }
        Reference::ParentDir(rest) => format!("{}{}", directory(base, 1), rest),
    };

    Ok(resolved)
}
