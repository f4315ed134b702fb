/// Scheme prefixes treated as navigable HTTP URLs
const HTTP_SCHEMES: &[&str] = &["http://", "https://"];

/// Returns true if the string starts with an explicit `http://` or `https://` scheme
///
/// The match is case-sensitive, so `HTTP://example.com` is not considered absolute.
pub fn has_http_scheme(url: &str) -> bool {
    http_scheme(url).is_some()
}

/// Returns the scheme prefix (including `://`) of an absolute URL, if any
pub fn http_scheme(url: &str) -> Option<&'static str> {
    HTTP_SCHEMES
        .iter()
        .copied()
        .find(|scheme| url.starts_with(*scheme))
}

/// Removes a leading `http://` or `https://` from the string
pub fn strip_scheme(url: &str) -> &str {
    match http_scheme(url) {
        Some(scheme) => &url[scheme.len()..],
        None => url,
    }
}

/// Removes the fragment (everything from the first `#`) from the string
pub fn strip_fragment(url: &str) -> &str {
    match url.find('#') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Computes the deduplication key of a URL
///
/// # Key Construction
///
/// 1. Drop the fragment
/// 2. Trim leading and trailing `/`
/// 3. Drop the `http://` / `https://` prefix
///
/// Two URLs that differ only in scheme, fragment or trailing slash share a key.
///
/// # Examples
///
/// ```
/// use asset_mapper::url::canonical_key;
///
/// assert_eq!(canonical_key("https://a.com/b/"), canonical_key("http://a.com/b"));
/// assert_eq!(canonical_key("https://a.com/b#top"), "a.com/b");
/// ```
pub fn canonical_key(url: &str) -> String {
    let without_fragment = strip_fragment(url);
    let trimmed = without_fragment.trim_matches('/');
    strip_scheme(trimmed).to_string()
}
