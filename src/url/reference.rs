use crate::url::canonical::has_http_scheme;
use crate::UrlError;

/// Scheme prefixes of references that can never be crawled
const NON_HTTP_PREFIXES: &[&str] = &["mailto:", "tel:", "sms:", "javascript:"];

/// Shape of a raw `href`/`src` value as found in markup
///
/// Each variant carries the remainder of the reference after its
/// distinguishing prefix has been removed (except `Absolute` and `Bare`,
/// which carry the whole reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    /// `http://...` or `https://...`
    Absolute(&'a str),
    /// `//host/path`
    ProtocolRelative(&'a str),
    /// `/path`
    RootRelative(&'a str),
    /// `~/path`
    HomeRelative(&'a str),
    /// `./path`
    CurrentDir(&'a str),
    /// `../path`
    ParentDir(&'a str),
    /// `path`
    Bare(&'a str),
}

impl<'a> Reference<'a> {
    /// Classifies a raw reference
    ///
    /// Rules are evaluated in order, first match wins:
    ///
    /// | Reference | Result |
    /// |-----------|--------|
    /// | empty | `Err(EmptyReference)` |
    /// | `mailto:`, `tel:`, `sms:`, `javascript:` | `Err(NonHttpReference)` |
    /// | `http://`, `https://` | `Absolute` |
    /// | `//x` | `ProtocolRelative` |
    /// | `/x` | `RootRelative` |
    /// | `~/x` | `HomeRelative` |
    /// | `./x` | `CurrentDir` |
    /// | `../x` | `ParentDir` |
    /// | anything else | `Bare` |
    pub fn classify(raw: &'a str) -> Result<Self, UrlError> {
        if raw.is_empty() {
            return Err(UrlError::EmptyReference);
        }

        if NON_HTTP_PREFIXES.iter().any(|p| raw.starts_with(*p)) {
            return Err(UrlError::NonHttpReference(raw.to_string()));
        }

        if has_http_scheme(raw) {
            return Ok(Self::Absolute(raw));
        }

        // A lone "//" has no host, so it falls through to root-relative
        if let Some(rest) = raw.strip_prefix("//").filter(|rest| !rest.is_empty()) {
            return Ok(Self::ProtocolRelative(rest));
        }

        if let Some(rest) = raw.strip_prefix('/') {
            return Ok(Self::RootRelative(rest));
        }

        if let Some(rest) = raw.strip_prefix("~/") {
            return Ok(Self::HomeRelative(rest));
        }

        if let Some(rest) = raw.strip_prefix("./") {
            return Ok(Self::CurrentDir(rest));
        }

        if let Some(rest) = raw.strip_prefix("../") {
            return Ok(Self::ParentDir(rest));
        }

        Ok(Self::Bare(raw))
    }
}
