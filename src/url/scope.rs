use crate::url::canonical::strip_scheme;
use crate::url::seed::Seed;

/// Decides whether an absolute URL belongs to the crawl's target domain
///
/// Only the host segment (the first `/`-separated segment once the scheme is
/// stripped) is compared, and the comparison is exact:
/// - `example.com` matches only `example.com`
/// - `blog.example.com` is a different domain
/// - `EXAMPLE.COM` is a different domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainScope {
    domain: String,
}

impl DomainScope {
    /// Creates a scope for the given target domain
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let domain = strip_scheme(domain.trim_matches('/')).to_string();
        Self { domain }
    }

    /// Creates a scope for the seed's target domain
    pub fn for_seed(seed: &Seed) -> Self {
        Self::new(seed.domain())
    }

    /// The target domain this scope admits
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns true if the URL's host segment equals the target domain
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_mapper::url::DomainScope;
    ///
    /// let scope = DomainScope::new("eyskens.me");
    /// assert!(scope.in_scope("https://eyskens.me/404"));
    /// assert!(!scope.in_scope("https://gocardless.com/404"));
    /// assert!(!scope.in_scope("https://blog.eyskens.me/"));
    /// ```
    pub fn in_scope(&self, url: &str) -> bool {
        strip_scheme(url).split('/').next() == Some(self.domain.as_str())
    }
}
