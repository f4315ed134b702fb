use crate::url::canonical::has_http_scheme;
use crate::UrlError;
use url::Url;

/// The starting point of a crawl
///
/// Built once from the user-supplied seed and immutable for the rest of the run.
/// It fixes the target domain used by the scope filter and the origin that
/// root-relative references resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    url: String,
    domain: String,
    origin: String,
}

impl Seed {
    /// Normalizes and validates a raw seed URL
    ///
    /// # Normalization Steps
    ///
    /// 1. Trim surrounding whitespace
    /// 2. Append a trailing `/` if missing
    /// 3. Prefix `http://` if the seed has no `http://` or `https://` scheme
    /// 4. Parse the result; reject it if malformed or host-less
    /// 5. Keep the parsed spelling: lowercase host, default port dropped
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_mapper::url::Seed;
    ///
    /// let seed = Seed::parse("eyskens.me").unwrap();
    /// assert_eq!(seed.url(), "http://eyskens.me/");
    /// assert_eq!(seed.domain(), "eyskens.me");
    /// assert_eq!(seed.origin(), "http://eyskens.me/");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, UrlError> {
        let mut url = raw.trim().to_string();
        if url.is_empty() {
            return Err(UrlError::InvalidSeed("seed URL is empty".to_string()));
        }

        if !url.ends_with('/') {
            url.push('/');
        }
        if !has_http_scheme(&url) {
            url = format!("http://{}", url);
        }

        let parsed = Url::parse(&url).map_err(|e| UrlError::InvalidSeed(format!("{}: {}", raw, e)))?;
        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => return Err(UrlError::InvalidSeed(format!("{}: missing host", raw))),
        };

        // Take every part from the parsed form so it is spelled the way the
        // transport reports final URLs (lowercase host, no default port)
        let domain = match parsed.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        let origin = format!("{}://{}/", parsed.scheme(), domain);
        let url = parsed.as_str().to_string();

        Ok(Self {
            url,
            domain,
            origin,
        })
    }

    /// The normalized seed URL, always absolute and ending in `/`
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The target domain: the seed's host segment (including any port)
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Scheme plus target domain, ending in `/`
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
