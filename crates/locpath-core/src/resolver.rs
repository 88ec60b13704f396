//! URL resolution: turning a raw, possibly relative, URL string into its
//! browser-style components.
//!
//! The locator only depends on the [`UrlResolver`] trait, so a different
//! resolution policy can be plugged in without touching parsing.

use url::Url;

use crate::error::ParseError;

/// Components of a resolved URL, shaped like a browser `Location`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub href: String,
    /// Scheme with trailing colon, e.g. `"https:"`.
    pub protocol: String,
    pub hostname: String,
    /// Empty when the port is the scheme default or absent.
    pub port: String,
    /// `hostname:port`, or `hostname` alone when `port` is empty.
    pub host: String,
    /// Still percent-encoded.
    pub pathname: String,
    /// `"?..."`, or empty when there is no query.
    pub search: String,
    /// `"#..."`, or empty when there is no fragment.
    pub hash: String,
}

impl From<&Url> for ResolvedUrl {
    fn from(url: &Url) -> Self {
        let hostname = url.host_str().unwrap_or_default().to_string();
        let port = url.port().map(|p| p.to_string()).unwrap_or_default();
        let host = if port.is_empty() {
            hostname.clone()
        } else {
            format!("{hostname}:{port}")
        };

        Self {
            href: url.as_str().to_string(),
            protocol: format!("{}:", url.scheme()),
            hostname,
            port,
            host,
            pathname: url.path().to_string(),
            search: prefixed('?', url.query()),
            hash: prefixed('#', url.fragment()),
        }
    }
}

fn prefixed(prefix: char, part: Option<&str>) -> String {
    match part {
        Some(p) if !p.is_empty() => format!("{prefix}{p}"),
        _ => String::new(),
    }
}

/// Resolves raw URL strings against an optional base URL.
pub trait UrlResolver {
    fn resolve(&self, raw: &str, base: Option<&str>) -> Result<ResolvedUrl, ParseError>;
}

/// WHATWG resolution backed by the `url` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseUrlResolver;

impl UrlResolver for BaseUrlResolver {
    fn resolve(&self, raw: &str, base: Option<&str>) -> Result<ResolvedUrl, ParseError> {
        let base = base
            .map(|b| {
                Url::parse(b).map_err(|source| ParseError::InvalidUrl {
                    input: b.to_string(),
                    source,
                })
            })
            .transpose()?;

        let parsed = Url::options()
            .base_url(base.as_ref())
            .parse(raw)
            .map_err(|source| match source {
                url::ParseError::RelativeUrlWithoutBase => ParseError::MissingBase {
                    input: raw.to_string(),
                },
                source => ParseError::InvalidUrl {
                    input: raw.to_string(),
                    source,
                },
            })?;

        Ok(ResolvedUrl::from(&parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_absolute_url() {
        let r = BaseUrlResolver
            .resolve("http://localhost:5000/foo/bar/index.html?x=1#sec", None)
            .unwrap();
        assert_eq!(r.href, "http://localhost:5000/foo/bar/index.html?x=1#sec");
        assert_eq!(r.protocol, "http:");
        assert_eq!(r.hostname, "localhost");
        assert_eq!(r.port, "5000");
        assert_eq!(r.host, "localhost:5000");
        assert_eq!(r.pathname, "/foo/bar/index.html");
        assert_eq!(r.search, "?x=1");
        assert_eq!(r.hash, "#sec");
    }

    #[test]
    fn default_port_is_empty() {
        let r = BaseUrlResolver.resolve("https://example.com:443/a", None).unwrap();
        assert_eq!(r.port, "");
        assert_eq!(r.host, "example.com");
        assert_eq!(r.href, "https://example.com/a");
    }

    #[test]
    fn resolves_relative_against_base() {
        let r = BaseUrlResolver
            .resolve("../x/y.txt", Some("http://example.com/a/b/c.html"))
            .unwrap();
        assert_eq!(r.href, "http://example.com/a/x/y.txt");
        assert_eq!(r.pathname, "/a/x/y.txt");
        assert_eq!(r.search, "");
        assert_eq!(r.hash, "");
    }

    #[test]
    fn empty_query_and_fragment_are_blank() {
        let r = BaseUrlResolver.resolve("http://example.com/?#", None).unwrap();
        assert_eq!(r.search, "");
        assert_eq!(r.hash, "");
    }

    #[test]
    fn relative_without_base_fails() {
        let err = BaseUrlResolver.resolve("foo/bar", None).unwrap_err();
        assert!(matches!(err, ParseError::MissingBase { .. }));
    }

    #[test]
    fn malformed_url_fails() {
        let err = BaseUrlResolver.resolve("http://[::1/", None).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrl { .. }));
    }

    #[test]
    fn malformed_base_fails() {
        let err = BaseUrlResolver.resolve("x", Some("not a url")).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrl { .. }));
    }
}
