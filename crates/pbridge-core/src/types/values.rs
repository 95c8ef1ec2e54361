//! URL and URI values passed by value across the boundary
//!
//! These are copied on every call and carry no identity. The structural
//! checks here are only strong enough to keep obviously malformed input on
//! the engine side of the boundary; the host stays the authority on whether
//! a well-formed URL resolves.

use serde::{Deserialize, Serialize};
use std::fmt;

fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// A page URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageUrl(String);

impl PageUrl {
    /// Wrap a URL string without validating it
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the URL text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scheme component, if the URL is well formed
    pub fn scheme(&self) -> Option<&str> {
        self.split().map(|(scheme, _)| scheme)
    }

    fn split(&self) -> Option<(&str, &str)> {
        if self.0.chars().any(char::is_whitespace) {
            return None;
        }
        let (scheme, rest) = self.0.split_once(':')?;
        (is_scheme(scheme) && !rest.is_empty()).then_some((scheme, rest))
    }

    /// Structural check: `scheme ":" remainder`, no whitespace
    pub fn is_well_formed(&self) -> bool {
        self.split().is_some()
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for PageUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// A content-addressed URI of the form `content://authority/path`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentUri(String);

impl ContentUri {
    /// The only scheme the host resolves to a file name
    pub const SCHEME: &'static str = "content";

    /// Wrap a URI string without validating it
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Get the URI text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parts(&self) -> Option<(&str, &str)> {
        let rest = self.0.strip_prefix("content://")?;
        if rest.chars().any(char::is_whitespace) {
            return None;
        }
        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        (!authority.is_empty()).then_some((authority, path))
    }

    /// Authority component (`content://<authority>/...`)
    pub fn authority(&self) -> Option<&str> {
        self.parts().map(|(authority, _)| authority)
    }

    /// Path below the authority, without the leading `/`
    pub fn path(&self) -> Option<&str> {
        self.parts().map(|(_, path)| path)
    }

    /// Whether the URI has the `content://authority` shape
    pub fn is_well_formed(&self) -> bool {
        self.parts().is_some()
    }
}

impl fmt::Display for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentUri {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_urls() {
        assert!(PageUrl::new("https://example.com/a").is_well_formed());
        assert!(PageUrl::new("data:text/plain,hi").is_well_formed());
        assert_eq!(PageUrl::new("HTTP://x").scheme(), Some("HTTP"));
    }

    #[test]
    fn test_malformed_urls() {
        for url in ["", "example.com", "://x", "1http://x", "http:", "http://exa mple.com"] {
            assert!(!PageUrl::new(url).is_well_formed(), "{url:?}");
        }
    }

    #[test]
    fn test_content_uri_parts() {
        let uri = ContentUri::new("content://media/external/images/7");
        assert_eq!(uri.authority(), Some("media"));
        assert_eq!(uri.path(), Some("external/images/7"));

        let bare = ContentUri::new("content://downloads");
        assert_eq!(bare.path(), Some(""));
    }

    #[test]
    fn test_content_uri_rejects_other_shapes() {
        for uri in ["file:///tmp/x", "content:///x", "content://", "content://a b/c"] {
            assert!(!ContentUri::new(uri).is_well_formed(), "{uri:?}");
        }
    }
}
