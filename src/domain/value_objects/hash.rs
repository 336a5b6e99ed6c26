//! Content Hash Value Object
//!
//! A validated, immutable hash of build-script content, used by caching and
//! classloader-identity layers downstream of this crate.

use std::fmt;

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a ContentHash from a raw hash string (with or without prefix)
    pub fn new(raw_hash: &str) -> Self {
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    /// Create a ContentHash by computing SHA-256 of content
    pub fn from_content(content: &str) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(content.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_adds_prefix_if_missing() {
        let hash = ContentHash::new("abc123");
        assert_eq!(hash.as_str(), "sha256:abc123");
    }

    #[test]
    fn new_keeps_prefix_if_present() {
        let hash = ContentHash::new("sha256:abc123");
        assert_eq!(hash.as_str(), "sha256:abc123");
    }

    #[test]
    fn from_content_computes_sha256() {
        let hash = ContentHash::from_content("apply plugin: 'java'");
        assert!(hash.as_str().starts_with("sha256:"));
        assert_eq!(hash.hex().len(), 64);
    }

    #[test]
    fn same_content_same_hash() {
        assert_eq!(
            ContentHash::from_content("x"),
            ContentHash::from_content("x")
        );
        assert_ne!(
            ContentHash::from_content("x"),
            ContentHash::from_content("y")
        );
    }
}
