//! Resource identifier contract
//!
//! The numeric values below are shared with the host's own copy of the
//! enumeration and must stay byte-identical with it. Adding, removing or
//! renumbering a variant changes [`resource_table_digest`], which makes the
//! attach handshake reject a host built against the old table.

use crate::errors::BridgeError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Well-known localizable resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum ResourceId {
    /// Label shown when a page has no domain
    NoDomain = 1,
    /// Page-load failure text
    LoadError = 2,
    /// Directory holding drawable assets
    DrawableDir = 3,
    /// File upload control label
    FileUploadLabel = 4,
    /// Form reset button label
    ResetLabel = 5,
    /// Form submit button label
    SubmitLabel = 6,
}

impl ResourceId {
    /// Every identifier in the agreed enumeration, in numeric order
    pub const ALL: [ResourceId; 6] = [
        ResourceId::NoDomain,
        ResourceId::LoadError,
        ResourceId::DrawableDir,
        ResourceId::FileUploadLabel,
        ResourceId::ResetLabel,
        ResourceId::SubmitLabel,
    ];

    /// Numeric value as seen on the wire
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Stable name used in the table digest and in logs
    pub const fn name(self) -> &'static str {
        match self {
            ResourceId::NoDomain => "NoDomain",
            ResourceId::LoadError => "LoadError",
            ResourceId::DrawableDir => "DrawableDir",
            ResourceId::FileUploadLabel => "FileUploadLabel",
            ResourceId::ResetLabel => "ResetLabel",
            ResourceId::SubmitLabel => "SubmitLabel",
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for ResourceId {
    type Error = BridgeError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        ResourceId::ALL
            .into_iter()
            .find(|id| id.as_raw() == raw)
            .ok_or(BridgeError::UnknownIdentifier { raw })
    }
}

/// Unchecked resource identifier as received across the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawResourceId(pub u32);

impl RawResourceId {
    /// The enumerated identifier, if the value is part of the contract
    pub fn known(self) -> Option<ResourceId> {
        ResourceId::try_from(self.0).ok()
    }
}

impl From<ResourceId> for RawResourceId {
    fn from(id: ResourceId) -> Self {
        Self(id.as_raw())
    }
}

impl From<u32> for RawResourceId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RawResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(id) => write!(f, "{id}({})", self.0),
            None => write!(f, "unknown({})", self.0),
        }
    }
}

/// Result of a localized-name lookup
///
/// `NotAvailable` is distinct from `Resolved(String::new())`: callers must be
/// able to tell "no such string" from "the string is empty".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalizedName {
    /// The host resolved the identifier
    Resolved(String),
    /// Unknown identifier, or no localization on the host
    NotAvailable,
}

impl LocalizedName {
    /// Whether the host resolved the identifier
    pub fn is_available(&self) -> bool {
        matches!(self, LocalizedName::Resolved(_))
    }

    /// Borrow the resolved text
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            LocalizedName::Resolved(text) => Some(text),
            LocalizedName::NotAvailable => None,
        }
    }

    /// Resolved text, or `fallback`
    pub fn unwrap_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.as_deref().unwrap_or(fallback)
    }

    /// Convert into an `Option`
    pub fn into_option(self) -> Option<String> {
        match self {
            LocalizedName::Resolved(text) => Some(text),
            LocalizedName::NotAvailable => None,
        }
    }
}

impl From<Option<String>> for LocalizedName {
    fn from(value: Option<String>) -> Self {
        value.map_or(LocalizedName::NotAvailable, LocalizedName::Resolved)
    }
}

/// SHA-256 (hex) over the canonical `name=value` lines of [`ResourceId::ALL`]
pub fn resource_table_digest() -> String {
    let mut hasher = Sha256::new();
    for id in ResourceId::ALL {
        hasher.update(format!("{}={}\n", id.name(), id.as_raw()).as_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_numeric_values_match_host_table() {
        let raw: Vec<u32> = ResourceId::ALL.iter().map(|id| id.as_raw()).collect();
        assert_eq!(raw, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ResourceId::LoadError as u32, 2);
    }

    #[test]
    fn test_try_from_round_trips_known_values() {
        for id in ResourceId::ALL {
            assert_eq!(ResourceId::try_from(id.as_raw()), Ok(id));
        }
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert_matches!(
            ResourceId::try_from(0),
            Err(BridgeError::UnknownIdentifier { raw: 0 })
        );
        assert_eq!(RawResourceId(999).known(), None);
        assert_eq!(RawResourceId(999).to_string(), "unknown(999)");
    }

    #[test]
    fn test_not_available_is_distinct_from_empty() {
        let empty = LocalizedName::Resolved(String::new());
        assert_ne!(empty, LocalizedName::NotAvailable);
        assert!(empty.is_available());
        assert_eq!(empty.as_deref(), Some(""));
        assert_eq!(LocalizedName::NotAvailable.unwrap_or("?"), "?");
    }

    #[test]
    fn test_digest_is_stable() {
        assert_eq!(resource_table_digest(), resource_table_digest());
        assert_eq!(resource_table_digest().len(), 64);
    }
}
