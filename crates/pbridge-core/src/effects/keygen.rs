//! Key generation effect interface
//!
//! Serves `<keygen>`-style forms. The cryptography is the host's; the bridge
//! only carries the request.

use crate::types::PageUrl;

/// Key generation operations
pub trait KeyGeneratorEffects: Send + Sync {
    /// Labels of the key strengths the host supports, strongest first
    ///
    /// Empty when the host cannot answer.
    fn supported_key_strength_list(&self) -> Vec<String>;

    /// Signed public key and challenge string for the strength at `index`
    ///
    /// `index` refers to [`KeyGeneratorEffects::supported_key_strength_list`].
    /// An index outside that list yields an empty string.
    fn signed_public_key_and_challenge(&self, index: u32, challenge: &str, url: &PageUrl)
        -> String;
}
