use super::HostBridge;
use pbridge_core::effects::{defaults, KeyGeneratorEffects};
use pbridge_core::{HostRuntime, PageUrl};
use tracing::debug;

impl<H: HostRuntime> KeyGeneratorEffects for HostBridge<H> {
    fn supported_key_strength_list(&self) -> Vec<String> {
        self.call(
            "supported_key_strengths",
            |host| host.supported_key_strengths(),
            Vec::new,
        )
    }

    fn signed_public_key_and_challenge(
        &self,
        index: u32,
        challenge: &str,
        url: &PageUrl,
    ) -> String {
        if !url.is_well_formed() {
            debug!(%url, "malformed keygen url, not forwarded");
            return defaults::SIGNED_PUBLIC_KEY.to_string();
        }
        self.call(
            "signed_public_key_and_challenge",
            |host| host.signed_public_key_and_challenge(index, challenge, url),
            || defaults::SIGNED_PUBLIC_KEY.to_string(),
        )
    }
}
