use super::HostBridge;
use pbridge_core::effects::ResourceEffects;
use pbridge_core::{HostRuntime, LocalizedName, RawResourceId};
use tracing::debug;

impl<H: HostRuntime> ResourceEffects for HostBridge<H> {
    fn global_localized_name(&self, id: RawResourceId) -> LocalizedName {
        let Some(known) = id.known() else {
            debug!(%id, "resource identifier outside the enumeration");
            return LocalizedName::NotAvailable;
        };
        self.call(
            "localized_name",
            |host| host.localized_name(known.as_raw()).map(LocalizedName::Resolved),
            || LocalizedName::NotAvailable,
        )
    }
}
