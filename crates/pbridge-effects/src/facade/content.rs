use super::HostBridge;
use pbridge_core::effects::{defaults, ContentUriEffects};
use pbridge_core::{ContentUri, HostRuntime};
use tracing::debug;

impl<H: HostRuntime> ContentUriEffects for HostBridge<H> {
    fn resolve_file_name_for_content_uri(&self, uri: &ContentUri) -> String {
        if !uri.is_well_formed() {
            debug!(%uri, "not a content uri, not forwarded");
            return defaults::CONTENT_FILE_NAME.to_string();
        }
        self.call(
            "resolve_file_name_for_content_uri",
            |host| host.resolve_file_name_for_content_uri(uri),
            || defaults::CONTENT_FILE_NAME.to_string(),
        )
    }
}
