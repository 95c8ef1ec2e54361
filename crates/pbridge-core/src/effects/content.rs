//! Content URI resolution effect interface

use crate::types::ContentUri;

/// Content URI resolution
pub trait ContentUriEffects: Send + Sync {
    /// Filesystem path behind `uri`; empty for invalid or unresolvable URIs
    fn resolve_file_name_for_content_uri(&self, uri: &ContentUri) -> String;
}
