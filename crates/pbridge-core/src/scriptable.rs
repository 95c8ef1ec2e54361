//! Ownership transfer of plugin scriptable objects
//!
//! When the host hands a scriptable object to the engine it also hands over
//! one reference. [`OwnedScriptable`] is that reference: it releases exactly
//! once, either through [`OwnedScriptable::release`] or when dropped. The
//! bridge never retains a copy.

use crate::types::ScriptableObjectId;
use std::fmt;
use std::sync::Arc;

/// Host-side party that drops its reference when the engine releases
pub trait ObjectReleaser: Send + Sync {
    /// Release one reference to `id`
    fn release(&self, id: ScriptableObjectId);
}

impl<F> ObjectReleaser for F
where
    F: Fn(ScriptableObjectId) + Send + Sync,
{
    fn release(&self, id: ScriptableObjectId) {
        self(id);
    }
}

/// Result of a plugin-scripting query; `None` is the "no object" sentinel
pub type ScriptableLookup = Option<OwnedScriptable>;

/// An owned reference to a scriptable object
///
/// Not `Clone`: taking another reference is the host's business.
#[must_use = "dropping an OwnedScriptable releases the object immediately"]
pub struct OwnedScriptable {
    id: ScriptableObjectId,
    releaser: Option<Arc<dyn ObjectReleaser>>,
}

impl OwnedScriptable {
    /// Adopt one reference to `id`, released through `releaser`
    pub fn new(id: ScriptableObjectId, releaser: Arc<dyn ObjectReleaser>) -> Self {
        Self {
            id,
            releaser: Some(releaser),
        }
    }

    /// Identity of the referenced object
    pub fn id(&self) -> ScriptableObjectId {
        self.id
    }

    /// Release the reference now
    pub fn release(mut self) {
        self.release_reference();
    }

    /// Hand the reference on without releasing it
    ///
    /// Used when the script engine takes over the reference. The returned
    /// value does not release on drop; re-adopt it with
    /// [`RawScriptable::into_owned`] to restore release-on-drop.
    pub fn into_raw(mut self) -> RawScriptable {
        RawScriptable {
            id: self.id,
            releaser: self.releaser.take(),
        }
    }

    /// Re-adopt a reference handed on with [`OwnedScriptable::into_raw`]
    pub fn from_raw(raw: RawScriptable) -> Self {
        raw.into_owned()
    }

    fn release_reference(&mut self) {
        if let Some(releaser) = self.releaser.take() {
            tracing::trace!(object = %self.id, "releasing scriptable object");
            releaser.release(self.id);
        }
    }
}

impl Drop for OwnedScriptable {
    fn drop(&mut self) {
        self.release_reference();
    }
}

impl fmt::Debug for OwnedScriptable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedScriptable")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A reference that has been handed on and no longer releases on drop
pub struct RawScriptable {
    id: ScriptableObjectId,
    releaser: Option<Arc<dyn ObjectReleaser>>,
}

impl RawScriptable {
    /// Identity of the referenced object
    pub fn id(&self) -> ScriptableObjectId {
        self.id
    }

    /// Take ownership of the reference again
    pub fn into_owned(self) -> OwnedScriptable {
        OwnedScriptable {
            id: self.id,
            releaser: self.releaser,
        }
    }
}

impl fmt::Debug for RawScriptable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawScriptable")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_releaser() -> (Arc<AtomicUsize>, Arc<dyn ObjectReleaser>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let releaser: Arc<dyn ObjectReleaser> = Arc::new(move |_id: ScriptableObjectId| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (count, releaser)
    }

    #[test]
    fn test_explicit_release_happens_once() {
        let (count, releaser) = counting_releaser();
        let object = OwnedScriptable::new(ScriptableObjectId(1), releaser);
        object.release();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases() {
        let (count, releaser) = counting_releaser();
        {
            let _object = OwnedScriptable::new(ScriptableObjectId(2), releaser);
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_into_raw_defers_release() {
        let (count, releaser) = counting_releaser();
        let raw = OwnedScriptable::new(ScriptableObjectId(3), releaser).into_raw();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(raw.id(), ScriptableObjectId(3));

        raw.into_owned().release();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
