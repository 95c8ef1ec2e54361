//! Generation-tagged opaque handles
//!
//! The engine never hands the host a pointer. A surface is named by a
//! `Handle<K>`: a slot index plus the generation the slot had when the
//! surface was registered. The host keeps a [`HandleTable`] per kind and
//! bumps the slot generation when a surface is torn down, so a handle that
//! survived a navigation/teardown race resolves to `None` instead of to
//! whatever object reuses the slot.

use crate::errors::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker trait for the kind of surface a handle names
pub trait HandleKind: 'static {
    /// Short label used in logs and `Display`
    const LABEL: &'static str;
}

/// Frame view kind marker
#[derive(Debug)]
pub enum FrameViewKind {}

impl HandleKind for FrameViewKind {
    const LABEL: &'static str = "view";
}

/// Plugin widget kind marker
#[derive(Debug)]
pub enum WidgetKind {}

impl HandleKind for WidgetKind {
    const LABEL: &'static str = "widget";
}

/// Opaque handle identifying a rendering surface ("frame view")
pub type ViewHandle = Handle<FrameViewKind>;

/// Opaque handle identifying a plugin widget
pub type WidgetHandle = Handle<WidgetKind>;

/// Generation-tagged opaque handle
///
/// Generation `0` is never issued, so `Handle::invalid()` and a zeroed raw
/// value are always unresolvable.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Handle<K: HandleKind> {
    index: u32,
    generation: u32,
    #[serde(skip)]
    _kind: PhantomData<fn() -> K>,
}

impl<K: HandleKind> Handle<K> {
    const fn from_parts(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            _kind: PhantomData,
        }
    }

    /// A handle that no table will ever resolve
    pub const fn invalid() -> Self {
        Self::from_parts(u32::MAX, 0)
    }

    /// Pack into a single `u64` for boundary marshalling
    pub fn raw(self) -> u64 {
        (u64::from(self.generation) << 32) | u64::from(self.index)
    }

    /// Unpack a value produced by [`Handle::raw`]
    ///
    /// Any `u64` is accepted; forged values simply fail to resolve.
    pub fn from_raw(raw: u64) -> Self {
        Self::from_parts(raw as u32, (raw >> 32) as u32)
    }

    /// Slot index
    pub fn index(self) -> u32 {
        self.index
    }

    /// Slot generation at registration time
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl<K: HandleKind> Clone for Handle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: HandleKind> Copy for Handle<K> {}

impl<K: HandleKind> PartialEq for Handle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<K: HandleKind> Eq for Handle<K> {}

impl<K: HandleKind> Hash for Handle<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl<K: HandleKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &K::LABEL)
            .field("index", &self.index)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<K: HandleKind> fmt::Display for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}g{}", K::LABEL, self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Host-maintained registered-handle table
///
/// Resolution never panics: stale, forged and out-of-range handles all
/// resolve to `None`. A slot whose generation counter is exhausted is retired
/// rather than reused.
#[derive(Debug)]
pub struct HandleTable<K: HandleKind, T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
    _kind: PhantomData<fn() -> K>,
}

impl<K: HandleKind, T> HandleTable<K, T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            _kind: PhantomData,
        }
    }

    /// Register a host object and issue a handle for it
    pub fn register(&mut self, value: T) -> Result<Handle<K>> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            self.live += 1;
            return Ok(Handle::from_parts(index, slot.generation));
        }

        let index = u32::try_from(self.slots.len())
            .ok()
            .filter(|index| *index != u32::MAX)
            .ok_or_else(|| BridgeError::invalid(format!("{} handle table exhausted", K::LABEL)))?;
        self.slots.push(Slot {
            generation: 1,
            value: Some(value),
        });
        self.live += 1;
        Ok(Handle::from_parts(index, 1))
    }

    fn slot(&self, handle: Handle<K>) -> Option<&Slot<T>> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.value.is_some())
    }

    /// Resolve a handle to its live object
    pub fn resolve(&self, handle: Handle<K>) -> Option<&T> {
        self.slot(handle).and_then(|slot| slot.value.as_ref())
    }

    /// Resolve a handle to its live object, mutably
    pub fn resolve_mut(&mut self, handle: Handle<K>) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Whether the handle currently resolves
    pub fn contains(&self, handle: Handle<K>) -> bool {
        self.slot(handle).is_some()
    }

    /// Tear down the object behind a handle
    ///
    /// Every outstanding copy of the handle becomes unresolvable.
    pub fn unregister(&mut self, handle: Handle<K>) -> Option<T> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)?;
        let value = slot.value.take()?;
        self.live -= 1;
        if let Some(next) = slot.generation.checked_add(1) {
            slot.generation = next;
            self.free.push(handle.index);
        }
        Some(value)
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the table has no live objects
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate over live objects with their handles
    pub fn iter(&self) -> impl Iterator<Item = (Handle<K>, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value
                .as_ref()
                .map(|value| (Handle::from_parts(index as u32, slot.generation), value))
        })
    }
}

impl<K: HandleKind, T> Default for HandleTable<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
