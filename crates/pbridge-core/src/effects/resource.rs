//! Localized resource effect interface

use crate::resource::{LocalizedName, RawResourceId};

/// Localized string lookup
pub trait ResourceEffects: Send + Sync {
    /// Localized string for a resource identifier
    ///
    /// Identifiers outside the enumeration, and valid identifiers the host has
    /// no localization for, yield [`LocalizedName::NotAvailable`].
    fn global_localized_name(&self, id: RawResourceId) -> LocalizedName;
}
