//! Property test strategies for boundary values
//!
//! Generators for the inputs the absence policies must absorb: handles the
//! host never issued, identifiers outside the enumeration and malformed URLs.

use pbridge_core::{PageUrl, PluginInstanceId, RawResourceId, ResourceId, ViewHandle, WidgetHandle};
use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

/// Any view handle, including forged and stale ones
pub fn arb_view_handle() -> impl Strategy<Value = ViewHandle> {
    any::<u64>().prop_map(ViewHandle::from_raw)
}

/// Any widget handle, including forged and stale ones
pub fn arb_widget_handle() -> impl Strategy<Value = WidgetHandle> {
    any::<u64>().prop_map(WidgetHandle::from_raw)
}

/// Raw resource identifiers outside the enumeration
pub fn arb_unknown_resource_id() -> impl Strategy<Value = RawResourceId> {
    let last = ResourceId::SubmitLabel.as_raw();
    prop_oneof![Just(0u32), (last + 1)..=u32::MAX].prop_map(RawResourceId)
}

/// Raw resource identifiers inside the enumeration
pub fn arb_known_resource_id() -> impl Strategy<Value = ResourceId> {
    prop::sample::select(ResourceId::ALL.to_vec())
}

/// URLs that fail the structural check
pub fn arb_malformed_url() -> impl Strategy<Value = PageUrl> {
    prop_oneof![
        Just(String::new()),
        // no scheme separator
        "[a-z0-9./]{1,24}",
        // scheme with nothing after it
        "[a-z]{1,6}:",
        // embedded whitespace
        "https://[a-z]{1,8} [a-z]{1,8}\\.test/",
        // scheme starting with a digit
        "[0-9][a-z]{0,5}://[a-z]{1,8}",
    ]
    .prop_map(PageUrl::new)
}

/// URLs that pass the structural check
pub fn arb_well_formed_url() -> impl Strategy<Value = PageUrl> {
    "(http|https)://[a-z]{1,10}\\.test/[a-z0-9]{0,8}".prop_map(PageUrl::new)
}

/// Plugin identities
pub fn arb_plugin() -> impl Strategy<Value = PluginInstanceId> {
    any::<u64>().prop_map(PluginInstanceId)
}
