//! Absence policies hold for arbitrary unresolvable input
//!
//! Every bridge call is total: forged handles, identifiers outside the
//! enumeration and malformed URLs all yield the documented default.

use pbridge_core::effects::{CookieEffects, KeyGeneratorEffects, PluginEffects, ResourceEffects};
use pbridge_core::{LocalizedName, PageUrl};
use pbridge_testkit::strategies::*;
use pbridge_testkit::{
    assert_not_available, assert_view_defaults, attach_degrading, standard_memory_host,
    standard_stub,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_unknown_views_yield_defaults_on_memory_host(view in arb_view_handle()) {
        let (host, fixture) = standard_memory_host();
        prop_assume!(view != fixture.view);
        let bridge = attach_degrading(host);
        assert_view_defaults(&bridge, view);
    }

    #[test]
    fn prop_unknown_views_yield_defaults_on_stub(view in arb_view_handle()) {
        let (stub, fixture) = standard_stub();
        prop_assume!(view != fixture.view);
        let bridge = attach_degrading(stub);
        assert_view_defaults(&bridge, view);
    }

    #[test]
    fn prop_unknown_widgets_yield_no_object(widget in arb_widget_handle()) {
        let (host, fixture) = standard_memory_host();
        prop_assume!(widget != fixture.widget);
        let bridge = attach_degrading(host);
        prop_assert!(bridge.plugin_scriptable_object(widget).is_none());
    }

    #[test]
    fn prop_unknown_resource_ids_are_not_available(id in arb_unknown_resource_id()) {
        let (stub, _) = standard_stub();
        let bridge = attach_degrading(stub.clone());
        stub.clear_calls();

        assert_not_available(&bridge, id);
        // answered without crossing the boundary
        prop_assert!(stub.calls().is_empty());
    }

    #[test]
    fn prop_malformed_urls_are_absorbed(url in arb_malformed_url()) {
        let (host, _) = standard_memory_host();
        let bridge = attach_degrading(host);

        bridge.set_cookies(&url, "sid=1");
        prop_assert_eq!(bridge.cookies(&url), "");
        prop_assert_eq!(bridge.signed_public_key_and_challenge(0, "c", &url), "");
    }

    #[test]
    fn prop_unknown_plugins_are_denied_popups(plugin in arb_plugin()) {
        let (host, fixture) = standard_memory_host();
        prop_assume!(plugin != fixture.plugin);
        let bridge = attach_degrading(host);
        prop_assert!(!bridge.popups_allowed(plugin));
    }

    #[test]
    fn prop_cookies_round_trip_for_well_formed_urls(url in arb_well_formed_url()) {
        let (host, _) = standard_memory_host();
        let bridge = attach_degrading(host);
        bridge.set_cookies(&url, "sid=1");
        prop_assert_eq!(bridge.cookies(&url), "sid=1");
    }
}

#[test]
fn test_every_enumerated_identifier_answers() {
    let (host, _) = standard_memory_host();
    let bridge = attach_degrading(host);
    for id in pbridge_core::ResourceId::ALL {
        assert!(bridge.global_localized_name(id.into()).is_available(), "{id}");
    }
}

#[test]
fn test_empty_cookie_jar_reads_empty() {
    let (stub, _) = standard_stub();
    let bridge = attach_degrading(stub);
    assert_eq!(bridge.cookies(&PageUrl::new("https://never.test/")), "");
    assert_eq!(
        bridge.global_localized_name(pbridge_core::ResourceId::SubmitLabel.into()),
        LocalizedName::NotAvailable
    );
}
