//! Scriptable object ownership across the boundary

use pbridge_core::effects::PluginEffects;
use pbridge_core::{OwnedScriptable, PluginInstanceId, ScriptableObjectId};
use pbridge_testkit::{attach_degrading, standard_memory_host, standard_stub};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[test]
fn test_each_lookup_transfers_one_reference() {
    let (host, fixture) = standard_memory_host();
    let bridge = attach_degrading(host.clone());

    let first = bridge.plugin_scriptable_object(fixture.widget).unwrap();
    let second = bridge.plugin_scriptable_object(fixture.widget).unwrap();
    assert_eq!(first.id(), fixture.object);
    assert_eq!(second.id(), fixture.object);
    assert_eq!(host.outstanding_scriptable_refs(fixture.object), 2);

    first.release();
    assert_eq!(host.outstanding_scriptable_refs(fixture.object), 1);
    drop(second);
    assert_eq!(host.outstanding_scriptable_refs(fixture.object), 0);
}

#[test]
fn test_widget_without_object_yields_none_repeatedly() {
    let (host, _) = standard_memory_host();
    let widget = host.add_widget(PluginInstanceId(9), None).unwrap();
    let bridge = attach_degrading(host);
    for _ in 0..5 {
        assert!(bridge.plugin_scriptable_object(widget).is_none());
    }
}

#[test]
fn test_raw_reference_survives_until_reclaimed() {
    let (stub, fixture) = standard_stub();
    let bridge = attach_degrading(stub.clone());

    let raw = bridge.plugin_scriptable_object(fixture.widget).unwrap().into_raw();
    assert!(stub.released().is_empty());

    let owned = OwnedScriptable::from_raw(raw);
    drop(owned);
    assert_eq!(stub.released(), vec![fixture.object]);
}

#[test]
fn test_torn_down_widget_lookup_returns_promptly() {
    let (stub, fixture) = standard_stub();
    stub.forget_widget(fixture.widget);
    let bridge = attach_degrading(stub);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let lookups: Vec<Option<ScriptableObjectId>> = (0..100)
            .map(|_| {
                bridge
                    .plugin_scriptable_object(fixture.widget)
                    .map(|owned| owned.id())
            })
            .collect();
        let _ = tx.send(lookups);
    });

    let lookups = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("lookups on a torn-down widget must not block");
    assert!(lookups.iter().all(Option::is_none));
}
