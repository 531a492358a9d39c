/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod mock;

use std::ffi::c_char;
use std::rc::Rc;

use gi_core::meta::error::AttrError;
use gi_core::meta::{Capability, Value};
use gi_core::obj::{AttrExt, AttrOp, ForSet, Obj, SignalExt};
use gi_core::sys::{self, RawPtr};
use proptest::prelude::*;

use mock::classes::*;
use mock::{Call, MockInterface};

fn button(mock: &Rc<MockInterface>) -> Obj<Button> {
    Obj::from_foreign(mock.spawn(), mock.as_interface())
}

fn set(label: &str, value: Value) -> Call {
    Call::Set(label.to_string(), value)
}

fn get(label: &str) -> Call {
    Call::Get(label.to_string())
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Get and set

#[test]
fn attribute_set_get_roundtrip() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([ButtonLabel.assign("OK".to_string())]).unwrap();
    let label = obj.get(ButtonLabel).unwrap();

    assert_eq!(label.as_deref(), Some("OK"));
    assert_eq!(
        mock.calls(),
        vec![set("label", Value::String("OK".into())), get("label")]
    );
}

#[test]
fn attribute_inherited_from_ancestor_and_interface() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([
        ObjectName.assign("ok-button".to_string()),
        WidgetVisible.assign(true),
        ActionableActionName.assign("app.quit".to_string()),
    ])
    .unwrap();

    assert_eq!(obj.get(ObjectName).unwrap().as_deref(), Some("ok-button"));
    assert!(obj.get(WidgetVisible).unwrap());
    assert_eq!(
        obj.get(ActionableActionName).unwrap().as_deref(),
        Some("app.quit")
    );
}

#[test]
fn attribute_unset_reads_as_none() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    assert_eq!(obj.get(ButtonLabel).unwrap(), None);
}

#[test]
fn attribute_get_wrong_foreign_type() {
    let mock = MockInterface::new();
    let obj = button(&mock);
    mock.store(obj.ptr(), "margin", Value::String("wide".into()));

    let err = obj.get(WidgetMargin).unwrap_err();
    assert_eq!(
        err.to_string(),
        "attribute `margin` of `Widget`: expected i32, got string: String(\"wide\")"
    );

    // Non-nullable attribute that was never written.
    let err = obj.get(WidgetVisible).unwrap_err();
    assert!(matches!(err, AttrError::Convert { label: "visible", ref source, .. } if source.is_unexpected_null()));
}

#[test]
fn attribute_set_rejects_wrong_value_type() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    let err = obj.set_by_name("margin", "wide").unwrap_err();

    assert!(matches!(err, AttrError::Convert { label: "margin", .. }));
    assert!(mock.calls().is_empty(), "no foreign call on type mismatch");
}

#[test]
fn update_with_identity_leaves_value_unchanged() {
    let mock = MockInterface::new();
    let obj = button(&mock);
    obj.set([WidgetMargin.assign(12)]).unwrap();
    mock.clear_calls();

    obj.set([WidgetMargin.update(|current| current)]).unwrap();

    assert_eq!(obj.get(WidgetMargin).unwrap(), 12);
    assert_eq!(
        mock.calls(),
        vec![get("margin"), set("margin", Value::I32(12)), get("margin")]
    );
}

#[test]
fn update_sees_current_value() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([
        WidgetMargin.assign(4),
        WidgetMargin.update(|m| m * 2),
        WidgetMargin.update_with(|m| move || Ok(m + 1)),
    ])
    .unwrap();

    assert_eq!(obj.get(WidgetMargin).unwrap(), 9);
}

#[test]
fn assign_with_runs_producer_in_order() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([
        ButtonLabel.assign("first".to_string()),
        ButtonLabel.assign_with(|| Ok(Some("second".to_string()))),
    ])
    .unwrap();

    assert_eq!(obj.get(ButtonLabel).unwrap().as_deref(), Some("second"));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Capabilities

#[test]
fn capability_rejected_without_foreign_call() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    let err = obj.set_by_name("width", 100).unwrap_err();
    let cap = err.as_capability().expect("capability error");

    assert_eq!(cap.capability(), Capability::Set);
    assert_eq!(cap.label(), "width");
    assert_eq!(cap.origin().as_str(), "Widget");
    assert_eq!(cap.accessed_through().as_str(), "Button");
    assert_eq!(
        err.to_string(),
        "attribute `width` of `Widget` (accessed through `Button`) does not support `set`"
    );
    assert!(mock.calls().is_empty());
}

#[test]
fn capability_write_only_cannot_be_read() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([ButtonSecret.assign(42)]).unwrap();
    let err = obj.get_by_name("secret").unwrap_err();

    assert_eq!(
        err.to_string(),
        "attribute `secret` of `Button` does not support `get`"
    );
    assert_eq!(mock.calls(), vec![set("secret", Value::I32(42))]);
}

#[test]
fn capability_clear_missing() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    let err = obj.clear_by_name("visible").unwrap_err();

    assert_eq!(
        err.as_capability().map(|c| c.capability()),
        Some(Capability::Clear)
    );
    assert!(mock.calls().is_empty());
}

#[test]
fn capability_checked_when_batch_reaches_operation() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    let ops = [
        WidgetMargin.assign(1),
        AttrOp::assign_by_name("width", 5).unwrap(),
        WidgetMargin.assign(2),
    ];
    let err = obj.set(ops).unwrap_err();

    assert!(err.is_capability());
    assert_eq!(mock.calls(), vec![set("margin", Value::I32(1))]);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Batches

#[test]
fn batch_aborts_at_first_failure() {
    let mock = MockInterface::new();
    let obj = button(&mock);
    mock.fail_on_set("tooltip");

    let err = obj
        .set([
            ButtonLabel.assign("applied".to_string()),
            WidgetTooltip.assign("refused".to_string()),
            WidgetVisible.assign(true),
        ])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "attribute `tooltip` of `Widget`: mock-error-quark (1): cannot set `tooltip`"
    );

    // First operation stays applied, third is never attempted.
    assert_eq!(
        mock.stored(obj.ptr(), "label"),
        Some(Value::String("applied".into()))
    );
    assert!(!mock.calls().contains(&set("visible", Value::Bool(true))));
}

#[test]
fn batch_aborts_on_failing_action() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    let err = obj
        .set([
            WidgetMargin.assign(1),
            WidgetMargin.assign_with(|| Err(AttrError::action("no margin today"))),
            WidgetMargin.assign(3),
        ])
        .unwrap_err();

    assert_eq!(err.to_string(), "action failed: no margin today");
    assert_eq!(obj.get(WidgetMargin).unwrap(), 1);
}

#[test]
fn batch_empty_is_noop() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set(Vec::<AttrOp<Button>>::new()).unwrap();
    assert!(mock.calls().is_empty());
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Clear and null representation

#[test]
fn clear_then_get_reads_none() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([ButtonLabel.assign("gone soon".to_string())]).unwrap();
    obj.clear(ButtonLabel).unwrap();

    assert_eq!(obj.get(ButtonLabel).unwrap(), None);
    assert!(mock.calls().contains(&set("label", Value::Nil)));
}

#[test]
fn clear_list_reads_empty_list() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([ButtonItems.assign(vec!["a".to_string(), "b".to_string()])])
        .unwrap();
    assert_eq!(obj.get(ButtonItems).unwrap(), vec!["a", "b"]);

    obj.clear(ButtonItems).unwrap();
    assert_eq!(obj.get(ButtonItems).unwrap(), Vec::<String>::new());
    assert_eq!(obj.get_by_name("items").unwrap(), Value::List(vec![]));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// By-name access

#[test]
fn by_name_accepts_underscores() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set_by_name("action_name", "win.close").unwrap();

    assert_eq!(
        obj.get_by_name("action-name").unwrap(),
        Value::String("win.close".into())
    );
}

#[test]
fn by_name_unknown_label() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    let err = obj.get_by_name("colour").unwrap_err();
    assert_eq!(err.to_string(), "class `Button` has no attribute `colour`");

    let err = AttrOp::<Widget>::assign_by_name("label", "x").unwrap_err();
    assert_eq!(err.to_string(), "class `Widget` has no attribute `label`");
}

#[test]
fn by_name_uses_runtime_class_after_upcast() {
    let mock = MockInterface::new();
    let obj: Obj<Widget> = button(&mock).upcast();

    obj.set_by_name("label", "still a button").unwrap();
    assert_eq!(
        obj.get_by_name("label").unwrap(),
        Value::String("still a button".into())
    );
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Transfer

fn read_cstring(value: Option<RawPtr>) -> Option<String> {
    let ptr = value?;
    // SAFETY: the mock stores what transfer_cstring allocated.
    unsafe { sys::cstr_to_string(ptr as *const c_char) }
}

fn free_cstring(value: Option<RawPtr>) {
    if let Some(ptr) = value {
        // SAFETY: allocated by transfer_cstring, not freed by the mock.
        unsafe { sys::free_cstr(ptr.cast::<c_char>()) }
    }
}

#[test]
fn transfer_assign_stores_foreign_string() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([ButtonUserData.assign_transfer(Some("payload".to_string()))])
        .unwrap();

    let stored = obj.get(ButtonUserData).unwrap();
    assert!(stored.is_some());
    assert_eq!(read_cstring(stored).as_deref(), Some("payload"));

    free_cstring(stored);
}

#[test]
fn transfer_none_stays_null() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([ButtonUserData.assign_transfer(None::<String>)]).unwrap();

    assert_eq!(obj.get(ButtonUserData).unwrap(), None);
    assert_eq!(mock.calls()[0], set("user-data", Value::Nil));
}

#[test]
fn transfer_allocate_then_assign() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    let transferred = ButtonUserData
        .allocate_for_transfer(Some("later".to_string()))
        .unwrap();
    assert!(matches!(transferred.value(), Value::Pointer(_)));
    assert!(mock.calls().is_empty(), "allocation does not touch the object");

    obj.set([ButtonUserData.assign_transferred(transferred)])
        .unwrap();

    let stored = obj.get(ButtonUserData).unwrap();
    assert_eq!(read_cstring(stored).as_deref(), Some("later"));

    free_cstring(stored);
}

#[test]
fn transfer_identity_for_plain_attributes() {
    let mock = MockInterface::new();
    let obj = button(&mock);

    obj.set([WidgetMargin.assign_transfer(7)]).unwrap();
    assert_eq!(obj.get(WidgetMargin).unwrap(), 7);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Signals on live objects

#[test]
fn signal_connect_in_batch() {
    let mock = MockInterface::new();
    let obj = button(&mock);
    let clicks = Rc::new(std::cell::Cell::new(0));

    let counter = clicks.clone();
    obj.set([
        ButtonClicked.connect(move |_args| {
            counter.set(counter.get() + 1);
            None
        }),
        WidgetDestroy.connect_after(|_args| None),
    ])
    .unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            Call::Connect {
                signal: "clicked".into(),
                after: false
            },
            Call::Connect {
                signal: "destroy".into(),
                after: true
            },
        ]
    );

    mock.emit(obj.ptr().as_ptr(), "clicked", &[]);
    mock.emit(obj.ptr().as_ptr(), "clicked", &[]);
    assert_eq!(clicks.get(), 2);
}

#[test]
fn signal_unknown_name() {
    let err = AttrOp::<Button, ForSet>::connect_by_name("pressed", |_| None).unwrap_err();
    assert_eq!(err.to_string(), "class `Button` has no signal `pressed`");

    // Inherited signals resolve through the ancestor chain.
    assert!(AttrOp::<Button, ForSet>::connect_after_by_name("destroy", |_| None).is_ok());
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn margin_roundtrips_any_value(margin: i32) {
        let mock = MockInterface::new();
        let obj = button(&mock);

        obj.set([WidgetMargin.assign(margin)]).unwrap();
        prop_assert_eq!(obj.get(WidgetMargin).unwrap(), margin);
    }

    // With a failing write at position `fail_at`, exactly the writes before it are applied.
    #[test]
    fn batch_applies_strict_prefix(len in 1usize..8, fail_at in 0usize..8) {
        let fail_at = fail_at % len;
        let mock = MockInterface::new();
        let obj = button(&mock);
        mock.fail_on_set("tooltip");

        let ops = (0..len).map(|i| {
            if i == fail_at {
                WidgetTooltip.assign(format!("op {i}"))
            } else {
                WidgetMargin.assign(i as i32)
            }
        });
        prop_assert!(obj.set(ops).is_err());

        let sets = mock
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Set(..)))
            .count();
        prop_assert_eq!(sets, fail_at + 1);

        let expected = if fail_at == 0 { Value::Nil } else { Value::I32(fail_at as i32 - 1) };
        prop_assert_eq!(mock.stored(obj.ptr(), "margin").unwrap_or_default(), expected);
    }
}
