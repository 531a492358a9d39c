/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod mock;

use std::cell::RefCell;
use std::rc::Rc;

use gi_core::meta::error::AttrError;
use gi_core::meta::{Capability, Value, ValueType};
use gi_core::obj::{construct_by_name, new_with, AttrExt, AttrOp, ConstructParam, ForNew, Obj, SignalExt};

use mock::classes::*;
use mock::{Call, MockInterface};

#[test]
fn construct_passes_all_params_at_once() {
    let mock = MockInterface::new();

    let obj = Obj::<Button>::new_with(
        &mock.as_interface(),
        [
            ButtonLabel.init("OK".to_string()),
            WidgetVisible.init(false),
            ObjectName.init_with(|| Ok(Some("ok".to_string()))),
        ],
    )
    .unwrap();

    assert_eq!(
        mock.calls(),
        vec![Call::New {
            class: "Button".into(),
            params: vec![
                ("label".into(), Value::String("OK".into())),
                ("visible".into(), Value::Bool(false)),
                ("name".into(), Value::String("ok".into())),
            ],
        }]
    );
    assert_eq!(obj.get(ButtonLabel).unwrap().as_deref(), Some("OK"));
    assert!(!obj.get(WidgetVisible).unwrap());
}

#[test]
fn construct_without_ops() {
    let mock = MockInterface::new();

    let obj = Obj::<Widget>::new(&mock.as_interface()).unwrap();

    assert_eq!(
        mock.calls(),
        vec![Call::New {
            class: "Widget".into(),
            params: vec![],
        }]
    );
    assert_eq!(format!("{obj:?}"), format!("Obj<Widget>({:?})", obj.ptr()));
}

#[test]
fn construct_connects_signals_after_instantiation() {
    let mock = MockInterface::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let clicked_log = log.clone();
    let destroy_log = log.clone();
    let obj: Obj<Button> = new_with(
        &mock.as_interface(),
        [
            ButtonClicked.connect(move |_args| {
                clicked_log.borrow_mut().push("clicked");
                None
            }),
            ButtonLabel.init("Apply".to_string()),
            WidgetDestroy.connect_after(move |_args| {
                destroy_log.borrow_mut().push("destroy");
                None
            }),
        ],
    )
    .unwrap();

    // One instantiation with the single attribute, then the connections in declaration order.
    assert_eq!(
        mock.calls(),
        vec![
            Call::New {
                class: "Button".into(),
                params: vec![("label".into(), Value::String("Apply".into()))],
            },
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

    let instance = obj.ptr().as_ptr();
    mock.emit(instance, "destroy", &[]);
    mock.emit(instance, "clicked", &[Value::I32(1)]);
    assert_eq!(*log.borrow(), vec!["destroy", "clicked"]);
}

#[test]
fn construct_by_name_signal() {
    let mock = MockInterface::new();

    let op = AttrOp::<Button, ForNew>::connect_by_name("destroy", |_| Some(Value::Bool(true))).unwrap();
    let obj = Obj::<Button>::new_with(&mock.as_interface(), [op]).unwrap();

    assert_eq!(mock.connection_count(), 1);
    assert_eq!(
        mock.emit(obj.ptr().as_ptr(), "destroy", &[]),
        Some(Value::Bool(true))
    );
}

#[test]
fn construct_rejects_non_constructible_attribute() {
    let mock = MockInterface::new();

    let op = AttrOp::<Button, ForNew>::init_by_name("tooltip", "hint").unwrap();
    let err = Obj::<Button>::new_with(&mock.as_interface(), [op]).unwrap_err();

    let cap = err.as_capability().expect("capability error");
    assert_eq!(cap.capability(), Capability::Construct);
    assert_eq!(cap.origin().as_str(), "Widget");
    assert!(mock.calls().is_empty(), "nothing instantiated");
}

#[test]
fn construct_failure_skips_connections() {
    let mock = MockInterface::new();
    mock.fail_construction();

    let err = Obj::<Button>::new_with(
        &mock.as_interface(),
        [
            ButtonLabel.init("OK".to_string()),
            ButtonClicked.connect(|_| None),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "construction of `Button`: mock-error-quark (2): construction refused"
    );
    assert_eq!(mock.connection_count(), 0);
}

#[test]
fn construct_with_transfer() {
    let mock = MockInterface::new();

    let obj = Obj::<Button>::new_with(
        &mock.as_interface(),
        [ButtonUserData.init_transfer(Some("owned".to_string()))],
    )
    .unwrap();

    let ptr = obj.get(ButtonUserData).unwrap().expect("non-null");

    // SAFETY: allocated by transfer_cstring; the mock never frees it.
    unsafe {
        assert_eq!(
            gi_core::sys::cstr_to_string(ptr as *const std::ffi::c_char).as_deref(),
            Some("owned")
        );
        gi_core::sys::free_cstr(ptr.cast::<std::ffi::c_char>());
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Construction tokens

#[test]
fn construct_token_from_handle() {
    let param = ButtonLabel.construct("Cancel".to_string()).unwrap();

    assert_eq!(
        param,
        ConstructParam {
            name: "label",
            value: Value::String("Cancel".into()),
            value_type: ValueType::String,
        }
    );
}

#[test]
fn construct_token_by_name() {
    let param = construct_by_name::<Button>("visible", true).unwrap();
    assert_eq!(param.name, "visible");
    assert_eq!(param.value, Value::Bool(true));

    let err = construct_by_name::<Button>("width", 10).unwrap_err();
    assert!(err.is_capability());

    let err = construct_by_name::<Button>("visible", "yes").unwrap_err();
    assert!(matches!(err, AttrError::Convert { label: "visible", .. }));
}
