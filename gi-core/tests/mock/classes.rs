/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Small widget hierarchy and a few structs, shaped like real introspected types.
//!
//! Object <- Widget <- Button, with Button implementing the Actionable interface.

use gi_core::meta::{ListKind, ValueType};
use gi_core::obj::{construct_zeroed, AttrOp, Construct, ForNew, GiClass, InterfaceRef, Signal, StructType};
use gi_core::registry::{ClassInfo, TypeKind};
use gi_core::sys::{AllocKind, ManagedPtr, RawPtr};
use gi_core::{attributes, class, signals};

class! {
    pub interface Actionable {
        attributes: [ActionableActionName],
    }
}

class! {
    pub class Object {
        attributes: [ObjectName],
    }
}

class! {
    pub class Widget: Object {
        attributes: [WidgetTooltip, WidgetVisible, WidgetWidth, WidgetMargin],
        signals: [WidgetDestroy],
    }
}

class! {
    pub class Button: Widget, Object implements Actionable {
        attributes: [ButtonLabel, ButtonItems, ButtonUserData, ButtonSecret],
        signals: [ButtonClicked],
    }
}

attributes! {
    impl Actionable {
        pub ActionableActionName {
            label: "action-name",
            value: Option<String>,
            value_type: ValueType::String,
            caps: [get, set],
        }
    }
}

attributes! {
    impl Object {
        pub ObjectName {
            label: "name",
            value: Option<String>,
            value_type: ValueType::String,
            caps: [get, set, construct, clear],
        }
    }
}

attributes! {
    impl Widget {
        pub WidgetTooltip {
            label: "tooltip",
            value: Option<String>,
            value_type: ValueType::String,
            caps: [get, set, clear],
        }

        pub WidgetVisible {
            label: "visible",
            value: bool,
            value_type: ValueType::Bool,
            caps: [get, set, construct],
        }

        /// Read-only.
        pub WidgetWidth {
            label: "width",
            value: i32,
            value_type: ValueType::I32,
            caps: [get],
        }

        pub WidgetMargin {
            label: "margin",
            value: i32,
            value_type: ValueType::I32,
            caps: [get, set],
        }
    }
}

attributes! {
    impl Button {
        pub ButtonLabel {
            label: "label",
            value: Option<String>,
            value_type: ValueType::String,
            caps: [get, set, construct, clear],
        }

        pub ButtonItems {
            label: "items",
            value: Vec<String>,
            value_type: ValueType::List(ListKind::List, &ValueType::String),
            caps: [get, set, clear],
            null: EmptyList,
        }

        /// Takes ownership of a C string.
        pub ButtonUserData {
            label: "user-data",
            value: Option<RawPtr>,
            value_type: ValueType::Pointer,
            caps: [get, set, construct],
            transfer: gi_core::private::transfer_cstring => Option<String>,
        }

        /// Write-only.
        pub ButtonSecret {
            label: "secret",
            value: i32,
            value_type: ValueType::I32,
            caps: [set],
        }
    }
}

signals! {
    impl Widget {
        pub WidgetDestroy: "destroy";
    }
}

signals! {
    impl Button {
        pub ButtonClicked: "clicked";
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Structs, written the way gi-codegen emits them.

/// `struct Point { int x; int y; }`
pub struct Point {
    managed: ManagedPtr,
}

impl GiClass for Point {
    const CLASS_INFO: &'static ClassInfo = &ClassInfo::new("Point", TypeKind::Struct)
        .with_signals(&[<PointChanged as Signal>::INFO]);
}

impl StructType for Point {
    const SIZE: usize = 8;
    const ALLOC: AllocKind = AllocKind::Plain;

    fn from_managed(managed: ManagedPtr) -> Self {
        Self { managed }
    }

    fn managed(&self) -> &ManagedPtr {
        &self.managed
    }
}

impl Construct for Point {
    type Class = Point;

    fn construct_with(
        interface: &InterfaceRef,
        ops: Vec<AttrOp<Self, ForNew>>,
    ) -> Result<Self, gi_core::meta::error::AttrError> {
        construct_zeroed(interface, ops)
    }
}

signals! {
    impl Point {
        pub PointChanged: "changed";
    }
}

pub fn point_read_x(instance: &Point) -> i32 {
    gi_core::obj::read_field(instance, 0)
}

pub fn point_write_x(instance: &mut Point, value: i32) {
    gi_core::obj::write_field(instance, 0, value)
}

pub fn point_read_y(instance: &Point) -> i32 {
    gi_core::obj::read_field(instance, 4)
}

pub fn point_write_y(instance: &mut Point, value: i32) {
    gi_core::obj::write_field(instance, 4, value)
}

/// Boxed `struct Rect { double x; double y; char *name; gboolean filled; }`, 32 bytes on 64-bit targets.
pub struct Rect {
    managed: ManagedPtr,
}

impl GiClass for Rect {
    const CLASS_INFO: &'static ClassInfo = &ClassInfo::new("Rect", TypeKind::Struct);
}

impl StructType for Rect {
    const SIZE: usize = 32;
    const ALLOC: AllocKind = AllocKind::Boxed;

    fn from_managed(managed: ManagedPtr) -> Self {
        Self { managed }
    }

    fn managed(&self) -> &ManagedPtr {
        &self.managed
    }
}

impl Construct for Rect {
    type Class = Rect;

    fn construct_with(
        interface: &InterfaceRef,
        ops: Vec<AttrOp<Self, ForNew>>,
    ) -> Result<Self, gi_core::meta::error::AttrError> {
        construct_zeroed(interface, ops)
    }
}

/// Opaque struct; size 0.
pub struct Opaque {
    managed: ManagedPtr,
}

impl GiClass for Opaque {
    const CLASS_INFO: &'static ClassInfo = &ClassInfo::new("Opaque", TypeKind::Struct);
}

impl StructType for Opaque {
    const SIZE: usize = 0;
    const ALLOC: AllocKind = AllocKind::Plain;

    fn from_managed(managed: ManagedPtr) -> Self {
        Self { managed }
    }

    fn managed(&self) -> &ManagedPtr {
        &self.managed
    }
}

impl Construct for Opaque {
    type Class = Opaque;

    fn construct_with(
        interface: &InterfaceRef,
        ops: Vec<AttrOp<Self, ForNew>>,
    ) -> Result<Self, gi_core::meta::error::AttrError> {
        construct_zeroed(interface, ops)
    }
}
