/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cell::Cell;
use std::rc::Rc;

use gi::meta::error::ForeignError;
use gi::meta::{Value, ValueType};
use gi::obj::{
    new_with, new_zeroed_in, ConstructParam, GiClass, HandlerId, InterfaceRef, ObjectInterface,
    ObjectPtr, SignalHandler, StructType,
};
use gi::registry::{ClassInfo, SignalInfo, TypeKind};
use gi::sys::{AllocError, AllocKind, Allocator, HostAllocator, ManagedPtr, RawPtr};
use itest::gen::*;
use proptest::prelude::*;

/// Foreign layer that only provides memory. Object operations fail.
#[derive(Default)]
struct StructsOnly {
    allocator: CountingAllocator,
}

impl StructsOnly {
    fn unsupported() -> ForeignError {
        ForeignError::new("itest", 0, "objects are not supported")
    }
}

impl ObjectInterface for StructsOnly {
    fn get_property(&self, _: ObjectPtr, _: &str, _: ValueType) -> Result<Value, ForeignError> {
        Err(Self::unsupported())
    }

    fn set_property(&self, _: ObjectPtr, _: &str, _: Value) -> Result<(), ForeignError> {
        Err(Self::unsupported())
    }

    fn new_object(
        &self,
        _: &'static ClassInfo,
        _: Vec<ConstructParam>,
    ) -> Result<ObjectPtr, ForeignError> {
        Err(Self::unsupported())
    }

    fn connect(&self, _: RawPtr, _: &SignalInfo, _: SignalHandler) -> Result<HandlerId, ForeignError> {
        Err(Self::unsupported())
    }

    fn connect_after(
        &self,
        _: RawPtr,
        _: &SignalInfo,
        _: SignalHandler,
    ) -> Result<HandlerId, ForeignError> {
        Err(Self::unsupported())
    }

    fn allocator(&self) -> &dyn Allocator {
        &self.allocator
    }
}

#[derive(Default)]
struct CountingAllocator {
    count: Cell<usize>,
    last: Cell<Option<(usize, AllocKind)>>,
}

impl Allocator for CountingAllocator {
    fn alloc_zeroed(&self, size: usize, kind: AllocKind) -> Result<ManagedPtr, AllocError> {
        self.count.set(self.count.get() + 1);
        self.last.set(Some((size, kind)));
        HostAllocator.alloc_zeroed(size, kind)
    }
}

fn interface() -> (Rc<StructsOnly>, InterfaceRef) {
    let structs = Rc::new(StructsOnly::default());
    let interface: InterfaceRef = structs.clone();
    (structs, interface)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[test]
fn zero_point_reads_zero() {
    let point = new_zero_point();

    assert_eq!(point_read_x(&point), 0);
    assert_eq!(point_read_y(&point), 0);
}

#[test]
fn point_writes_touch_own_bytes() {
    let mut point = new_zero_point();

    point_write_x(&mut point, 7);
    point_write_y(&mut point, -3);

    assert_eq!(point_read_x(&point), 7);
    assert_eq!(point_read_y(&point), -3);

    let bytes = point.managed().as_bytes();
    assert_eq!(&bytes[0..4], &7i32.to_ne_bytes());
    assert_eq!(&bytes[4..8], &(-3i32).to_ne_bytes());
}

#[test]
fn point_construction_allocates_once() {
    let (structs, interface) = interface();

    let point: Point = new_with(&interface, []).expect("plain struct construction");

    assert_eq!(structs.allocator.count.get(), 1);
    assert_eq!(structs.allocator.last.get(), Some((8, AllocKind::Plain)));
    assert_eq!(point.managed().kind(), AllocKind::Plain);
}

#[test]
fn boxed_rect_is_zeroed() {
    let (structs, interface) = interface();

    let rect: Rect = new_with(&interface, []).expect("boxed struct construction");

    assert_eq!(structs.allocator.count.get(), 1);
    assert_eq!(structs.allocator.last.get(), Some((32, AllocKind::Boxed)));
    assert_eq!(rect.managed().ref_count(), 1);

    assert_eq!(rect_read_x(&rect), 0.0);
    assert_eq!(rect_read_y(&rect), 0.0);
    assert_eq!(rect_read_name(&rect), None);
    assert!(!rect_read_filled(&rect));
}

#[test]
fn boxed_rect_clone_shares_memory() {
    let mut rect = new_zero_rect();
    let copy = rect.clone();

    rect_write_y(&mut rect, 2.5);

    assert_eq!(rect_read_y(&copy), 2.5);
    assert_eq!(copy.managed().ref_count(), 2);
}

#[test]
fn union_fields_overlap() {
    let mut number = new_zero_number();

    number_write_v_double(&mut number, 1.5);

    assert_eq!(number_read_v_double(&number), 1.5);
    assert_eq!(number_read_v_int64(&number), 1.5f64.to_bits() as i64);
    assert_eq!(Number::CLASS_INFO.kind(), TypeKind::Union);
}

#[test]
fn hooks_pointer_and_callback_fields() {
    unsafe extern "C" fn compare(a: RawPtr, b: RawPtr) -> i32 {
        (a as usize).cmp(&(b as usize)) as i32
    }

    let mut hooks = new_zero_hooks();
    assert!(hooks_read_user_data(&hooks).is_null());

    let data = Box::into_raw(Box::new(5_u64)).cast();
    hooks_write_user_data(&mut hooks, data);
    assert_eq!(hooks_read_user_data(&hooks), data);

    // SAFETY: zero-filled memory is a null function pointer.
    let size_allocate = unsafe { hooks_read_size_allocate(&hooks) };
    let compare_fn = unsafe { hooks_read_compare(&hooks) };
    assert!(size_allocate.is_none());
    assert!(compare_fn.is_none());

    // Callback types carry the C signature.
    let typed: HooksCompareFieldCallback = Some(compare);
    assert!(typed.is_some());

    // SAFETY: allocated above with Box::into_raw().
    drop(unsafe { Box::from_raw(data.cast::<u64>()) });
}

#[test]
fn opaque_handle_is_never_allocated() {
    let allocator = CountingAllocator::default();

    let result = new_zeroed_in::<Handle>(&allocator);

    assert!(matches!(result, Err(AllocError::ZeroSize)));
    assert_eq!(allocator.count.get(), 0);
    assert_eq!(Handle::SIZE, 0);

    let (structs, interface) = interface();
    let constructed = new_zeroed_in::<Handle>(interface.allocator());
    assert!(matches!(constructed, Err(AllocError::ZeroSize)));
    assert_eq!(structs.allocator.count.get(), 0);
}

#[test]
fn generated_class_info() {
    assert_eq!(Point::class_name().to_string(), "Point");
    assert_eq!(Point::CLASS_INFO.kind(), TypeKind::Struct);
    assert!(Point::CLASS_INFO.attributes().is_empty());
    assert!(Rect::CLASS_INFO.own_signals().is_empty());
    assert_eq!(Rect::ALLOC, AllocKind::Boxed);
    assert_eq!(Hooks::SIZE, 48);
}

proptest! {
    #[test]
    fn point_x_roundtrip_keeps_y(x in any::<i32>(), y in any::<i32>()) {
        let mut point = new_zero_point();
        point_write_y(&mut point, y);
        point_write_x(&mut point, x);

        prop_assert_eq!(point_read_x(&point), x);
        prop_assert_eq!(point_read_y(&point), y);
    }
}
