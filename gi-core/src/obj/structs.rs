/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Struct and union instances backed by [`ManagedPtr`], and the field accessors used by generated code.

use std::mem::size_of;

use crate::meta::error::AttrError;
use crate::obj::access;
use crate::obj::attr_op::OpKind;
use crate::obj::{AttrOp, ForNew, GiClass, InterfaceRef};
use crate::sys::{self, AllocError, AllocKind, Allocator, FfiPeek, HostAllocator, ManagedPtr};

/// Struct or union whose instances are blocks of foreign memory.
///
/// Implemented by generated code. Field offsets used with [`read_field()`] and [`write_field()`] come from introspection
/// data and are trusted as they are.
pub trait StructType: GiClass + Sized {
    /// Size in bytes. Zero for opaque types, which cannot be allocated from Rust.
    const SIZE: usize;

    /// Whether instances are GLib boxed (reference-counted) or plain allocations.
    const ALLOC: AllocKind;

    fn from_managed(managed: ManagedPtr) -> Self;

    fn managed(&self) -> &ManagedPtr;
}

/// ⚠️ Allocates a zero-filled instance with the C allocator.
///
/// # Panics
/// If `S` is zero-sized, or allocation fails.
pub fn new_zeroed<S: StructType>() -> S {
    new_zeroed_in::<S>(&HostAllocator)
        .unwrap_or_else(|err| panic!("new_zeroed::<{}>(): {err}", S::class_name()))
}

/// Allocates a zero-filled instance with `allocator`. Called exactly once per instance; zero-sized types never reach the
/// allocator.
pub fn new_zeroed_in<S: StructType>(allocator: &dyn Allocator) -> Result<S, AllocError> {
    if S::SIZE == 0 {
        return Err(AllocError::ZeroSize);
    }

    crate::out!("  new_zeroed {} ({} bytes, {:?})", S::class_name(), S::SIZE, S::ALLOC);
    let managed = allocator.alloc_zeroed(S::SIZE, S::ALLOC)?;
    Ok(S::from_managed(managed))
}

/// Construction protocol for structs: allocate zeroed memory through the interface's allocator, then apply signal
/// operations in order. Attribute operations are ignored, since structs have no attributes.
pub fn construct_zeroed<S: StructType>(
    interface: &InterfaceRef,
    ops: Vec<AttrOp<S, ForNew>>,
) -> Result<S, AttrError> {
    let instance = new_zeroed_in::<S>(interface.allocator())?;

    for op in ops {
        match op.into_kind() {
            OpKind::Connect {
                signal,
                handler,
                after,
            } => {
                instance.managed().with_ptr(|ptr| {
                    access::connect(interface, ptr, signal, handler, after)
                })?;
            }
            other => {
                crate::out!("  construct_zeroed {}: ignoring {other:?}", S::class_name());
            }
        }
    }

    Ok(instance)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Field access

/// Reads the field of type `T` at byte `offset`. Touches exactly `size_of::<T::Repr>()` bytes.
pub fn read_field<S: StructType, T: FfiPeek>(instance: &S, offset: usize) -> T {
    let managed = instance.managed();
    check_bounds::<S>(managed, offset, size_of::<T::Repr>());

    // SAFETY: offset and size lie within the block, see check_bounds(); the view ends with the closure.
    managed.with_ptr(|base| unsafe { sys::peek::<T>(base, offset) })
}

/// Writes the field of type `T` at byte `offset`.
pub fn write_field<S: StructType, T: FfiPeek>(instance: &mut S, offset: usize, value: T) {
    let managed = instance.managed();
    check_bounds::<S>(managed, offset, size_of::<T::Repr>());

    // SAFETY: as in read_field(); `&mut S` excludes concurrent views from Rust.
    managed.with_ptr(|base| unsafe { sys::poke::<T>(base, offset, value) })
}

/// Reads a `char*` field as a Rust string, without taking ownership of the C string.
pub fn read_string_field<S: StructType>(instance: &S, offset: usize) -> Option<String> {
    let ptr: *const std::ffi::c_char = read_field(instance, offset);

    // SAFETY: a non-null string field points to a NUL-terminated C string owned by the struct.
    unsafe { sys::cstr_to_string(ptr) }
}

/// Reads a function-pointer field. `F` is the generated callback type, normally `Option<unsafe extern "C" fn(..)>`.
///
/// # Safety
/// The field at `offset` must hold a valid `F`. For nullable function pointers, this means null or a function with the
/// signature described by `F`.
pub unsafe fn read_callback_field<S: StructType, F: Copy>(instance: &S, offset: usize) -> F {
    let managed = instance.managed();
    check_bounds::<S>(managed, offset, size_of::<F>());

    managed.with_ptr(|base| sys::peek_copy::<F>(base, offset))
}

fn check_bounds<S: StructType>(managed: &ManagedPtr, offset: usize, len: usize) {
    assert!(
        offset.checked_add(len).is_some_and(|end| end <= managed.size()),
        "field at offset {offset} (+{len} bytes) exceeds {} of {} bytes",
        S::class_name(),
        managed.size()
    );
}
