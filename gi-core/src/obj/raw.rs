/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

use crate::obj::InterfaceRef;
use crate::registry::ClassInfo;
use crate::sys::RawPtr;

/// Non-null pointer to a foreign object instance.
///
/// Only an identity; all access goes through the [`ObjectInterface`][crate::obj::ObjectInterface] that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObjectPtr(NonNull<c_void>);

impl ObjectPtr {
    /// Returns `None` for null.
    pub fn new(ptr: RawPtr) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_ptr(self) -> RawPtr {
        self.0.as_ptr()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Untyped object handle: instance pointer, runtime class, and the foreign layer it belongs to.
///
/// This is what attribute operations receive; the typed [`Obj<C>`][crate::obj::Obj] wraps it.
#[derive(Clone)]
pub struct RawObject {
    ptr: ObjectPtr,
    class: &'static ClassInfo,
    interface: InterfaceRef,
}

impl RawObject {
    pub fn new(ptr: ObjectPtr, class: &'static ClassInfo, interface: InterfaceRef) -> Self {
        Self {
            ptr,
            class,
            interface,
        }
    }

    pub fn ptr(&self) -> ObjectPtr {
        self.ptr
    }

    pub fn class(&self) -> &'static ClassInfo {
        self.class
    }

    pub fn interface(&self) -> &InterfaceRef {
        &self.interface
    }
}

impl fmt::Debug for RawObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawObject")
            .field("ptr", &self.ptr)
            .field("class", &self.class.name())
            .finish()
    }
}
