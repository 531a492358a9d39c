/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::rc::Rc;

use crate::meta::error::ForeignError;
use crate::meta::{Value, ValueType};
use crate::obj::ObjectPtr;
use crate::registry::{ClassInfo, SignalInfo};
use crate::sys::{Allocator, HostAllocator, RawPtr};

/// Shared handle to the foreign layer. Object handles keep it alive.
pub type InterfaceRef = Rc<dyn ObjectInterface>;

/// Callback invoked on signal emission, with the emission arguments. The return value is the signal's return, if any.
pub type SignalHandler = Box<dyn FnMut(&[Value]) -> Option<Value>>;

/// Handle of a connected signal handler, as returned by the foreign signal subsystem.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct HandlerId(pub u64);

/// Construction token: one attribute value passed to bulk instantiation (the Rust side of a `GParameter`).
#[derive(Clone, PartialEq, Debug)]
pub struct ConstructParam {
    pub name: &'static str,
    pub value: Value,
    pub value_type: ValueType,
}

/// The foreign object system: property access, instantiation, signal connection and memory.
///
/// Implemented on top of the GObject C API in production and by call-recording fakes in tests. All methods are called
/// synchronously on the calling thread, in the order the protocol issues them.
pub trait ObjectInterface {
    /// Reads property `name`. `ty` is the declared type of the property.
    fn get_property(&self, obj: ObjectPtr, name: &str, ty: ValueType) -> Result<Value, ForeignError>;

    /// Writes property `name`. Ownership of any foreign memory referenced by `value` passes to the object.
    fn set_property(&self, obj: ObjectPtr, name: &str, value: Value) -> Result<(), ForeignError>;

    /// Instantiates `class` with all construction tokens at once (`g_object_new_with_properties`).
    fn new_object(
        &self,
        class: &'static ClassInfo,
        params: Vec<ConstructParam>,
    ) -> Result<ObjectPtr, ForeignError>;

    /// Connects `handler` to run before the default handler (`g_signal_connect`).
    fn connect(
        &self,
        instance: RawPtr,
        signal: &SignalInfo,
        handler: SignalHandler,
    ) -> Result<HandlerId, ForeignError>;

    /// Connects `handler` to run after the default handler (`g_signal_connect_after`).
    fn connect_after(
        &self,
        instance: RawPtr,
        signal: &SignalInfo,
        handler: SignalHandler,
    ) -> Result<HandlerId, ForeignError>;

    /// Allocator for struct and union instances.
    fn allocator(&self) -> &dyn Allocator {
        &HostAllocator
    }
}
