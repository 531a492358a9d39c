/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use crate::meta::error::AttrError;
use crate::meta::{ToValue, Value};
use crate::obj::access::{self, resolve_attribute_in, ConstructStep};
use crate::obj::{
    AttrOp, Clearable, Construct, ForNew, GiClass, Inherits, InterfaceRef, ObjectPtr, RawObject,
    Readable,
};

/// Handle to a foreign object instance of class `C` (or a subclass).
///
/// Cloning the handle does not clone the object. Attribute operations take `&self`, since foreign objects are shared and
/// mutate through their own API.
pub struct Obj<C: GiClass> {
    raw: RawObject,
    _class: PhantomData<fn() -> C>,
}

impl<C: GiClass> Obj<C> {
    /// Wraps an instance that was created by `interface`.
    pub fn from_foreign(ptr: ObjectPtr, interface: InterfaceRef) -> Self {
        Self {
            raw: RawObject::new(ptr, C::CLASS_INFO, interface),
            _class: PhantomData,
        }
    }

    /// Instantiates `C` through the foreign bulk constructor, see [`Construct`].
    pub fn new_with(
        interface: &InterfaceRef,
        ops: impl IntoIterator<Item = AttrOp<C, ForNew>>,
    ) -> Result<Self, AttrError> {
        Self::construct_with(interface, ops.into_iter().collect())
    }

    /// Instantiates `C` with default attribute values.
    pub fn new(interface: &InterfaceRef) -> Result<Self, AttrError> {
        Self::new_with(interface, [])
    }

    /// Reads an attribute.
    pub fn get<A>(&self, _attr: A) -> Result<A::Value, AttrError>
    where
        A: Readable,
        C: Inherits<A::Owner>,
    {
        let descriptor = A::DESCRIPTOR;

        let value = access::get(&self.raw, descriptor)?;
        descriptor.convert(value)
    }

    /// Applies a batch of operations, left to right.
    ///
    /// Stops at the first failing operation and returns its error. Operations before it stay applied; operations after it
    /// are never started.
    pub fn set(&self, ops: impl IntoIterator<Item = AttrOp<C>>) -> Result<(), AttrError> {
        for op in ops {
            access::apply_set_op(&self.raw, op.into_kind())?;
        }
        Ok(())
    }

    /// Resets an attribute to the foreign null.
    pub fn clear<A>(&self, _attr: A) -> Result<(), AttrError>
    where
        A: Clearable,
        C: Inherits<A::Owner>,
    {
        access::clear(&self.raw, A::DESCRIPTOR)
    }

    /// Reads an attribute resolved by label at runtime.
    pub fn get_by_name(&self, label: &str) -> Result<Value, AttrError> {
        let descriptor = resolve_attribute_in(self.raw.class(), label)?;
        access::get(&self.raw, descriptor)
    }

    /// Writes an attribute resolved by label at runtime.
    pub fn set_by_name(&self, label: &str, value: impl ToValue) -> Result<(), AttrError> {
        let descriptor = resolve_attribute_in(self.raw.class(), label)?;
        access::set(&self.raw, descriptor, value.to_value())
    }

    /// Clears an attribute resolved by label at runtime.
    pub fn clear_by_name(&self, label: &str) -> Result<(), AttrError> {
        let descriptor = resolve_attribute_in(self.raw.class(), label)?;
        access::clear(&self.raw, descriptor)
    }

    /// Converts into a handle of a base class or implemented interface.
    ///
    /// The runtime class used for by-name resolution stays the one of `C`.
    pub fn upcast<Base>(self) -> Obj<Base>
    where
        Base: GiClass,
        C: Inherits<Base>,
    {
        Obj {
            raw: self.raw,
            _class: PhantomData,
        }
    }

    pub fn ptr(&self) -> ObjectPtr {
        self.raw.ptr()
    }

    pub fn interface(&self) -> &InterfaceRef {
        self.raw.interface()
    }

    pub fn raw(&self) -> &RawObject {
        &self.raw
    }
}

impl<C: GiClass> Construct for Obj<C> {
    type Class = C;

    /// Stages every operation in order, instantiates once with all tokens, then connects signals in order.
    fn construct_with(
        interface: &InterfaceRef,
        ops: Vec<AttrOp<C, ForNew>>,
    ) -> Result<Self, AttrError> {
        let class = C::CLASS_INFO;

        let mut params = Vec::with_capacity(ops.len());
        let mut connections = Vec::new();

        for op in ops {
            match access::stage_construct_op(class.name(), op.into_kind())? {
                ConstructStep::Param(param) => params.push(param),
                ConstructStep::Connect {
                    signal,
                    handler,
                    after,
                } => connections.push((signal, handler, after)),
            }
        }

        crate::out!("  new_object {} with {} params", class.name(), params.len());
        let ptr = interface
            .new_object(class, params)
            .map_err(|source| AttrError::Foreign {
                target: format!("construction of `{}`", class.name()),
                source,
            })?;

        let obj = Self::from_foreign(ptr, interface.clone());
        for (signal, handler, after) in connections {
            access::connect(interface, ptr.as_ptr(), signal, handler, after)?;
        }

        Ok(obj)
    }
}

impl<C: GiClass> Clone for Obj<C> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _class: PhantomData,
        }
    }
}

impl<C: GiClass> fmt::Debug for Obj<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Obj<{}>({:?})", C::class_name(), self.raw.ptr())
    }
}
