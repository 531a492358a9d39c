/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The attribute access protocol: capability check first, then the descriptor's operation.

use crate::meta::error::AttrError;
use crate::meta::{Capability, ClassName, ToValue, Value};
use crate::obj::attr_op::OpKind;
use crate::obj::{ConstructParam, GiClass, InterfaceRef, RawObject, SignalHandler};
use crate::registry::{AttrDescriptor, ClassInfo, SignalInfo};
use crate::sys::RawPtr;

pub(crate) fn resolve_attribute<C: GiClass>(label: &str) -> Result<&'static AttrDescriptor, AttrError> {
    resolve_attribute_in(C::CLASS_INFO, label)
}

pub(crate) fn resolve_attribute_in(
    class: &ClassInfo,
    label: &str,
) -> Result<&'static AttrDescriptor, AttrError> {
    class
        .find_attribute(label)
        .ok_or_else(|| AttrError::UnknownAttribute {
            class: class.name(),
            label: label.to_string(),
        })
}

pub(crate) fn resolve_signal<C: GiClass>(name: &str) -> Result<&'static SignalInfo, AttrError> {
    let class = C::CLASS_INFO;

    class
        .find_signal(name)
        .ok_or_else(|| AttrError::UnknownSignal {
            class: class.name(),
            name: name.to_string(),
        })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Single operations

pub(crate) fn get(obj: &RawObject, attr: &AttrDescriptor) -> Result<Value, AttrError> {
    attr.require(Capability::Get, obj.class().name())?;
    attr.read(obj)
}

pub(crate) fn clear(obj: &RawObject, attr: &AttrDescriptor) -> Result<(), AttrError> {
    attr.require(Capability::Clear, obj.class().name())?;

    crate::out!("  clear {}.{}", attr.origin(), attr.label());
    attr.reset(obj)
}

pub(crate) fn set(obj: &RawObject, attr: &AttrDescriptor, value: Value) -> Result<(), AttrError> {
    attr.require(Capability::Set, obj.class().name())?;
    attr.write(obj, value)
}

/// Produces a construction token for attribute `label` of `C`, checking the construct capability at runtime.
pub fn construct_by_name<C: GiClass>(
    label: &str,
    value: impl ToValue,
) -> Result<ConstructParam, AttrError> {
    let attr = resolve_attribute::<C>(label)?;
    attr.require(Capability::Construct, C::class_name())?;

    attr.make_param(value.to_value())
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Batches

/// Applies one batch operation to a live object.
pub(crate) fn apply_set_op(obj: &RawObject, op: OpKind) -> Result<(), AttrError> {
    let accessed = obj.class().name();
    crate::out!("  apply {op:?} on {accessed}");

    match op {
        OpKind::Assign { attr, value } => {
            attr.require(Capability::Set, accessed)?;
            attr.write(obj, value)
        }
        OpKind::AssignWith { attr, producer } => {
            attr.require(Capability::Set, accessed)?;
            let value = producer()?;
            attr.write(obj, value)
        }
        OpKind::Update { attr, update } => {
            attr.require(Capability::Get, accessed)?;
            attr.require(Capability::Set, accessed)?;

            let current = attr.read(obj)?;
            let value = update(current)?;
            attr.write(obj, value)
        }
        OpKind::AssignTransfer { attr, raw } => {
            attr.require(Capability::Set, accessed)?;
            let value = attr.transfer(raw)?;
            attr.write(obj, value)
        }
        OpKind::AssignTransferred { attr, value } => {
            attr.require(Capability::Set, accessed)?;
            attr.write(obj, value)
        }
        OpKind::Connect {
            signal,
            handler,
            after,
        } => connect(obj.interface(), obj.ptr().as_ptr(), signal, handler, after),
    }
}

/// Result of staging one construction-time operation.
pub(crate) enum ConstructStep {
    Param(ConstructParam),

    /// Signal connections are applied once the instance exists.
    Connect {
        signal: &'static SignalInfo,
        handler: SignalHandler,
        after: bool,
    },
}

/// Stages one construction-time operation, checking the construct capability.
pub(crate) fn stage_construct_op(accessed: ClassName, op: OpKind) -> Result<ConstructStep, AttrError> {
    crate::out!("  construct {op:?} for {accessed}");

    let (attr, value) = match op {
        OpKind::Assign { attr, value } => {
            attr.require(Capability::Construct, accessed)?;
            (attr, value)
        }
        OpKind::AssignWith { attr, producer } => {
            attr.require(Capability::Construct, accessed)?;
            (attr, producer()?)
        }
        OpKind::AssignTransfer { attr, raw } => {
            attr.require(Capability::Construct, accessed)?;
            (attr, attr.transfer(raw)?)
        }
        OpKind::AssignTransferred { attr, value } => {
            attr.require(Capability::Construct, accessed)?;
            (attr, value)
        }
        OpKind::Update { .. } => unreachable!("update operations cannot be created for construction"),
        OpKind::Connect {
            signal,
            handler,
            after,
        } => {
            return Ok(ConstructStep::Connect {
                signal,
                handler,
                after,
            })
        }
    };

    attr.make_param(value).map(ConstructStep::Param)
}

pub(crate) fn connect(
    iface: &InterfaceRef,
    instance: RawPtr,
    signal: &'static SignalInfo,
    handler: SignalHandler,
    after: bool,
) -> Result<(), AttrError> {
    let result = if after {
        iface.connect_after(instance, signal, handler)
    } else {
        iface.connect(instance, signal, handler)
    };

    // The handler id is not exposed; disconnection goes through the foreign API.
    result
        .map(|_id| ())
        .map_err(|source| AttrError::Foreign {
            target: format!("signal `{}` of `{}`", signal.name(), signal.origin()),
            source,
        })
}
