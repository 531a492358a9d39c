/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Default operations for attributes backed by GObject properties.
//!
//! These forward to the [`ObjectInterface`][crate::obj::ObjectInterface] of the accessed object. Attributes with custom
//! semantics (e.g. computed from several properties) plug their own functions into the descriptor instead.

use crate::meta::error::{AttrError, ErrorKind, ForeignError};
use crate::meta::Value;
use crate::obj::{ConstructParam, RawObject};
use crate::registry::AttrDescriptor;
use crate::sys;

pub fn property_get(obj: &RawObject, attr: &AttrDescriptor) -> Result<Value, AttrError> {
    obj.interface()
        .get_property(obj.ptr(), attr.label(), attr.value_type())
        .map_err(|err| foreign(attr, err))
}

pub fn property_set(obj: &RawObject, attr: &AttrDescriptor, value: Value) -> Result<(), AttrError> {
    obj.interface()
        .set_property(obj.ptr(), attr.label(), value)
        .map_err(|err| foreign(attr, err))
}

pub fn property_construct(attr: &AttrDescriptor, value: Value) -> Result<ConstructParam, AttrError> {
    Ok(ConstructParam {
        name: attr.label(),
        value,
        value_type: attr.value_type(),
    })
}

/// Writes the foreign null directly, without going through the checked set path.
pub fn property_clear(obj: &RawObject, attr: &AttrDescriptor) -> Result<(), AttrError> {
    obj.interface()
        .set_property(obj.ptr(), attr.label(), Value::Nil)
        .map_err(|err| foreign(attr, err))
}

/// Transfer that hands the value on unchanged. Appropriate whenever the foreign side copies on set.
pub fn transfer_identity(_attr: &AttrDescriptor, raw: Value) -> Result<Value, AttrError> {
    Ok(raw)
}

/// Transfer that moves a string into a fresh C allocation, owned by whoever receives the pointer.
///
/// For `gpointer` attributes documented as taking ownership of a string. If the result is never assigned, the allocation
/// leaks.
pub fn transfer_cstring(attr: &AttrDescriptor, raw: Value) -> Result<Value, AttrError> {
    match raw {
        Value::Nil => Ok(Value::Nil),
        Value::String(s) => {
            let ptr = sys::cstr_new_full(&s).map_err(AttrError::Alloc)?;
            crate::out!("  transfer_cstring: {} bytes at {ptr:p}", s.len() + 1);

            Ok(Value::Pointer(ptr.as_ptr().cast()))
        }
        other => Err(AttrError::Convert {
            label: attr.label(),
            origin: attr.origin(),
            source: ErrorKind::BadType {
                expected: "string",
                actual: other.type_name(),
            }
            .into_error(other),
        }),
    }
}

fn foreign(attr: &AttrDescriptor, source: ForeignError) -> AttrError {
    AttrError::Foreign {
        target: format!("attribute `{}` of `{}`", attr.label(), attr.origin()),
        source,
    }
}
