/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::meta::ClassName;
use crate::obj::ObjectPtr;
use crate::sys::RawPtr;

/// Dynamically typed value, as exchanged with the foreign object system (the Rust side of a `GValue`).
///
/// `Nil` is the foreign null: a null string, pointer, object or list. It is distinct from "no value", which the typed
/// layer expresses with `Option`.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),

    /// Non-null untyped pointer. A null pointer is represented as `Nil`.
    Pointer(RawPtr),

    Object(ObjectPtr),
    List(Vec<Value>),
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Short name of the stored variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::I32(_) => "i32",
            Self::U32(_) => "u32",
            Self::I64(_) => "i64",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Pointer(_) => "pointer",
            Self::Object(_) => "object",
            Self::List(_) => "list",
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Foreign list flavor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ListKind {
    /// Doubly linked `GList`.
    List,

    /// Singly linked `GSList`.
    SList,

    /// `GPtrArray` or C array.
    Array,
}

/// Static type of an attribute, used for foreign reads and construction tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValueType {
    Bool,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    String,
    Pointer,
    Object(ClassName),
    List(ListKind, &'static ValueType),
}

impl ValueType {
    /// Whether the foreign type has a null representation.
    pub const fn is_nullable(&self) -> bool {
        matches!(
            self,
            Self::String | Self::Pointer | Self::Object(_) | Self::List(..)
        )
    }

    /// Coarse name without element or class details, for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::Pointer => "pointer",
            Self::Object(_) => "object",
            Self::List(..) => "list",
        }
    }

    /// Whether `value` is a valid instance of this type. `Nil` is accepted for nullable types.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ty, Value::Nil) => ty.is_nullable(),
            (Self::Bool, Value::Bool(_))
            | (Self::I32, Value::I32(_))
            | (Self::U32, Value::U32(_))
            | (Self::I64, Value::I64(_))
            | (Self::U64, Value::U64(_))
            | (Self::F32, Value::F32(_))
            | (Self::F64, Value::F64(_))
            | (Self::String, Value::String(_))
            | (Self::Pointer, Value::Pointer(_))
            | (Self::Object(_), Value::Object(_)) => true,
            (Self::List(_, elem), Value::List(items)) => items.iter().all(|v| elem.accepts(v)),
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::I32 => f.write_str("i32"),
            Self::U32 => f.write_str("u32"),
            Self::I64 => f.write_str("i64"),
            Self::U64 => f.write_str("u64"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::String => f.write_str("string"),
            Self::Pointer => f.write_str("pointer"),
            Self::Object(class) => write!(f, "object<{class}>"),
            Self::List(kind, elem) => write!(f, "{kind:?}<{elem}>"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// How a foreign null read from an attribute is presented.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NullRepr {
    /// Null stays `Value::Nil`, which converts to `None` for `Option` attributes.
    #[default]
    Absent,

    /// Null is an empty list, for list attributes where GLib uses `NULL` as the empty sequence.
    EmptyList,
}

impl NullRepr {
    pub(crate) fn apply(self, value: Value) -> Value {
        match (self, value) {
            (Self::EmptyList, Value::Nil) => Value::List(Vec::new()),
            (_, value) => value,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
