/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::meta::error::{ConvertError, ErrorKind};
use crate::meta::Value;
use crate::obj::ObjectPtr;
use crate::sys::RawPtr;

/// Conversion of a Rust value into a dynamic [`Value`].
///
/// Infallible; every Rust value has a foreign representation.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Conversion of a dynamic [`Value`] into a Rust value.
#[diagnostic::on_unimplemented(
    message = "`FromValue` is not implemented for `{Self}`",
    label = "cannot be read from a foreign value",
    note = "nullable foreign values (strings, pointers, objects) must be read as `Option<T>`"
)]
pub trait FromValue: Sized {
    /// Performs the conversion.
    fn try_from_value(value: Value) -> Result<Self, ConvertError>;

    /// ⚠️ Performs the conversion.
    ///
    /// # Panics
    /// If the conversion fails.
    fn from_value(value: Value) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|err| panic!("FromValue::from_value() failed: {err}"))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Identity

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn try_from_value(value: Value) -> Result<Self, ConvertError> {
        Ok(value)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalars

macro_rules! impl_value_as_self {
    ($($T:ty => $Variant:ident),* $(,)?) => {
        $(
            impl ToValue for $T {
                fn to_value(&self) -> Value {
                    Value::$Variant(*self)
                }
            }

            impl FromValue for $T {
                fn try_from_value(value: Value) -> Result<Self, ConvertError> {
                    match value {
                        Value::$Variant(v) => Ok(v),
                        other => Err(mismatch(stringify!($T), other)),
                    }
                }
            }
        )*
    };
}

impl_value_as_self!(
    bool => Bool,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

// Narrow C integers travel as the promoted `int`/`uint`, like in GValue.
macro_rules! impl_value_via_promoted {
    ($($T:ty => $Via:ty, $Variant:ident);* $(;)?) => {
        $(
            impl ToValue for $T {
                fn to_value(&self) -> Value {
                    Value::$Variant(<$Via>::from(*self))
                }
            }

            impl FromValue for $T {
                fn try_from_value(value: Value) -> Result<Self, ConvertError> {
                    match value {
                        Value::$Variant(v) => <$T>::try_from(v).map_err(|_| {
                            ErrorKind::OutOfRange { target: stringify!($T) }.into_error(v)
                        }),
                        other => Err(mismatch(stringify!($T), other)),
                    }
                }
            }
        )*
    };
}

impl_value_via_promoted!(
    i8 => i32, I32;
    i16 => i32, I32;
    u8 => u32, U32;
    u16 => u32, U32;
);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Nullable foreign types

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl FromValue for String {
    fn try_from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("String", other)),
        }
    }
}

impl ToValue for RawPtr {
    fn to_value(&self) -> Value {
        if self.is_null() {
            Value::Nil
        } else {
            Value::Pointer(*self)
        }
    }
}

impl FromValue for RawPtr {
    fn try_from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Pointer(ptr) => Ok(ptr),
            other => Err(mismatch("pointer", other)),
        }
    }
}

impl ToValue for ObjectPtr {
    fn to_value(&self) -> Value {
        Value::Object(*self)
    }
}

impl FromValue for ObjectPtr {
    fn try_from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Object(obj) => Ok(obj),
            other => Err(mismatch("object", other)),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Containers

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// `None` is the foreign null.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Nil,
        }
    }
}

/// The foreign null becomes `None`.
impl<T: FromValue> FromValue for Option<T> {
    fn try_from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Nil => Ok(None),
            other => T::try_from_value(other).map(Some),
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn try_from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::List(items) => items.into_iter().map(T::try_from_value).collect(),
            other => Err(mismatch("list", other)),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

fn mismatch(expected: &'static str, actual: Value) -> ConvertError {
    if actual.is_nil() {
        ErrorKind::UnexpectedNull { expected }.into_error(actual)
    } else {
        ErrorKind::BadType {
            expected,
            actual: actual.type_name(),
        }
        .into_error(actual)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_roundtrip_and_mismatch() {
        assert_eq!(i32::try_from_value(Value::I32(-4)).unwrap(), -4);
        assert!(bool::from_value(Value::Bool(true)));

        let err = i32::try_from_value(Value::Bool(true)).unwrap_err();
        assert!(err.is_bad_type());
        assert_eq!(err.to_string(), "expected i32, got bool: Bool(true)");
    }

    #[test]
    fn narrow_integers_check_range() {
        assert_eq!(u8::try_from_value(Value::U32(200)).unwrap(), 200);

        let err = u8::try_from_value(Value::U32(300)).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(i16::to_value(&-3), Value::I32(-3));
    }

    #[test]
    fn null_maps_to_none_not_error() {
        assert_eq!(Option::<String>::try_from_value(Value::Nil).unwrap(), None);

        let err = String::try_from_value(Value::Nil).unwrap_err();
        assert!(err.is_unexpected_null());
    }

    #[test]
    fn list_conversion() {
        let value = vec!["a".to_string(), "b".to_string()].to_value();
        assert_eq!(
            value,
            Value::List(vec![Value::String("a".into()), Value::String("b".into())])
        );

        let back = Vec::<String>::try_from_value(value).unwrap();
        assert_eq!(back, ["a", "b"]);

        let err = Vec::<i32>::try_from_value(Value::List(vec![Value::I32(1), Value::Nil]));
        assert!(err.unwrap_err().is_unexpected_null());
    }

    #[test]
    fn null_pointer_is_nil() {
        let null: RawPtr = std::ptr::null_mut();
        assert_eq!(null.to_value(), Value::Nil);
    }

    #[test]
    #[should_panic(expected = "FromValue::from_value() failed")]
    fn from_value_panics() {
        let _ = String::from_value(Value::I32(1));
    }
}
