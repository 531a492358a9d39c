/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Mapping of C field types to the Rust types used by generated accessors.

use std::error::Error;
use std::fmt;

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::context::Context;
use crate::models::domain::FieldType;

/// How generated code reads (and possibly writes) one field.
#[derive(Clone, Debug)]
pub enum FieldAccess {
    /// Plain value with an `FfiPeek` impl in the runtime, read with `read_field` and written with `write_field`.
    Value(TokenStream),

    /// `char*`, read as `Option<String>` without taking ownership. Not writable.
    String,

    /// Any other pointer, read and written as `RawPtr`.
    Pointer,

    /// Function pointer of an extracted callback type. Read-only.
    Callback(Ident),
}

impl FieldAccess {
    pub fn is_writable(&self) -> bool {
        matches!(self, Self::Value(_) | Self::Pointer)
    }
}

/// A C type that has no accessor mapping. The field is skipped, and a note is left in the generated docs.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AccessorError {
    /// Not a known scalar, and not a pointer.
    UnsupportedType { c_type: String },

    /// Nested struct or union stored by value.
    ByValueRecord { c_type: String },

    FixedArray { c_type: String, len: usize },

    BitField { c_type: String, bits: u32 },

    /// A parameter or return type of an inline callback has no ABI mapping.
    CallbackSignature { c_type: String },
}

impl fmt::Display for AccessorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType { c_type } => write!(f, "unsupported type `{c_type}`"),
            Self::ByValueRecord { c_type } => {
                write!(f, "nested record `{c_type}` stored by value")
            }
            Self::FixedArray { c_type, len } => write!(f, "fixed-size array `{c_type}[{len}]`"),
            Self::BitField { c_type, bits } => write!(f, "bit-field `{c_type} : {bits}`"),
            Self::CallbackSignature { c_type } => {
                write!(f, "callback signature uses unsupported type `{c_type}`")
            }
        }
    }
}

impl Error for AccessorError {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Parsed C type: base name plus pointer depth. `const` qualifiers are dropped.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CType<'a> {
    pub base: &'a str,
    pub pointer_depth: usize,
}

impl CType<'_> {
    fn is_char_pointer(&self) -> bool {
        self.pointer_depth == 1 && matches!(self.base, "gchar" | "char")
    }
}

pub fn to_field_access(ty: &FieldType, ctx: &Context) -> Result<FieldAccess, AccessorError> {
    let c_type = match ty {
        FieldType::C(c_type) => c_type,
        FieldType::Callback(name) => return Ok(FieldAccess::Callback(name.rust_ty.clone())),
        FieldType::Array { c_type, len } => {
            return Err(AccessorError::FixedArray {
                c_type: c_type.clone(),
                len: *len,
            })
        }
        FieldType::Bits { c_type, bits } => {
            return Err(AccessorError::BitField {
                c_type: c_type.clone(),
                bits: *bits,
            })
        }
        FieldType::InlineCallback(_) => {
            panic!("inline callback field encountered; callback extraction must run before accessor generation")
        }
    };

    let unsupported = || AccessorError::UnsupportedType {
        c_type: c_type.clone(),
    };
    let parsed = ctx.parse_c_type(c_type).ok_or_else(unsupported)?;

    if parsed.is_char_pointer() {
        return Ok(FieldAccess::String);
    }
    if parsed.pointer_depth > 0 || is_untyped_pointer(parsed.base) {
        return Ok(FieldAccess::Pointer);
    }
    if let Some(rust_ty) = to_rust_scalar(parsed.base) {
        return Ok(FieldAccess::Value(rust_ty));
    }
    if ctx.is_record(parsed.base) {
        return Err(AccessorError::ByValueRecord {
            c_type: c_type.clone(),
        });
    }

    Err(unsupported())
}

/// Rust type of a callback parameter or return value in `extern "C"` signatures. `None` for a `void` return.
pub fn to_rust_abi_type(c_type: &str, ctx: &Context) -> Result<Option<TokenStream>, AccessorError> {
    let unsupported = || AccessorError::CallbackSignature {
        c_type: c_type.to_string(),
    };
    let parsed = ctx.parse_c_type(c_type).ok_or_else(unsupported)?;

    if parsed.pointer_depth == 0 && parsed.base == "void" {
        return Ok(None);
    }
    if parsed.pointer_depth > 0 || is_untyped_pointer(parsed.base) {
        return Ok(Some(quote! { RawPtr }));
    }

    // gboolean stays an int at the ABI level.
    if parsed.base == "gboolean" {
        return Ok(Some(quote! { i32 }));
    }

    to_rust_scalar(parsed.base).map(Some).ok_or_else(unsupported)
}

fn is_untyped_pointer(base: &str) -> bool {
    matches!(base, "gpointer" | "gconstpointer")
}

#[rustfmt::skip]
fn to_rust_scalar(base: &str) -> Option<TokenStream> {
    let tokens = match base {
        "gboolean"                                                      => quote! { bool },
        "gchar" | "char" | "gint8" | "int8_t"                           => quote! { i8 },
        "guchar" | "guint8" | "uint8_t"                                 => quote! { u8 },
        "gshort" | "short" | "gint16" | "int16_t"                       => quote! { i16 },
        "gushort" | "guint16" | "uint16_t"                              => quote! { u16 },
        "gint" | "int" | "gint32" | "int32_t"                           => quote! { i32 },
        "guint" | "guint32" | "uint32_t" | "gunichar" | "GQuark"        => quote! { u32 },
        "gint64" | "int64_t" | "goffset"                                => quote! { i64 },
        "guint64" | "uint64_t"                                          => quote! { u64 },
        "gssize" | "gintptr" | "ssize_t"                                => quote! { isize },
        "gsize" | "guintptr" | "size_t" | "GType"                       => quote! { usize },
        // 32 bits on LLP64 targets.
        "glong" | "long"                                                => quote! { ::std::ffi::c_long },
        "gulong"                                                        => quote! { ::std::ffi::c_ulong },
        "gfloat" | "float"                                              => quote! { f32 },
        "gdouble" | "double"                                            => quote! { f64 },
        _ => return None,
    };
    Some(tokens)
}
