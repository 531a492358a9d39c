/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Domain models

use std::fmt;

use proc_macro2::{Ident, TokenStream};
use quote::ToTokens;

use crate::conv;
use crate::util::{ident, safe_ident};

pub struct Namespace {
    pub name: String,
    pub records: Vec<Record>,
}

/// Struct or union with a known memory layout.
pub struct Record {
    pub name: TyName,
    pub c_type: Option<String>,
    pub kind: RecordKind,

    /// Size in bytes; 0 for opaque records.
    pub size: usize,
    pub is_boxed: bool,

    /// Class this record is the GType class/interface struct of, if any.
    pub gtype_struct_for: Option<String>,

    /// In declaration order. Offsets are taken as-is from introspection data.
    pub fields: Vec<Field>,
}

impl Record {
    pub fn mod_name(&self) -> ModName {
        ModName::from_gi(&self.name.gi_ty)
    }

    /// Prefix of free functions generated for this record, e.g. `point` for `point_read_x`.
    pub fn fn_prefix(&self) -> String {
        conv::to_snake_case(&self.name.gi_ty)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RecordKind {
    Struct,
    Union,
}

impl RecordKind {
    pub fn from_gi(kind: Option<&str>) -> Self {
        match kind {
            None | Some("struct") | Some("record") => Self::Struct,
            Some("union") => Self::Union,
            Some(other) => panic!("unknown record kind `{other}`"),
        }
    }
}

pub struct Field {
    pub name: String,
    pub offset: usize,
    pub ty: FieldType,

    /// Readable and not private.
    pub visible: bool,
}

/// Type of a field, before mapping to Rust.
#[derive(Clone, PartialEq, Debug)]
pub enum FieldType {
    /// Plain C type, e.g. `gint` or `const gchar*`.
    C(String),

    /// Fixed-size C array.
    Array { c_type: String, len: usize },

    /// Bit-field member.
    Bits { c_type: String, bits: u32 },

    /// Function pointer declared inline in the struct. Replaced by [`FieldType::Callback`] during extraction.
    InlineCallback(CallbackSignature),

    /// Reference to an extracted callback type.
    Callback(TyName),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C(c_type) => write!(f, "{c_type}"),
            Self::Array { c_type, len } => write!(f, "{c_type}[{len}]"),
            Self::Bits { c_type, bits } => write!(f, "{c_type} : {bits}"),
            Self::InlineCallback(sig) => write!(f, "{sig}"),
            Self::Callback(name) => write!(f, "{}", name.rust_ty),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct CallbackSignature {
    pub return_type: String,
    pub params: Vec<CallbackParam>,
}

impl fmt::Display for CallbackSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.c_type, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{} (*)({params})", self.return_type)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct CallbackParam {
    pub name: String,
    pub c_type: String,
}

/// Standalone callback type extracted from a struct field, e.g. `WidgetClassShowFieldCallback`.
pub struct ExtractedCallback {
    pub name: TyName,

    /// Record the field was declared in.
    pub owner: String,
    pub field: String,
    pub signature: CallbackSignature,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TyName {
    pub gi_ty: String,
    pub rust_ty: Ident,
}

impl TyName {
    pub fn from_gi(gi_ty: &str) -> Self {
        Self {
            gi_ty: gi_ty.to_owned(),
            rust_ty: ident(&conv::to_pascal_case(gi_ty)),
        }
    }
}

impl ToTokens for TyName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_ty.to_tokens(tokens)
    }
}

/// Contains naming conventions for modules.
#[derive(Clone)]
pub struct ModName {
    pub rust_mod: Ident,
}

impl ModName {
    pub fn from_gi(gi_ty: &str) -> Self {
        Self {
            rust_mod: safe_ident(&conv::to_snake_case(gi_ty)),
        }
    }
}

impl ToTokens for ModName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_mod.to_tokens(tokens)
    }
}
