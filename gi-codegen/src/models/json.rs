/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// In #[derive(DeJson)]: "this block may be rewritten with the `?` operator"
#![allow(clippy::question_mark)]

// This file acts as deserialization check of the introspection dump. Fields that the generator does not read are still declared, so
// that the input is checked against our expectations of its shape.

use nanoserde::DeJson;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// JSON models

/// One introspection namespace, as dumped from a `.gir`/`.typelib` pair.
#[derive(DeJson)]
pub struct JsonNamespace {
    pub namespace: String,
    #[allow(dead_code)]
    pub version: Option<String>,
    pub records: Vec<JsonRecord>,
}

/// A `<record>` (struct) or `<union>`.
#[derive(DeJson)]
pub struct JsonRecord {
    pub name: String,
    pub c_type: Option<String>,

    /// `"struct"` (default) or `"union"`.
    pub kind: Option<String>,
    pub size: usize,
    pub is_boxed: Option<bool>,

    /// Set on class/interface structs, e.g. `GtkWidgetClass` has `"Widget"`.
    pub gtype_struct_for: Option<String>,

    /// Opaque records whose layout is not public.
    #[allow(dead_code)]
    pub disguised: Option<bool>,
    pub fields: Vec<JsonField>,
}

#[derive(DeJson)]
pub struct JsonField {
    pub name: String,
    pub offset: usize,

    /// C type, e.g. `gint`, `const gchar*`, `GtkWidget*`. Absent for inline callback fields.
    pub c_type: Option<String>,

    /// `readable="0"` or `private="1"` in GIR hide the field.
    pub readable: Option<bool>,
    pub private: Option<bool>,

    /// Bit-field width, if any.
    pub bits: Option<u32>,

    /// Length of a fixed-size C array field.
    pub array_length: Option<usize>,

    /// Inline function-pointer signature.
    pub callback: Option<JsonCallback>,
}

#[derive(DeJson)]
pub struct JsonCallback {
    pub return_type: String,
    pub parameters: Vec<JsonParameter>,
}

#[derive(DeJson)]
pub struct JsonParameter {
    pub name: String,
    pub c_type: String,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

pub fn parse_namespace(json: &str) -> Result<JsonNamespace, nanoserde::DeJsonErr> {
    DeJson::deserialize_json(json)
}
