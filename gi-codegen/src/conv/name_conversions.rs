/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Identifier renamings (GObject introspection -> Rust)

use proc_macro2::Ident;

use crate::util::{ident, safe_ident};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Case conversions

fn to_snake_special_case(gi_name: &str) -> Option<&'static str> {
    match gi_name {
        "IOChannel" => Some("io_channel"),
        "IOFuncs" => Some("io_funcs"),
        "RGBA" => Some("rgba"),
        "UnixFDList" => Some("unix_fd_list"),
        _ => None,
    }
}

pub fn to_snake_case(gi_name: &str) -> String {
    use heck::ToSnakeCase;

    if let Some(special_case) = to_snake_special_case(gi_name) {
        return special_case.to_string();
    }

    gi_name
        .replace("2D", "_2d") // e.g. graphene Point2D -> point_2d
        .replace("3D", "_3d")
        .to_snake_case()
}

pub fn to_pascal_case(gi_name: &str) -> String {
    use heck::ToPascalCase;

    // Special cases: reuse snake_case impl to ensure at least consistency between those 2.
    if let Some(snake_special) = to_snake_special_case(gi_name) {
        return snake_special.to_pascal_case();
    }

    gi_name.to_pascal_case()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Generated symbols

/// `<Record><Field>FieldCallback`, e.g. `WidgetClassSizeAllocateFieldCallback`.
pub fn make_callback_type_name(record_gi_name: &str, field_name: &str) -> String {
    format!(
        "{}{}FieldCallback",
        to_pascal_case(record_gi_name),
        to_pascal_case(field_name)
    )
}

pub fn make_field_reader_name(fn_prefix: &str, field_name: &str) -> Ident {
    ident(&format!("{fn_prefix}_read_{}", to_snake_case(field_name)))
}

pub fn make_field_writer_name(fn_prefix: &str, field_name: &str) -> Ident {
    ident(&format!("{fn_prefix}_write_{}", to_snake_case(field_name)))
}

pub fn make_zero_constructor_name(fn_prefix: &str) -> Ident {
    ident(&format!("new_zero_{fn_prefix}"))
}

/// Parameter name in generated signatures; keywords get a trailing underscore.
pub fn make_param_name(c_name: &str) -> Ident {
    safe_ident(&to_snake_case(c_name))
}
