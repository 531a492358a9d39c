/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Lists all cases in the introspection data where records or fields are deliberately not generated.

// NOTE: the identifiers used here operate on the GI names (e.g. IOChannel, not IoChannel).

use crate::models::domain::{Field, FieldType, Record};
use crate::CodegenConfig;

const PRIVATE_SUFFIX: &str = "Private";

/// Records that produce no accessors, constructors or callback types at all.
///
/// Covers private backing structs (`GtkWidgetPrivate`), GType class and interface structs (`GtkWidgetClass`), and
/// the configured extra exclusions.
pub fn is_record_excluded(record: &Record, config: &CodegenConfig) -> bool {
    let gi_name = record.name.gi_ty.as_str();

    gi_name.ends_with(PRIVATE_SUFFIX)
        || record.gtype_struct_for.is_some()
        || config
            .extra_excluded_structs
            .iter()
            .any(|excluded| excluded == gi_name)
}

/// Fields that point to the instance's private sub-structure, e.g. `GtkWidgetPrivate *priv`.
pub fn is_private_backing_field(field: &Field) -> bool {
    let c_type = match &field.ty {
        FieldType::C(c_type) => c_type,
        _ => return false,
    };

    let base = c_type
        .split(|c: char| c == '*' || c.is_whitespace())
        .filter(|token| !token.is_empty() && *token != "const")
        .last();

    base.is_some_and(|base| base.ends_with(PRIVATE_SUFFIX))
}
