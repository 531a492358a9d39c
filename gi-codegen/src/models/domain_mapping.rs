/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::models::domain::{
    CallbackParam, CallbackSignature, Field, FieldType, Namespace, Record, RecordKind, TyName,
};
use crate::models::json::{JsonCallback, JsonField, JsonNamespace, JsonRecord};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Top-level

impl Namespace {
    pub fn from_json(json: &JsonNamespace) -> Self {
        Self {
            name: json.namespace.clone(),
            records: json.records.iter().map(Record::from_json).collect(),
        }
    }
}

impl Record {
    pub fn from_json(json: &JsonRecord) -> Self {
        Self {
            name: TyName::from_gi(&json.name),
            c_type: json.c_type.clone(),
            kind: RecordKind::from_gi(json.kind.as_deref()),
            size: json.size,
            is_boxed: json.is_boxed.unwrap_or(false),
            gtype_struct_for: json.gtype_struct_for.clone(),
            fields: json.fields.iter().map(Field::from_json).collect(),
        }
    }
}

impl Field {
    pub fn from_json(json: &JsonField) -> Self {
        let visible = json.readable.unwrap_or(true) && !json.private.unwrap_or(false);

        Self {
            name: json.name.clone(),
            offset: json.offset,
            ty: FieldType::from_json(json),
            visible,
        }
    }
}

impl FieldType {
    fn from_json(json: &JsonField) -> Self {
        if let Some(callback) = &json.callback {
            return Self::InlineCallback(CallbackSignature::from_json(callback));
        }

        // A field without callback and without C type is malformed input; treat it as an opaque pointer, which at least keeps the
        // accessor sound.
        let c_type = json.c_type.clone().unwrap_or_else(|| "gpointer".to_string());

        match (json.array_length, json.bits) {
            (Some(len), _) => Self::Array { c_type, len },
            (None, Some(bits)) => Self::Bits { c_type, bits },
            (None, None) => Self::C(c_type),
        }
    }
}

impl CallbackSignature {
    fn from_json(json: &JsonCallback) -> Self {
        Self {
            return_type: json.return_type.clone(),
            params: json
                .parameters
                .iter()
                .map(|p| CallbackParam {
                    name: p.name.clone(),
                    c_type: p.c_type.clone(),
                })
                .collect(),
        }
    }
}
