/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Function-pointer fields declared inline in structs, turned into standalone callback types.

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;

use crate::context::Context;
use crate::conv::{self, AccessorError};
use crate::models::domain::{ExtractedCallback, FieldType, Record, TyName};
use crate::{special_cases, util, CodegenConfig};

/// Output of [`make_callbacks_file()`].
pub struct GeneratedCallbacks {
    pub code: TokenStream,

    /// Callbacks whose signature could not be mapped, by Rust type name. No type is emitted for them, and fields
    /// referring to them get no accessor.
    pub unsupported: HashMap<String, AccessorError>,
}

/// Pre-pass before accessor generation: replaces every inline callback field type in non-excluded records with a reference
/// to a named type `<Record><Field>FieldCallback`, and returns those types.
pub fn extract_callback_fields(
    records: &mut [Record],
    config: &CodegenConfig,
) -> Vec<ExtractedCallback> {
    let mut extracted = vec![];

    for record in records.iter_mut() {
        if special_cases::is_record_excluded(record, config) {
            continue;
        }

        let owner = record.name.gi_ty.clone();
        for field in record.fields.iter_mut() {
            let FieldType::InlineCallback(signature) = &field.ty else {
                continue;
            };

            let name = TyName::from_gi(&conv::make_callback_type_name(&owner, &field.name));
            crate::trace!("  extract callback {}.{} -> {}", owner, field.name, name.rust_ty);

            extracted.push(ExtractedCallback {
                name: name.clone(),
                owner: owner.clone(),
                field: field.name.clone(),
                signature: signature.clone(),
            });

            field.ty = FieldType::Callback(name);
        }
    }

    extracted
}

pub fn make_callbacks_file(callbacks: &[ExtractedCallback], ctx: &Context) -> GeneratedCallbacks {
    let rt = ctx.runtime_path();
    let mut unsupported = HashMap::new();
    let mut definitions = vec![];

    for callback in callbacks {
        match make_callback_definition(callback, ctx) {
            Ok(tokens) => definitions.push(tokens),
            Err(err) => {
                crate::trace!("  skip callback {}: {err}", callback.name.rust_ty);
                unsupported.insert(callback.name.rust_ty.to_string(), err);
            }
        }
    }

    let code = quote! {
        #[allow(unused_imports)]
        use #rt::sys::RawPtr;

        #( #definitions )*
    };

    GeneratedCallbacks { code, unsupported }
}

fn make_callback_definition(
    callback: &ExtractedCallback,
    ctx: &Context,
) -> Result<TokenStream, AccessorError> {
    let ExtractedCallback {
        name,
        owner,
        field,
        signature,
    } = callback;

    let mut params = vec![];
    for (i, param) in signature.params.iter().enumerate() {
        let param_name = if param.name.is_empty() {
            util::ident(&format!("arg{i}"))
        } else {
            conv::make_param_name(&param.name)
        };

        // A `void` parameter can only appear as the sole `(void)` parameter list.
        let Some(param_ty) = conv::to_rust_abi_type(&param.c_type, ctx)? else {
            continue;
        };
        params.push(quote! { #param_name: #param_ty });
    }

    let return_decl = conv::to_rust_abi_type(&signature.return_type, ctx)?
        .map(|ty| quote! { -> #ty });

    let doc = format!("Function pointer stored in field `{field}` of `{owner}`: `{signature}`.");

    Ok(quote! {
        #[doc = #doc]
        pub type #name = Option<unsafe extern "C" fn( #( #params ),* ) #return_decl>;
    })
}
