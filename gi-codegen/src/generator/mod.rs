/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;

use crate::context::Context;
use crate::models::domain::{ExtractedCallback, ModName, Namespace};
use crate::{special_cases, CodegenSummary, SkippedField, SubmitFn};

pub mod callbacks;
pub mod records;

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Generates one file per non-excluded record, `callbacks.rs`, and `mod.rs` re-exporting all of them.
///
/// Callback extraction must have run on `namespace` before, see [`callbacks::extract_callback_fields()`].
pub fn generate_record_files(
    namespace: &Namespace,
    extracted: &[ExtractedCallback],
    ctx: &Context,
    gen_path: &Path,
    submit_fn: &mut SubmitFn,
) -> CodegenSummary {
    let mut summary = CodegenSummary::default();

    let generated_callbacks = callbacks::make_callbacks_file(extracted, ctx);
    summary.callbacks = extracted
        .iter()
        .map(|cb| cb.name.rust_ty.to_string())
        .filter(|name| !generated_callbacks.unsupported.contains_key(name))
        .collect();

    let mut modules = vec![];
    for record in namespace.records.iter() {
        let gi_name = &record.name.gi_ty;
        if special_cases::is_record_excluded(record, ctx.config()) {
            crate::trace!("  exclude record {gi_name}");
            summary.excluded.push(gi_name.clone());
            continue;
        }

        let module_name = record.mod_name();
        let generated = records::make_record(record, &generated_callbacks, ctx);

        let out_path = gen_path.join(format!("{}.rs", module_name.rust_mod));
        submit_fn(out_path, generated.code);

        summary.records.push(gi_name.clone());
        summary
            .skipped_fields
            .extend(generated.skipped_fields.into_iter().map(|(field, err)| SkippedField {
                record: gi_name.clone(),
                field,
                reason: err.to_string(),
            }));

        modules.push(module_name);
    }

    submit_fn(gen_path.join("callbacks.rs"), generated_callbacks.code);
    submit_fn(gen_path.join("mod.rs"), make_module_file(&modules));

    summary
}

fn make_module_file(modules: &[ModName]) -> TokenStream {
    let decls = modules.iter().map(|module_name| {
        quote! {
            mod #module_name;
            pub use #module_name::*;
        }
    });

    quote! {
        pub mod callbacks;
        pub use callbacks::*;

        #( #decls )*
    }
}
