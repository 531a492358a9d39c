/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::context::Context;
use crate::conv::{self, AccessorError, FieldAccess};
use crate::generator::callbacks::GeneratedCallbacks;
use crate::models::domain::{Field, Record, RecordKind};
use crate::{special_cases, util};

pub struct GeneratedRecord {
    pub code: TokenStream,

    /// Visible fields that got no accessor, with the reason.
    pub skipped_fields: Vec<(String, AccessorError)>,
}

/// Generates the handle type, its `GiClass`/`StructType` impls, field accessors and, for non-opaque records, the
/// zero-initializing constructor.
pub fn make_record(
    record: &Record,
    callbacks: &GeneratedCallbacks,
    ctx: &Context,
) -> GeneratedRecord {
    let rt = ctx.runtime_path();
    let imports = util::make_imports(rt);
    let name = &record.name.rust_ty;
    let gi_name = record.name.gi_ty.as_str();
    let fn_prefix = record.fn_prefix();

    let kind = match record.kind {
        RecordKind::Struct => quote! { TypeKind::Struct },
        RecordKind::Union => quote! { TypeKind::Union },
    };
    let alloc = if record.is_boxed {
        quote! { AllocKind::Boxed }
    } else {
        quote! { AllocKind::Plain }
    };
    let size = Literal::usize_unsuffixed(record.size);

    let mut accessors = vec![];
    let mut skipped_fields = vec![];
    for field in record.fields.iter() {
        if !field.visible || special_cases::is_private_backing_field(field) {
            continue;
        }

        match make_field_accessors(record, &fn_prefix, field, callbacks, ctx) {
            Ok(tokens) => accessors.push(tokens),
            Err(err) => {
                crate::trace!("  skip field {gi_name}.{}: {err}", field.name);
                skipped_fields.push((field.name.clone(), err));
            }
        }
    }

    let docs = make_record_docs(record, &skipped_fields);
    let constructor = make_zero_constructor(record, &fn_prefix, rt);

    let code = quote! {
        #imports

        #( #[doc = #docs] )*
        #[derive(Clone, Debug)]
        pub struct #name {
            managed: ManagedPtr,
        }

        impl GiClass for #name {
            const CLASS_INFO: &'static ClassInfo = &ClassInfo::new(#gi_name, #kind);
        }

        impl StructType for #name {
            const SIZE: usize = #size;
            const ALLOC: AllocKind = #alloc;

            fn from_managed(managed: ManagedPtr) -> Self {
                Self { managed }
            }

            fn managed(&self) -> &ManagedPtr {
                &self.managed
            }
        }

        #constructor

        #( #accessors )*
    };

    GeneratedRecord {
        code,
        skipped_fields,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

fn make_record_docs(record: &Record, skipped_fields: &[(String, AccessorError)]) -> Vec<String> {
    let kind = match record.kind {
        RecordKind::Struct => "struct",
        RecordKind::Union => "union",
    };
    let c_type = record.c_type.as_deref().unwrap_or(&record.name.gi_ty);

    let mut docs = vec![if record.size == 0 {
        format!("Opaque {kind} `{c_type}`. Instances only come from foreign code.")
    } else if record.is_boxed {
        format!("Boxed {kind} `{c_type}`, {} bytes.", record.size)
    } else {
        format!("Plain {kind} `{c_type}`, {} bytes.", record.size)
    }];

    if !skipped_fields.is_empty() {
        docs.push(String::new());
        docs.push("Fields without accessors:".to_string());
        for (field_name, err) in skipped_fields {
            docs.push(format!("* `{field_name}`: {err}"));
        }
    }

    docs
}

fn make_zero_constructor(record: &Record, fn_prefix: &str, rt: &TokenStream) -> TokenStream {
    // Opaque records cannot be allocated from Rust.
    if record.size == 0 {
        return TokenStream::new();
    }

    let name = &record.name.rust_ty;
    let constructor = conv::make_zero_constructor_name(fn_prefix);
    let doc = format!(
        "Allocates a zero-filled `{}`.\n\n# Panics\nIf the allocator fails.",
        record.name.gi_ty
    );

    quote! {
        impl #rt::obj::Construct for #name {
            type Class = #name;

            fn construct_with(
                interface: &#rt::obj::InterfaceRef,
                ops: Vec<#rt::obj::AttrOp<Self, #rt::obj::ForNew>>,
            ) -> Result<Self, #rt::meta::error::AttrError> {
                #rt::obj::construct_zeroed(interface, ops)
            }
        }

        #[doc = #doc]
        pub fn #constructor() -> #name {
            #rt::obj::new_zeroed()
        }
    }
}

fn make_field_accessors(
    record: &Record,
    fn_prefix: &str,
    field: &Field,
    callbacks: &GeneratedCallbacks,
    ctx: &Context,
) -> Result<TokenStream, AccessorError> {
    let rt = ctx.runtime_path();
    let access = conv::to_field_access(&field.ty, ctx)?;

    if let FieldAccess::Callback(callback) = &access {
        if let Some(err) = callbacks.unsupported.get(&callback.to_string()) {
            return Err(err.clone());
        }
    }

    let name = &record.name.rust_ty;
    let reader = conv::make_field_reader_name(fn_prefix, &field.name);
    let offset = Literal::usize_unsuffixed(field.offset);
    let read_doc = format!("Reads `{}.{}` (`{}`).", record.name.gi_ty, field.name, field.ty);

    let read_fn = match &access {
        FieldAccess::Value(ty) => quote! {
            #[doc = #read_doc]
            pub fn #reader(instance: &#name) -> #ty {
                #rt::obj::read_field(instance, #offset)
            }
        },
        FieldAccess::Pointer => quote! {
            #[doc = #read_doc]
            pub fn #reader(instance: &#name) -> RawPtr {
                #rt::obj::read_field(instance, #offset)
            }
        },
        FieldAccess::String => quote! {
            #[doc = #read_doc]
            ///
            /// The string is copied; ownership of the C string stays with the struct.
            pub fn #reader(instance: &#name) -> Option<String> {
                #rt::obj::read_string_field(instance, #offset)
            }
        },
        FieldAccess::Callback(callback) => quote! {
            #[doc = #read_doc]
            ///
            /// # Safety
            /// The field must be null or hold a function with the signature described by the callback type.
            pub unsafe fn #reader(instance: &#name) -> super::#callback {
                unsafe { #rt::obj::read_callback_field(instance, #offset) }
            }
        },
    };

    let write_fn = if ctx.config().emit_field_writers && access.is_writable() {
        let writer = conv::make_field_writer_name(fn_prefix, &field.name);
        let write_doc = format!("Writes `{}.{}`.", record.name.gi_ty, field.name);
        let value_ty = match &access {
            FieldAccess::Value(ty) => ty.clone(),
            _ => quote! { RawPtr },
        };

        quote! {
            #[doc = #write_doc]
            pub fn #writer(instance: &mut #name, value: #value_ty) {
                #rt::obj::write_field(instance, #offset, value)
            }
        }
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        #read_fn
        #write_fn
    })
}
