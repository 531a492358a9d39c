/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;

use proc_macro2::TokenStream;
use regex::Regex;

use crate::conv::CType;
use crate::models::domain::Namespace;
use crate::CodegenConfig;

pub(crate) struct Context<'a> {
    config: &'a CodegenConfig,

    /// Path of the runtime crate in generated code, e.g. `::gi`.
    runtime_path: TokenStream,

    /// GI names and C types of all records in the namespace.
    records: HashSet<String>,

    c_type_regex: Regex,
}

impl<'a> Context<'a> {
    pub fn build(namespace: &Namespace, config: &'a CodegenConfig, runtime_path: TokenStream) -> Self {
        let mut records = HashSet::new();
        for record in namespace.records.iter() {
            records.insert(record.name.gi_ty.clone());
            if let Some(c_type) = &record.c_type {
                records.insert(c_type.clone());
            }
        }

        // Base identifier, followed by any sequence of spaces, `*` and `const`. Qualifiers before the base are limited to one `const`.
        let c_type_regex = Regex::new(r"^(?:const +)?([A-Za-z_][A-Za-z0-9_]*)((?: |\*|const)*)$")
            .expect("C type regex");

        Self {
            config,
            runtime_path,
            records,
            c_type_regex,
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        self.config
    }

    pub fn runtime_path(&self) -> &TokenStream {
        &self.runtime_path
    }

    pub fn is_record(&self, name: &str) -> bool {
        self.records.contains(name)
    }

    /// Splits a C type such as `const gchar *` into base name and pointer depth. `None` if it is not a simple declarator.
    pub fn parse_c_type<'s>(&self, c_type: &'s str) -> Option<CType<'s>> {
        let caps = self.c_type_regex.captures(c_type.trim())?;
        let base = caps.get(1)?.as_str();
        let pointer_depth = caps.get(2).map_or(0, |m| m.as_str().matches('*').count());

        Some(CType {
            base,
            pointer_depth,
        })
    }
}
