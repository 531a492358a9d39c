/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use gi_codegen::{generate_struct_files, CodegenConfig};

fn main() {
    // Generated into the source tree, so IDEs can resolve the symbols.
    let gen_path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src/gen"));
    let json_path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/introspection/Demo.json"));

    let json = std::fs::read_to_string(json_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", json_path.display()));

    let config = CodegenConfig::default().with_stats(true);
    generate_struct_files(&json, gen_path, &config)
        .unwrap_or_else(|e| panic!("codegen failed: {e}"));

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=introspection/Demo.json");
}
