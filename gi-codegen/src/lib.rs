/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Generator for struct and union field layouts described by GObject introspection data.
//!
//! Input is a JSON dump of one introspection namespace (records with their size, boxed flag and fields at byte offsets).
//! Output is one Rust file per record with a handle type, typed field accessors and a zero-initializing constructor, plus
//! `callbacks.rs` for function-pointer fields and a `mod.rs` tying them together.

// Trace output of the generator; counterpart of the runtime's `out!`.
#[cfg(feature = "trace")]
macro_rules! trace {
    ($fmt:literal $(, $($arg:tt)*)?) => (println!($fmt $(, $($arg)*)?));
}

#[cfg(not(feature = "trace"))]
macro_rules! trace {
    ($fmt:literal $(, $($arg:tt)*)?) => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt $(, $($arg)*)?); });
}

pub(crate) use trace;

mod context;
mod conv;
mod generator;
mod models;
mod special_cases;
mod util;
mod watch;


use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;

use crate::context::Context;
use crate::models::domain::Namespace;
use crate::models::json::parse_namespace;

pub use crate::conv::AccessorError;
pub use crate::watch::StopWatch;

pub type SubmitFn = dyn FnMut(PathBuf, TokenStream);

fn write_file(path: &Path, contents: String) {
    let dir = path.parent().unwrap();
    let _ = std::fs::create_dir_all(dir);

    std::fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write code file to {};\n\t{}", path.display(), e));
}

#[cfg(feature = "codegen-rustfmt")]
fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, format_with_rustfmt(tokens));
}

#[cfg(not(feature = "codegen-rustfmt"))]
fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, tokens.to_string());
}

/// Pipes the tokens through `rustfmt` if it is on the `PATH`; otherwise returns them unformatted.
#[cfg(feature = "codegen-rustfmt")]
fn format_with_rustfmt(tokens: TokenStream) -> String {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let unformatted = tokens.to_string();
    let Ok(rustfmt) = which::which("rustfmt") else {
        trace!("rustfmt not found, writing unformatted code");
        return unformatted;
    };

    let child = Command::new(rustfmt)
        .args(["--edition", "2021"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn();

    let Ok(mut child) = child else {
        return unformatted;
    };

    if let Some(mut stdin) = child.stdin.take() {
        if stdin.write_all(unformatted.as_bytes()).is_err() {
            return unformatted;
        }
    }

    match child.wait_with_output() {
        Ok(output) if output.status.success() => {
            String::from_utf8(output.stdout).unwrap_or(unformatted)
        }
        _ => unformatted,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Configuration and results

/// Settings of one codegen run.
#[derive(Clone, Debug)]
pub struct CodegenConfig {
    /// Path of the runtime crate as seen from the generated code, e.g. `::gi` or `::gi_core`.
    pub runtime_crate: String,

    /// Generate `<record>_write_<field>` for plain value and pointer fields.
    pub emit_field_writers: bool,

    /// Records to skip, by GI name, in addition to private and class structs.
    pub extra_excluded_structs: Vec<String>,

    /// Write `codegen-stats.txt` next to the generated files.
    pub write_stats: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime_crate: "::gi".to_string(),
            emit_field_writers: true,
            extra_excluded_structs: vec![],
            write_stats: false,
        }
    }
}

impl CodegenConfig {
    pub fn with_runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    pub fn with_field_writers(mut self, enabled: bool) -> Self {
        self.emit_field_writers = enabled;
        self
    }

    pub fn with_excluded_struct(mut self, gi_name: impl Into<String>) -> Self {
        self.extra_excluded_structs.push(gi_name.into());
        self
    }

    pub fn with_stats(mut self, enabled: bool) -> Self {
        self.write_stats = enabled;
        self
    }
}

/// What a codegen run produced.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodegenSummary {
    /// GI names of records with a generated file.
    pub records: Vec<String>,

    /// GI names of excluded records.
    pub excluded: Vec<String>,

    /// Rust names of emitted callback types.
    pub callbacks: Vec<String>,

    pub skipped_fields: Vec<SkippedField>,
}

/// Visible field that got no accessor.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SkippedField {
    pub record: String,
    pub field: String,
    pub reason: String,
}

#[derive(Debug)]
pub enum CodegenError {
    /// Introspection JSON could not be parsed.
    Json(nanoserde::DeJsonErr),

    /// [`CodegenConfig::runtime_crate`] is not a Rust path.
    InvalidRuntimePath(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid introspection JSON: {err}"),
            Self::InvalidRuntimePath(path) => write!(f, "runtime crate `{path}` is not a valid path"),
        }
    }
}

impl Error for CodegenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidRuntimePath(_) => None,
        }
    }
}

impl From<nanoserde::DeJsonErr> for CodegenError {
    fn from(err: nanoserde::DeJsonErr) -> Self {
        Self::Json(err)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Entry points

/// Generates record files for the namespace in `json` into `gen_path`.
///
/// Note: deletes the entire `gen_path` directory first.
pub fn generate_struct_files(
    json: &str,
    gen_path: &Path,
    config: &CodegenConfig,
) -> Result<CodegenSummary, CodegenError> {
    let mut watch = StopWatch::start();

    let _ = std::fs::remove_dir_all(gen_path);
    std::fs::create_dir_all(gen_path)
        .unwrap_or_else(|e| panic!("failed to create {};\n\t{}", gen_path.display(), e));

    let summary = generate_with(json, gen_path, config, &mut watch, &mut submit_fn)?;

    if config.write_stats {
        watch.write_stats_to(&gen_path.join("codegen-stats.txt"));
    }

    Ok(summary)
}

/// Like [`generate_struct_files()`], but hands each file to `submit_fn` instead of writing it.
pub fn generate_struct_files_with(
    json: &str,
    gen_path: &Path,
    config: &CodegenConfig,
    submit_fn: &mut SubmitFn,
) -> Result<CodegenSummary, CodegenError> {
    let mut watch = StopWatch::start();

    generate_with(json, gen_path, config, &mut watch, submit_fn)
}

fn generate_with(
    json: &str,
    gen_path: &Path,
    config: &CodegenConfig,
    watch: &mut StopWatch,
    submit_fn: &mut SubmitFn,
) -> Result<CodegenSummary, CodegenError> {
    let runtime_path = util::parse_path(&config.runtime_crate)
        .ok_or_else(|| CodegenError::InvalidRuntimePath(config.runtime_crate.clone()))?;

    let json_namespace = parse_namespace(json)?;
    watch.record("parse_json");

    let mut namespace = Namespace::from_json(&json_namespace);
    drop(json_namespace);
    watch.record("map_domain_models");

    let extracted = generator::callbacks::extract_callback_fields(&mut namespace.records, config);
    watch.record("extract_callbacks");

    let ctx = Context::build(&namespace, config, runtime_path);
    watch.record("build_context");

    trace!("generate {} records of namespace {}", namespace.records.len(), namespace.name);
    let summary = generator::generate_record_files(&namespace, &extracted, &ctx, gen_path, submit_fn);
    watch.record("generate_record_files");

    Ok(summary)
}
