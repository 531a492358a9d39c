/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The **gi** library gives typed Rust access to GObject classes, interfaces, structs and unions described by
//! introspection data.
//!
//! # Attributes
//!
//! Every attribute (GObject property) is represented by a zero-sized handle type, such as `ButtonLabel`. The handle
//! knows its value type and which operations the attribute supports: `get`, `set`, `construct` and `clear`. Operations
//! outside that set do not compile:
//!
//! ```ignore
//! let label: Option<String> = button.get(ButtonLabel)?;
//! button.set([ButtonLabel.assign("OK"), WidgetMargin.update(|m| m + 4)])?;
//! button.set([WidgetWidth.assign(100)])?; // error: `width` is read-only
//! ```
//!
//! Batches passed to [`Obj::set()`][obj::Obj::set] run left to right. The first failing operation aborts the rest;
//! earlier ones stay applied.
//!
//! For attribute names only known at runtime, [`Obj::get_by_name()`][obj::Obj::get_by_name] and friends perform the
//! same capability checks against the class registry and report violations as [`AttrError`][meta::error::AttrError].
//!
//! # Construction
//!
//! [`new_with()`][obj::new_with] instantiates objects from construction-time attribute values in one foreign call,
//! then connects signal handlers in order. Structs and unions use the same entry point: they are allocated zero-filled
//! and only accept signal operations.
//!
//! # Structs and unions
//!
//! Struct and union handles, with one read accessor per visible field, are generated from introspection data by the
//! `gi-codegen` crate, usually from a build script.
//!
//! # Cargo features
//!
//! * **`serde`**
//!
//!   Implement `Serialize` for values, value types and attribute descriptors. The serialized representation underlies
//!   **no stability guarantees**.
//!
//! # Public API
//!
//! The following API symbols are considered private:
//!
//! * Symbols annotated with `#[doc(hidden)]`.
//! * Any of the dependency crates (crate `gi` is the only public interface).
//! * Modules named `private` and all their contents.

#[doc(inline)]
pub use gi_core::{log, meta, obj, registry};

#[doc(hidden)]
pub use gi_core::sys;

#[doc(hidden)]
pub use gi_core::private;

/// Declaration macros for classes, attributes and signals.
pub use gi_core::{attributes, class, signals};

/// Often-imported symbols.
pub mod prelude;
