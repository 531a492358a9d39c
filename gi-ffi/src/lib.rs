/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Low-level access to foreign (C) memory, as handed out by GObject-based libraries.
//!
//! This crate knows nothing about attributes or classes. It provides:
//! * [`ManagedPtr`], an owning handle over a block of raw memory with boxed or plain disposal.
//! * [`Allocator`] and the default [`HostAllocator`] (libc-backed zeroed allocation).
//! * [`FfiPeek`], typed reads and writes at byte offsets inside such blocks.
//! * Null and ownership-transfer vocabulary: [`NullableFfi`], [`TransferMode`].

#![cfg_attr(test, allow(unused))]

mod ffi_traits;
mod managed;
mod peek;
mod toolbox;

pub use crate::ffi_traits::{NullableFfi, TransferMode};
pub use crate::managed::{AllocError, AllocKind, Allocator, HostAllocator, ManagedPtr};
pub use crate::peek::{peek, peek_copy, poke, FfiPeek};
pub use crate::toolbox::*;

/// Untyped pointer into foreign memory, equivalent to C `gpointer`.
pub type RawPtr = *mut std::ffi::c_void;

/// Untyped read-only pointer into foreign memory, equivalent to C `gconstpointer`.
pub type ConstRawPtr = *const std::ffi::c_void;
