/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Functions and macros that are not very specific to GObject, but come in handy.

use std::ffi::{c_char, CStr, CString};
use std::ptr::NonNull;

use crate::AllocError;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros

/// Verifies a condition at compile time.
// https://blog.rust-lang.org/2021/12/02/Rust-1.57.0.html#panic-in-const-contexts
#[macro_export]
macro_rules! static_assert {
    ($cond:expr) => {
        const _: () = assert!($cond);
    };
    ($cond:expr, $msg:literal) => {
        const _: () = assert!($cond, $msg);
    };
}

/// Trace output.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! out {
    ()                          => (eprintln!());
    ($fmt:literal)              => (eprintln!($fmt));
    ($fmt:literal, $($arg:tt)*) => (eprintln!($fmt, $($arg)*));
}

/// Trace output.
#[cfg(not(feature = "trace"))]
// Sink-writing keeps the format arguments type-checked without printing anything.
#[macro_export]
macro_rules! out {
    ()                          => ({});
    ($fmt:literal)              => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt); });
    ($fmt:literal, $($arg:tt)*) => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt, $($arg)*); };)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Pointer utilities

/// If `ptr` is not null, returns `Some(mapper(ptr))`; otherwise `None`.
#[inline]
pub fn ptr_then<T, R, F>(ptr: *mut T, mapper: F) -> Option<R>
where
    F: FnOnce(*mut T) -> R,
{
    // Could also use NonNull in signature, but for this project we always deal with FFI raw pointers
    if ptr.is_null() {
        None
    } else {
        Some(mapper(ptr))
    }
}

/// Offsets an untyped pointer by `offset` bytes.
///
/// # Safety
/// `base + offset` must stay within (or one past) the allocation that `base` points into.
#[inline]
pub unsafe fn offset_ptr(base: crate::RawPtr, offset: usize) -> crate::RawPtr {
    base.cast::<u8>().add(offset).cast()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// C strings

/// Copies a C string into an owned Rust string without taking ownership of `ptr` (transfer none).
///
/// Returns `None` for a null pointer. Invalid UTF-8 is replaced lossily, as GLib does for display purposes.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that stays alive for the duration of the call.
pub unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }

    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Allocates a copy of `s` with the C allocator, for handing ownership to foreign code (transfer full).
///
/// The result must eventually be released with [`free_cstr`] or by the foreign side (`g_free`).
/// Interior NUL bytes truncate the string. Fails if the C allocator returns null.
pub fn cstr_new_full(s: &str) -> Result<NonNull<c_char>, AllocError> {
    let truncated = match s.find('\0') {
        Some(nul) => &s[..nul],
        None => s,
    };

    let owned = CString::new(truncated).unwrap_or_default();

    // SAFETY: `owned` is a valid NUL-terminated string; strdup copies it into malloc'ed memory.
    let ptr = unsafe { libc::strdup(owned.as_ptr()) };
    owned_or_oom(ptr, owned.as_bytes_with_nul().len())
}

fn owned_or_oom(ptr: *mut c_char, size: usize) -> Result<NonNull<c_char>, AllocError> {
    NonNull::new(ptr).ok_or(AllocError::OutOfMemory { size })
}

/// Releases a string previously returned by [`cstr_new_full`]. Null is ignored.
///
/// # Safety
/// `ptr` must be null or originate from the C allocator, and must not be used afterward.
pub unsafe fn free_cstr(ptr: *mut c_char) {
    if !ptr.is_null() {
        libc::free(ptr.cast());
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Tests
