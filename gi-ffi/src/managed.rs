/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;
use std::ptr::NonNull;

use crate::RawPtr;

/// How a block of foreign memory was allocated, which also decides how it is released.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AllocKind {
    /// Plain heap block (`g_malloc0`/`g_free`). Cloning the handle copies the bytes.
    Plain,

    /// Reference-counted boxed block (`g_boxed_copy`/`g_boxed_free`). Cloning the handle shares the bytes.
    Boxed,
}

/// Error returned by an [`Allocator`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AllocError {
    /// Zero-sized types never get a backing allocation.
    ZeroSize,

    /// The C allocator returned null.
    OutOfMemory { size: usize },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "refusing to allocate a zero-sized foreign block"),
            Self::OutOfMemory { size } => write!(f, "foreign allocation of {size} bytes failed"),
        }
    }
}

impl Error for AllocError {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Allocators

/// Source of zero-initialized foreign memory blocks.
///
/// The allocator decides *whether* and *how often* memory is obtained; release is always done by the returned [`ManagedPtr`]
/// according to its [`AllocKind`].
pub trait Allocator {
    fn alloc_zeroed(&self, size: usize, kind: AllocKind) -> Result<ManagedPtr, AllocError>;
}

/// Allocator using the C heap (`calloc`), matching what GLib uses on all supported platforms.
#[derive(Copy, Clone, Default, Debug)]
pub struct HostAllocator;

impl Allocator for HostAllocator {
    fn alloc_zeroed(&self, size: usize, kind: AllocKind) -> Result<ManagedPtr, AllocError> {
        ManagedPtr::calloc(size, kind)
    }
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn alloc_zeroed(&self, size: usize, kind: AllocKind) -> Result<ManagedPtr, AllocError> {
        (**self).alloc_zeroed(size, kind)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// ManagedPtr

// Boxed blocks carry their reference count in a header in front of the payload. 16 bytes keep the payload aligned like
// `max_align_t` on all 64-bit targets.
const BOXED_HEADER: usize = 16;

/// Owning handle over a block of foreign memory.
///
/// The raw pointer is only ever exposed for the duration of a closure (see [`with_ptr()`][Self::with_ptr]), so a view can never
/// outlive the call that created it. Drop releases the block: plain blocks are freed immediately, boxed blocks once the last
/// handle is gone.
pub struct ManagedPtr {
    payload: NonNull<u8>,
    size: usize,
    kind: AllocKind,
}

impl ManagedPtr {
    /// Allocates `size` zero-filled bytes with the C allocator.
    pub fn calloc(size: usize, kind: AllocKind) -> Result<Self, AllocError> {
        if size == 0 {
            return Err(AllocError::ZeroSize);
        }

        let total = match kind {
            AllocKind::Plain => Some(size),
            AllocKind::Boxed => size.checked_add(BOXED_HEADER),
        };
        let Some(total) = total else {
            return Err(AllocError::OutOfMemory { size });
        };

        // SAFETY: calloc accepts any non-zero size; null is handled below.
        let block = unsafe { libc::calloc(1, total) }.cast::<u8>();
        let Some(block) = NonNull::new(block) else {
            return Err(AllocError::OutOfMemory { size });
        };

        let payload = match kind {
            AllocKind::Plain => block,
            AllocKind::Boxed => {
                // SAFETY: block has at least BOXED_HEADER bytes, aligned by calloc for usize.
                unsafe {
                    block.cast::<usize>().as_ptr().write(1);
                    NonNull::new_unchecked(block.as_ptr().add(BOXED_HEADER))
                }
            }
        };

        crate::out!("  ManagedPtr::calloc: {size} bytes ({kind:?}) at {:p}", payload);
        Ok(Self {
            payload,
            size,
            kind,
        })
    }

    /// Number of payload bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn kind(&self) -> AllocKind {
        self.kind
    }

    /// Current reference count for boxed blocks; always 1 for plain blocks.
    pub fn ref_count(&self) -> usize {
        match self.kind {
            AllocKind::Plain => 1,
            // SAFETY: boxed header is initialized in calloc() and lives as long as any handle.
            AllocKind::Boxed => unsafe { *self.refcount_ptr() },
        }
    }

    /// Runs `f` with a raw view of the block. The pointer must not escape the closure.
    ///
    /// This is the only way to obtain the address, which ties every raw access to the lifetime of a borrow of the handle.
    pub fn with_ptr<R>(&self, f: impl FnOnce(RawPtr) -> R) -> R {
        f(self.payload.as_ptr().cast())
    }

    /// Read-only view of the payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: payload spans exactly `size` initialized (zeroed or written) bytes, kept alive by `self`.
        unsafe { std::slice::from_raw_parts(self.payload.as_ptr(), self.size) }
    }

    /// Whether two handles refer to the same block (only possible for boxed blocks).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }

    unsafe fn refcount_ptr(&self) -> *mut usize {
        self.payload.as_ptr().sub(BOXED_HEADER).cast()
    }
}

impl Clone for ManagedPtr {
    fn clone(&self) -> Self {
        match self.kind {
            AllocKind::Boxed => {
                // SAFETY: see ref_count().
                unsafe { *self.refcount_ptr() += 1 };

                Self {
                    payload: self.payload,
                    size: self.size,
                    kind: self.kind,
                }
            }
            AllocKind::Plain => {
                let copy = Self::calloc(self.size, AllocKind::Plain)
                    .unwrap_or_else(|e| panic!("ManagedPtr::clone(): {e}"));

                // SAFETY: both blocks are `size` bytes and distinct.
                unsafe {
                    std::ptr::copy_nonoverlapping(
                        self.payload.as_ptr(),
                        copy.payload.as_ptr(),
                        self.size,
                    );
                }
                copy
            }
        }
    }
}

impl Drop for ManagedPtr {
    fn drop(&mut self) {
        match self.kind {
            AllocKind::Plain => {
                // SAFETY: block originates from calloc() and is exclusively owned.
                unsafe { libc::free(self.payload.as_ptr().cast()) };
            }
            AllocKind::Boxed => {
                // SAFETY: header valid while any handle lives; we are one of them.
                unsafe {
                    let count = self.refcount_ptr();
                    *count -= 1;

                    if *count == 0 {
                        libc::free(count.cast());
                    }
                }
            }
        }
    }
}

impl fmt::Debug for ManagedPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedPtr")
            .field("ptr", &self.payload)
            .field("size", &self.size)
            .field("kind", &self.kind)
            .finish()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
