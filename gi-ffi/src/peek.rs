/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_char;

use crate::{offset_ptr, RawPtr};

/// Types that can be read from and written to a fixed byte offset of a foreign memory block.
///
/// `Repr` is the exact C representation stored in memory; a read touches precisely `size_of::<Repr>()` bytes.
///
/// # Safety
/// Every bit pattern of `Repr` that C code may legitimately store must be accepted by [`from_repr()`][Self::from_repr]
/// without undefined behavior.
pub unsafe trait FfiPeek: Sized {
    type Repr: Copy;

    fn from_repr(repr: Self::Repr) -> Self;

    fn to_repr(&self) -> Self::Repr;
}

/// Reads a `T` at `base + offset`, without alignment requirements.
///
/// # Safety
/// `base + offset .. base + offset + size_of::<T::Repr>()` must lie within a live allocation.
#[inline]
pub unsafe fn peek<T: FfiPeek>(base: RawPtr, offset: usize) -> T {
    let addr = offset_ptr(base, offset).cast::<T::Repr>();
    T::from_repr(std::ptr::read_unaligned(addr))
}

/// Writes a `T` at `base + offset`, without alignment requirements.
///
/// # Safety
/// Same as [`peek()`]; additionally no other view may read those bytes concurrently.
#[inline]
pub unsafe fn poke<T: FfiPeek>(base: RawPtr, offset: usize, value: T) {
    let addr = offset_ptr(base, offset).cast::<T::Repr>();
    std::ptr::write_unaligned(addr, value.to_repr())
}

/// Reads any `Copy` value verbatim at `base + offset`. Used for function-pointer fields, whose types are generated per struct.
///
/// # Safety
/// Same as [`peek()`]; additionally the bytes must form a valid `T`.
#[inline]
pub unsafe fn peek_copy<T: Copy>(base: RawPtr, offset: usize) -> T {
    std::ptr::read_unaligned(offset_ptr(base, offset).cast::<T>())
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementations

macro_rules! impl_ffi_peek_as_self {
    ($($T:ty),* $(,)?) => {
        $(
            unsafe impl FfiPeek for $T {
                type Repr = $T;

                #[inline]
                fn from_repr(repr: Self::Repr) -> Self {
                    repr
                }

                #[inline]
                fn to_repr(&self) -> Self::Repr {
                    *self
                }
            }
        )*
    };
}

impl_ffi_peek_as_self!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, isize, usize);
impl_ffi_peek_as_self!(RawPtr, *const std::ffi::c_void, *const c_char, *mut c_char);

// gboolean is a C int; any non-zero value is true.
unsafe impl FfiPeek for bool {
    type Repr = i32;

    fn from_repr(repr: i32) -> Self {
        repr != 0
    }

    fn to_repr(&self) -> i32 {
        *self as i32
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AllocKind, ManagedPtr};
    use proptest::prelude::*;

    #[test]
    fn peek_reads_at_offset() {
        let block = ManagedPtr::calloc(16, AllocKind::Plain).unwrap();

        block.with_ptr(|p| unsafe {
            poke::<i32>(p, 0, -5);
            poke::<i32>(p, 4, 17);
            poke::<bool>(p, 8, true);
        });

        let (x, y, flag) = block.with_ptr(|p| unsafe {
            (peek::<i32>(p, 0), peek::<i32>(p, 4), peek::<bool>(p, 8))
        });

        assert_eq!((x, y, flag), (-5, 17, true));
    }

    #[test]
    fn gboolean_nonzero_is_true() {
        let block = ManagedPtr::calloc(4, AllocKind::Plain).unwrap();
        block.with_ptr(|p| unsafe { poke::<i32>(p, 0, 2) });

        assert!(block.with_ptr(|p| unsafe { peek::<bool>(p, 0) }));
    }

    proptest! {
        // A read at offset k sees exactly bytes [k, k + 4), regardless of what surrounds them.
        #[test]
        fn peek_is_confined_to_its_bytes(offset in 0usize..28, value: u32, noise: u8) {
            let block = ManagedPtr::calloc(32, AllocKind::Plain).unwrap();

            block.with_ptr(|p| unsafe {
                std::ptr::write_bytes(p.cast::<u8>(), noise, 32);
                poke::<u32>(p, offset, value);
            });

            let read = block.with_ptr(|p| unsafe { peek::<u32>(p, offset) });
            prop_assert_eq!(read, value);

            let bytes = block.as_bytes();
            for (i, &b) in bytes.iter().enumerate() {
                if i < offset || i >= offset + 4 {
                    prop_assert_eq!(b, noise);
                }
            }
        }
    }
}
