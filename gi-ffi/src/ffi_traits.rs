/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Ownership transfer mode of a value crossing the FFI boundary, as annotated in introspection data.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TransferMode {
    /// The receiver borrows the value; the sender keeps ownership. Reads never obligate the caller to free anything.
    #[default]
    None,

    /// The receiver owns the container (e.g. the list nodes), but not the elements.
    Container,

    /// The receiver owns the value and everything it references.
    Full,
}

impl TransferMode {
    /// Whether the receiver becomes responsible for releasing at least part of the value.
    pub fn transfers_ownership(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Parses the `transfer-ownership` annotation used in GIR files.
    pub fn from_gir(annotation: &str) -> Option<Self> {
        match annotation {
            "none" => Some(Self::None),
            "container" => Some(Self::Container),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Container => "container",
            Self::Full => "full",
        };
        f.write_str(s)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Types that can represent null-values.
///
/// Used to blanket implement conversions over `Option<T>`: a foreign null becomes `None`, and `None` becomes the foreign null.
/// This is deliberately separate from "no value at all", which is a concern of the higher layers.
pub trait NullableFfi: Sized {
    /// The foreign null representation.
    fn null() -> Self;

    fn is_null(&self) -> bool;

    fn flatten_option(opt: Option<Self>) -> Self {
        opt.unwrap_or_else(Self::null)
    }

    fn into_option(self) -> Option<Self> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }
}

impl<T> NullableFfi for *mut T {
    fn null() -> Self {
        std::ptr::null_mut()
    }

    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T> NullableFfi for *const T {
    fn null() -> Self {
        std::ptr::null()
    }

    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_mode_parse() {
        assert_eq!(TransferMode::from_gir("none"), Some(TransferMode::None));
        assert_eq!(TransferMode::from_gir("full"), Some(TransferMode::Full));
        assert_eq!(TransferMode::from_gir("container"), Some(TransferMode::Container));
        assert_eq!(TransferMode::from_gir("floating"), None);

        assert!(!TransferMode::None.transfers_ownership());
        assert!(TransferMode::Container.transfers_ownership());
    }

    #[test]
    fn nullable_option_mapping() {
        let null: *mut u8 = NullableFfi::null();
        assert!(null.into_option().is_none());

        let mut byte = 0_u8;
        let ptr: *mut u8 = &mut byte;
        assert_eq!(ptr.into_option(), Some(ptr));
        assert!(<*mut u8 as NullableFfi>::flatten_option(None).is_null());
    }
}
