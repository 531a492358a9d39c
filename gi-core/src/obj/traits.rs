/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::meta::{ClassName, FromValue, ToValue};
use crate::registry::{AttrDescriptor, ClassInfo, SignalInfo};

/// Type described by introspection data: a class, interface, struct or union.
///
/// Normally, you don't implement this trait yourself; use [`class!`][crate::class] or generated code instead.
#[diagnostic::on_unimplemented(
    message = "only introspected types are allowed in this context",
    note = "you can use `gi::class!` to declare a class, or generate struct bindings with `gi-codegen`"
)]
pub trait GiClass: 'static {
    const CLASS_INFO: &'static ClassInfo;

    fn class_name() -> ClassName {
        Self::CLASS_INFO.name()
    }
}

/// Non-strict inheritance relationship between classes.
///
/// `Derived: Inherits<Base>` means that `Derived` is a subclass of `Base`, implements the interface `Base`, or is `Base`
/// itself. Inheritance is transitive: every indirect ancestor has its own impl.
///
/// # Safety
/// Instances of `Self` must be valid instances of `Base` for the foreign object system. Attribute operations of `Base`
/// are invoked on `Self` instances without further checks.
pub unsafe trait Inherits<Base: GiClass>: GiClass {}

// SAFETY: every class is an instance of itself.
unsafe impl<T: GiClass> Inherits<T> for T {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Zero-sized handle for one attribute of one class.
///
/// Resolves to a static [`AttrDescriptor`] at compile time, so access through a handle needs no name lookup. Declared with
/// [`attributes!`][crate::attributes].
pub trait Attribute: Copy + 'static {
    /// Class that introduced the attribute.
    type Owner: GiClass;

    /// Type returned by a read.
    type Value: FromValue;

    /// Type accepted by writes and construction.
    type Input: ToValue;

    /// Type accepted by transferring writes, before the descriptor's transfer operation is applied.
    type TransferInput: ToValue;

    const DESCRIPTOR: &'static AttrDescriptor;
}

/// Attribute supporting [`Capability::Get`][crate::meta::Capability::Get].
#[diagnostic::on_unimplemented(
    message = "attribute `{Self}` cannot be read",
    label = "does not have the `get` capability"
)]
pub trait Readable: Attribute {}

/// Attribute supporting [`Capability::Set`][crate::meta::Capability::Set].
#[diagnostic::on_unimplemented(
    message = "attribute `{Self}` cannot be written after construction",
    label = "does not have the `set` capability"
)]
pub trait Writable: Attribute {}

/// Attribute supporting [`Capability::Construct`][crate::meta::Capability::Construct].
#[diagnostic::on_unimplemented(
    message = "attribute `{Self}` cannot be provided at construction",
    label = "does not have the `construct` capability"
)]
pub trait Constructible: Attribute {}

/// Attribute supporting [`Capability::Clear`][crate::meta::Capability::Clear].
#[diagnostic::on_unimplemented(
    message = "attribute `{Self}` cannot be cleared",
    label = "does not have the `clear` capability",
    note = "only nullable attributes can be cleared"
)]
pub trait Clearable: Attribute {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Zero-sized handle for one signal of one class. Declared with [`signals!`][crate::signals].
pub trait Signal: Copy + 'static {
    type Owner: GiClass;

    const INFO: &'static SignalInfo;
}
