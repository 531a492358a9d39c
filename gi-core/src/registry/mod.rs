/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Static descriptions of classes, their attributes and signals.
//!
//! Everything in here is `const`-constructible, so generated code and the [`class!`][crate::class] and
//! [`attributes!`][crate::attributes] macros can place it in `static` memory.

mod class;
mod descriptor;
mod signal;

pub mod property;

pub use class::{ClassInfo, TypeKind};
pub use descriptor::{
    AttrDescriptor, AttrDescriptorBuilder, ClearFn, ConstructFn, GetFn, RegistrationError, SetFn,
    TransferFn,
};
pub use signal::SignalInfo;
