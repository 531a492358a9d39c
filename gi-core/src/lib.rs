/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Runtime part of the `gi` bindings.
//!
//! * [`meta`]: capabilities, dynamic [`Value`][meta::Value]s and conversions between them and Rust types.
//! * [`registry`]: static descriptions of classes, attributes and signals.
//! * [`obj`]: object and struct handles, and the attribute access and construction protocols operating on them.

pub mod log;
pub mod meta;
pub mod obj;
pub mod registry;

mod macros;

pub use gi_ffi as sys;

#[doc(hidden)]
pub use gi_ffi::out;

#[doc(hidden)]
pub mod private {
    pub use crate::registry::property::{
        property_clear, property_construct, property_get, property_set, transfer_cstring,
        transfer_identity,
    };
}
