/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use super::log::{gi_error, gi_print, gi_warn};
pub use super::meta::error::{AttrError, CapabilityError, ConvertError};
pub use super::meta::{Capability, FromValue, ToValue, Value, ValueType};
pub use super::obj::{
    new_with, Attribute, Construct, GiClass, Inherits, InterfaceRef, Obj, ObjectInterface, Signal,
    StructType,
};
// Re-export macros.
pub use super::{attributes, class, signals};

// Make trait methods available.
#[rustfmt::skip] // One per line.
mod trait_reexports {
    pub use crate::obj::AttrExt as _; // assign(), update(), init(), allocate_for_transfer()
    pub use crate::obj::SignalExt as _; // connect(), connect_after()
}

pub use trait_reexports::*;
