/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Errors in the attribute protocol and in value conversions.

mod attr_error;
mod convert_error;

pub use attr_error::{AttrError, CapabilityError, ForeignError};
pub use convert_error::ConvertError;

pub(crate) use convert_error::ErrorKind;
