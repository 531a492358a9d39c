/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Meta-information about values, attribute capabilities and class names.

mod capability;
mod class_name;
mod convert;
mod value;

pub mod error;

pub use capability::{Capability, CapabilitySet};
pub use class_name::ClassName;
pub use convert::{FromValue, ToValue};
pub use value::{ListKind, NullRepr, Value, ValueType};
