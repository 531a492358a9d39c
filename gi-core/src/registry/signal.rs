/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::meta::ClassName;

/// Static description of a signal.
///
/// Signals are passed through to the foreign signal subsystem as they are; only the name and the class that introduced
/// them are known here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignalInfo {
    name: &'static str,
    origin: ClassName,
}

impl SignalInfo {
    pub const fn new(name: &'static str, origin: ClassName) -> Self {
        Self { name, origin }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn origin(&self) -> ClassName {
        self.origin
    }
}
