/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[allow(clippy::module_inception)]
mod special_cases;

// Content not in mod.rs to find the file quicker.
pub use special_cases::*;
