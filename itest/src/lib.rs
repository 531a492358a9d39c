/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Structs generated by `gi-codegen` from `introspection/Demo.json`, exercised against the `gi` runtime in `tests/`.

#[allow(dead_code, clippy::all)]
pub mod gen;
