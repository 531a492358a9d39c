/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::meta::error::AttrError;
use crate::obj::{AttrOp, ForNew, GiClass, InterfaceRef};

/// Types that can be instantiated from a batch of construction-time operations.
///
/// Objects turn attribute operations into construction tokens for the foreign bulk constructor, and connect signals
/// afterwards. Structs and unions allocate zeroed memory and only apply signal operations, since they have no attributes.
pub trait Construct: Sized {
    /// Class whose operations are accepted.
    type Class: GiClass;

    fn construct_with(
        interface: &InterfaceRef,
        ops: Vec<AttrOp<Self::Class, ForNew>>,
    ) -> Result<Self, AttrError>;
}

/// Instantiates `T` from a batch of construction-time operations.
///
/// ```ignore
/// let button: Obj<Button> = new_with(&iface, [ButtonLabel.init("OK"), ButtonClicked.connect(on_click)])?;
/// let point: Point = new_with(&iface, [])?;
/// ```
pub fn new_with<T: Construct>(
    interface: &InterfaceRef,
    ops: impl IntoIterator<Item = AttrOp<T::Class, ForNew>>,
) -> Result<T, AttrError> {
    T::construct_with(interface, ops.into_iter().collect())
}
