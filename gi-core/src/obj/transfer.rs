/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use crate::meta::Value;
use crate::obj::Attribute;

/// Result of an attribute's transfer operation, waiting to be assigned.
///
/// May own foreign memory that only the receiving object will release. Pass it to
/// [`assign_transferred()`][crate::obj::AttrExt::assign_transferred]; if it is dropped instead, the memory leaks and a
/// warning is logged.
#[must_use = "the transferred value leaks unless it is assigned"]
pub struct Transferred<A: Attribute> {
    value: Value,
    _attr: PhantomData<A>,
}

impl<A: Attribute> Transferred<A> {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value,
            _attr: PhantomData,
        }
    }

    /// The value to be assigned.
    pub fn value(&self) -> &Value {
        &self.value
    }

    // Leaves Nil behind, which Drop does not report.
    pub(crate) fn into_value(mut self) -> Value {
        std::mem::take(&mut self.value)
    }
}

impl<A: Attribute> Drop for Transferred<A> {
    fn drop(&mut self) {
        if !self.value.is_nil() {
            let descriptor = A::DESCRIPTOR;
            crate::gi_warn!(
                "transferred value for attribute `{}` of `{}` was dropped without being assigned; its memory leaks",
                descriptor.label(),
                descriptor.origin()
            );
        }
    }
}

impl<A: Attribute> fmt::Debug for Transferred<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transferred")
            .field("attribute", &A::DESCRIPTOR.label())
            .field("value", &self.value)
            .finish()
    }
}
