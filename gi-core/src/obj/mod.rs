/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Object and struct handles, and the protocols operating on them.
//!
//! Attribute access goes through zero-sized attribute handles (types implementing [`Attribute`]). Which operations an
//! attribute permits is expressed by the marker traits [`Readable`], [`Writable`], [`Constructible`] and [`Clearable`], so
//! the compiler rejects e.g. a `set` on a read-only attribute. The same check is repeated at runtime against the attribute's
//! [`AttrDescriptor`][crate::registry::AttrDescriptor], which is the only check on the by-name path.

mod access;
mod attr_op;
mod construct;
mod interface;
mod object;
mod raw;
mod structs;
mod traits;
mod transfer;

pub use access::construct_by_name;
pub use attr_op::{AttrExt, AttrOp, ForNew, ForSet, OpContext, SignalExt};
pub use construct::{new_with, Construct};
pub use interface::{
    ConstructParam, HandlerId, InterfaceRef, ObjectInterface, SignalHandler,
};
pub use object::Obj;
pub use raw::{ObjectPtr, RawObject};
pub use structs::{
    construct_zeroed, new_zeroed, new_zeroed_in, read_callback_field, read_field,
    read_string_field, write_field, StructType,
};
pub use traits::{
    Attribute, Clearable, Constructible, GiClass, Inherits, Readable, Signal, Writable,
};
pub use transfer::Transferred;

pub use crate::meta::error::ForeignError;
