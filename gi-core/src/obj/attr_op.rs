/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use crate::meta::error::AttrError;
use crate::meta::{ToValue, Value};
use crate::obj::access::{resolve_attribute, resolve_signal};
use crate::obj::{
    Attribute, ConstructParam, Constructible, GiClass, Inherits, Readable, Signal,
    SignalHandler, Transferred, Writable,
};
use crate::registry::{AttrDescriptor, SignalInfo};

/// Marks operations applied to an existing instance, via `set()`.
pub enum ForSet {}

/// Marks operations applied while constructing an instance, via [`new_with()`][crate::obj::new_with].
pub enum ForNew {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ForSet {}
    impl Sealed for super::ForNew {}
}

/// Context in which an [`AttrOp`] is applied: [`ForSet`] or [`ForNew`].
pub trait OpContext: sealed::Sealed + 'static {}

impl OpContext for ForSet {}
impl OpContext for ForNew {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

type Producer = Box<dyn FnOnce() -> Result<Value, AttrError>>;
type Updater = Box<dyn FnOnce(Value) -> Result<Value, AttrError>>;

pub(crate) enum OpKind {
    Assign {
        attr: &'static AttrDescriptor,
        value: Value,
    },
    AssignWith {
        attr: &'static AttrDescriptor,
        producer: Producer,
    },
    Update {
        attr: &'static AttrDescriptor,
        update: Updater,
    },
    AssignTransfer {
        attr: &'static AttrDescriptor,
        raw: Value,
    },
    AssignTransferred {
        attr: &'static AttrDescriptor,
        value: Value,
    },
    Connect {
        signal: &'static SignalInfo,
        handler: SignalHandler,
        after: bool,
    },
}

impl fmt::Debug for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { attr, value } => write!(f, "Assign({} = {value:?})", attr.label()),
            Self::AssignWith { attr, .. } => write!(f, "AssignWith({})", attr.label()),
            Self::Update { attr, .. } => write!(f, "Update({})", attr.label()),
            Self::AssignTransfer { attr, raw } => {
                write!(f, "AssignTransfer({} = {raw:?})", attr.label())
            }
            Self::AssignTransferred { attr, .. } => write!(f, "AssignTransferred({})", attr.label()),
            Self::Connect { signal, after, .. } => {
                let mode = if *after { "ConnectAfter" } else { "Connect" };
                write!(f, "{mode}({})", signal.name())
            }
        }
    }
}

/// One step of a batch applied to an instance of class `C`.
///
/// Batches run strictly left to right. The first failing operation aborts the batch; effects of earlier operations are
/// kept. Typed operations are created through [`AttrExt`] and [`SignalExt`] on attribute and signal handles, which check
/// capabilities and class membership at compile time. The `*_by_name` constructors resolve at runtime instead.
#[must_use = "operations have no effect until passed to `set()` or a constructor"]
pub struct AttrOp<C, K = ForSet> {
    kind: OpKind,
    _marker: PhantomData<fn() -> (C, K)>,
}

impl<C: GiClass, K: OpContext> AttrOp<C, K> {
    pub(crate) fn from_kind(kind: OpKind) -> Self {
        Self {
            kind,
            _marker: PhantomData,
        }
    }

    pub(crate) fn into_kind(self) -> OpKind {
        self.kind
    }

    /// Connects a handler to signal `name` of `C`, before the default handler.
    pub fn connect_by_name<F>(name: &str, handler: F) -> Result<Self, AttrError>
    where
        F: FnMut(&[Value]) -> Option<Value> + 'static,
    {
        Ok(Self::from_kind(OpKind::Connect {
            signal: resolve_signal::<C>(name)?,
            handler: Box::new(handler),
            after: false,
        }))
    }

    /// Connects a handler to signal `name` of `C`, after the default handler.
    pub fn connect_after_by_name<F>(name: &str, handler: F) -> Result<Self, AttrError>
    where
        F: FnMut(&[Value]) -> Option<Value> + 'static,
    {
        Ok(Self::from_kind(OpKind::Connect {
            signal: resolve_signal::<C>(name)?,
            handler: Box::new(handler),
            after: true,
        }))
    }
}

impl<C: GiClass> AttrOp<C, ForSet> {
    /// Assigns `value` to attribute `label` of `C`. Fails only if the label is unknown; capabilities are checked when the
    /// operation is applied.
    pub fn assign_by_name(label: &str, value: impl ToValue) -> Result<Self, AttrError> {
        Ok(Self::from_kind(OpKind::Assign {
            attr: resolve_attribute::<C>(label)?,
            value: value.to_value(),
        }))
    }
}

impl<C: GiClass> AttrOp<C, ForNew> {
    /// Provides `value` for attribute `label` of `C` at construction time.
    pub fn init_by_name(label: &str, value: impl ToValue) -> Result<Self, AttrError> {
        Ok(Self::from_kind(OpKind::Assign {
            attr: resolve_attribute::<C>(label)?,
            value: value.to_value(),
        }))
    }
}

impl<C, K> fmt::Debug for AttrOp<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttrOp::{:?}", self.kind)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Operations on attribute handles.
///
/// Each method is only available if the attribute supports the required capabilities, and only for classes `C` that
/// inherit the attribute's owner.
pub trait AttrExt: Attribute {
    /// Writes `value`.
    fn assign<C>(self, value: impl Into<Self::Input>) -> AttrOp<C>
    where
        Self: Writable,
        C: Inherits<Self::Owner>,
    {
        AttrOp::from_kind(OpKind::Assign {
            attr: Self::DESCRIPTOR,
            value: value.into().to_value(),
        })
    }

    /// Writes the result of `producer`, which runs when the operation is reached in the batch.
    fn assign_with<C, F>(self, producer: F) -> AttrOp<C>
    where
        Self: Writable,
        C: Inherits<Self::Owner>,
        F: FnOnce() -> Result<Self::Input, AttrError> + 'static,
    {
        AttrOp::from_kind(OpKind::AssignWith {
            attr: Self::DESCRIPTOR,
            producer: Box::new(move || producer().map(|input| input.to_value())),
        })
    }

    /// Reads the current value, and writes `f(current)`.
    fn update<C, F>(self, f: F) -> AttrOp<C>
    where
        Self: Readable + Writable,
        C: Inherits<Self::Owner>,
        F: FnOnce(Self::Value) -> Self::Input + 'static,
    {
        let attr = Self::DESCRIPTOR;

        AttrOp::from_kind(OpKind::Update {
            attr,
            update: Box::new(move |current| {
                let current = attr.convert::<Self::Value>(current)?;
                Ok(f(current).to_value())
            }),
        })
    }

    /// Reads the current value, and writes the result of the action returned by `f(current)`.
    fn update_with<C, F, A>(self, f: F) -> AttrOp<C>
    where
        Self: Readable + Writable,
        C: Inherits<Self::Owner>,
        F: FnOnce(Self::Value) -> A + 'static,
        A: FnOnce() -> Result<Self::Input, AttrError> + 'static,
    {
        let attr = Self::DESCRIPTOR;

        AttrOp::from_kind(OpKind::Update {
            attr,
            update: Box::new(move |current| {
                let current = attr.convert::<Self::Value>(current)?;
                let action = f(current);
                action().map(|input| input.to_value())
            }),
        })
    }

    /// Writes `raw` after passing it through the attribute's transfer operation, which may allocate foreign memory that the
    /// object then owns.
    fn assign_transfer<C>(self, raw: impl Into<Self::TransferInput>) -> AttrOp<C>
    where
        Self: Writable,
        C: Inherits<Self::Owner>,
    {
        AttrOp::from_kind(OpKind::AssignTransfer {
            attr: Self::DESCRIPTOR,
            raw: raw.into().to_value(),
        })
    }

    /// Runs the transfer operation now, returning its result for a later [`assign_transferred()`][Self::assign_transferred].
    ///
    /// The returned value owns foreign memory that is only released by the object it is assigned to. Dropping it
    /// unassigned leaks that memory (and logs a warning).
    fn allocate_for_transfer(
        self,
        raw: impl Into<Self::TransferInput>,
    ) -> Result<Transferred<Self>, AttrError>
    where
        Self: Writable,
    {
        let value = Self::DESCRIPTOR.transfer(raw.into().to_value())?;
        Ok(Transferred::new(value))
    }

    /// Writes a value previously produced by [`allocate_for_transfer()`][Self::allocate_for_transfer].
    fn assign_transferred<C>(self, transferred: Transferred<Self>) -> AttrOp<C>
    where
        Self: Writable,
        C: Inherits<Self::Owner>,
    {
        AttrOp::from_kind(OpKind::AssignTransferred {
            attr: Self::DESCRIPTOR,
            value: transferred.into_value(),
        })
    }

    /// Provides `value` at construction time.
    fn init<C>(self, value: impl Into<Self::Input>) -> AttrOp<C, ForNew>
    where
        Self: Constructible,
        C: Inherits<Self::Owner>,
    {
        AttrOp::from_kind(OpKind::Assign {
            attr: Self::DESCRIPTOR,
            value: value.into().to_value(),
        })
    }

    /// Provides the result of `producer` at construction time.
    fn init_with<C, F>(self, producer: F) -> AttrOp<C, ForNew>
    where
        Self: Constructible,
        C: Inherits<Self::Owner>,
        F: FnOnce() -> Result<Self::Input, AttrError> + 'static,
    {
        AttrOp::from_kind(OpKind::AssignWith {
            attr: Self::DESCRIPTOR,
            producer: Box::new(move || producer().map(|input| input.to_value())),
        })
    }

    /// Provides `raw` at construction time, passed through the attribute's transfer operation.
    fn init_transfer<C>(self, raw: impl Into<Self::TransferInput>) -> AttrOp<C, ForNew>
    where
        Self: Constructible,
        C: Inherits<Self::Owner>,
    {
        AttrOp::from_kind(OpKind::AssignTransfer {
            attr: Self::DESCRIPTOR,
            raw: raw.into().to_value(),
        })
    }

    /// Produces a construction token for bulk instantiation through a foreign constructor.
    fn construct(self, value: impl Into<Self::Input>) -> Result<ConstructParam, AttrError>
    where
        Self: Constructible,
    {
        Self::DESCRIPTOR.make_param(value.into().to_value())
    }
}

impl<A: Attribute> AttrExt for A {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Operations on signal handles.
pub trait SignalExt: Signal {
    /// Connects `handler` to run before the default handler.
    fn connect<C, K, F>(self, handler: F) -> AttrOp<C, K>
    where
        C: Inherits<Self::Owner>,
        K: OpContext,
        F: FnMut(&[Value]) -> Option<Value> + 'static,
    {
        AttrOp::from_kind(OpKind::Connect {
            signal: Self::INFO,
            handler: Box::new(handler),
            after: false,
        })
    }

    /// Connects `handler` to run after the default handler.
    fn connect_after<C, K, F>(self, handler: F) -> AttrOp<C, K>
    where
        C: Inherits<Self::Owner>,
        K: OpContext,
        F: FnMut(&[Value]) -> Option<Value> + 'static,
    {
        AttrOp::from_kind(OpKind::Connect {
            signal: Self::INFO,
            handler: Box::new(handler),
            after: true,
        })
    }
}

impl<S: Signal> SignalExt for S {}
