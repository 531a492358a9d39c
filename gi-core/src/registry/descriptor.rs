/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use crate::meta::error::{AttrError, CapabilityError, ErrorKind};
use crate::meta::{Capability, CapabilitySet, ClassName, FromValue, NullRepr, Value, ValueType};
use crate::obj::{ConstructParam, RawObject};
use crate::registry::property;
use crate::sys::TransferMode;

/// Reads the current value from a live object.
pub type GetFn = fn(&RawObject, &AttrDescriptor) -> Result<Value, AttrError>;

/// Writes a value to a live object.
pub type SetFn = fn(&RawObject, &AttrDescriptor, Value) -> Result<(), AttrError>;

/// Turns a value into a construction token for bulk instantiation.
pub type ConstructFn = fn(&AttrDescriptor, Value) -> Result<ConstructParam, AttrError>;

/// Writes the foreign null representation to a live object.
pub type ClearFn = fn(&RawObject, &AttrDescriptor) -> Result<(), AttrError>;

/// Converts a raw input into a value whose foreign memory is owned by the receiver.
pub type TransferFn = fn(&AttrDescriptor, Value) -> Result<Value, AttrError>;

#[derive(Copy, Clone)]
struct Slots {
    get: Option<GetFn>,
    set: Option<SetFn>,
    construct: Option<ConstructFn>,
    clear: Option<ClearFn>,
    transfer: Option<TransferFn>,
}

/// Static description of one attribute: what it is called, who introduced it, what may be done with it and how.
///
/// Each capability has its own operation slot. A descriptor can only be obtained through [`AttrDescriptorBuilder`], which
/// refuses capabilities whose operation is missing; so every permitted operation is callable.
pub struct AttrDescriptor {
    label: &'static str,
    origin: ClassName,
    capabilities: CapabilitySet,
    value_type: ValueType,
    null_repr: NullRepr,
    transfer_mode: TransferMode,
    slots: Slots,
}

impl AttrDescriptor {
    /// Starts a descriptor for attribute `label`, introduced by class `origin`, without any capabilities.
    pub const fn builder(
        label: &'static str,
        origin: ClassName,
        value_type: ValueType,
    ) -> AttrDescriptorBuilder {
        AttrDescriptorBuilder {
            inner: AttrDescriptor {
                label,
                origin,
                capabilities: CapabilitySet::EMPTY,
                value_type,
                null_repr: NullRepr::Absent,
                transfer_mode: TransferMode::None,
                slots: Slots {
                    get: None,
                    set: None,
                    construct: None,
                    clear: None,
                    transfer: None,
                },
            },
        }
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Class that introduced the attribute.
    pub const fn origin(&self) -> ClassName {
        self.origin
    }

    pub const fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub const fn null_repr(&self) -> NullRepr {
        self.null_repr
    }

    /// Ownership transfer applied by the transfer operation.
    pub const fn transfer_mode(&self) -> TransferMode {
        self.transfer_mode
    }

    pub const fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Whether a label refers to this attribute. GObject treats `-` and `_` in property names as equivalent.
    pub fn matches_label(&self, label: &str) -> bool {
        labels_match(self.label, label)
    }

    /// Checks that `capability` is permitted, when accessed through an instance of class `accessed_through`.
    pub fn require(
        &self,
        capability: Capability,
        accessed_through: ClassName,
    ) -> Result<(), CapabilityError> {
        if self.supports(capability) {
            return Ok(());
        }

        crate::out!(
            "  capability denied: {}.{} ({capability}) via {accessed_through}",
            self.origin,
            self.label
        );
        Err(CapabilityError::new(
            self.label,
            self.origin,
            accessed_through,
            capability,
        ))
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Slot invocation. Capability checks happen in the access protocol, before any of these is called.

    pub(crate) fn read(&self, obj: &RawObject) -> Result<Value, AttrError> {
        let get = self.slot(self.slots.get, Capability::Get);
        let value = get(obj, self)?;

        Ok(self.null_repr.apply(value))
    }

    pub(crate) fn write(&self, obj: &RawObject, value: Value) -> Result<(), AttrError> {
        self.check_type(&value)?;

        let set = self.slot(self.slots.set, Capability::Set);
        set(obj, self, value)
    }

    pub(crate) fn make_param(&self, value: Value) -> Result<ConstructParam, AttrError> {
        self.check_type(&value)?;

        let construct = self.slot(self.slots.construct, Capability::Construct);
        construct(self, value)
    }

    pub(crate) fn reset(&self, obj: &RawObject) -> Result<(), AttrError> {
        let clear = self.slot(self.slots.clear, Capability::Clear);
        clear(obj, self)
    }

    pub(crate) fn transfer(&self, raw: Value) -> Result<Value, AttrError> {
        let Some(transfer) = self.slots.transfer else {
            panic!(
                "attribute `{}` of `{}` has no transfer operation",
                self.label, self.origin
            );
        };

        crate::out!("  transfer ({}) for {}.{}", self.transfer_mode, self.origin, self.label);
        transfer(self, raw)
    }

    pub(crate) fn convert<T: FromValue>(&self, value: Value) -> Result<T, AttrError> {
        T::try_from_value(value).map_err(|source| AttrError::Convert {
            label: self.label,
            origin: self.origin,
            source,
        })
    }

    fn check_type(&self, value: &Value) -> Result<(), AttrError> {
        if self.value_type.accepts(value) {
            return Ok(());
        }

        let source = ErrorKind::BadType {
            expected: self.value_type.name(),
            actual: value.type_name(),
        }
        .into_error(value);

        Err(AttrError::Convert {
            label: self.label,
            origin: self.origin,
            source,
        })
    }

    fn slot<F>(&self, slot: Option<F>, capability: Capability) -> F {
        // Unreachable for descriptors produced by the builder; reaching it means the slot table was bypassed.
        slot.unwrap_or_else(|| {
            panic!(
                "attribute `{}` of `{}` has no `{capability}` operation",
                self.label, self.origin
            )
        })
    }
}

impl fmt::Debug for AttrDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrDescriptor")
            .field("label", &self.label)
            .field("origin", &self.origin)
            .field("capabilities", &self.capabilities)
            .field("value_type", &self.value_type)
            .field("null_repr", &self.null_repr)
            .field("transfer_mode", &self.transfer_mode)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AttrDescriptor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("AttrDescriptor", 5)?;
        s.serialize_field("label", self.label)?;
        s.serialize_field("origin", &self.origin)?;
        s.serialize_field("capabilities", &self.capabilities)?;
        s.serialize_field("value_type", &self.value_type)?;
        s.serialize_field("null_repr", &self.null_repr)?;
        s.end()
    }
}

fn labels_match(a: &str, b: &str) -> bool {
    let canon = |c: u8| if c == b'_' { b'-' } else { c };

    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .all(|(x, y)| canon(x) == canon(y))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// `const` builder for [`AttrDescriptor`].
///
/// ```
/// use gi_core::meta::{Capability, CapabilitySet, ClassName, ValueType};
/// use gi_core::registry::AttrDescriptor;
///
/// static LABEL: AttrDescriptor = AttrDescriptor::builder("label", ClassName::new("GtkButton"), ValueType::String)
///     .capabilities(CapabilitySet::from_slice(&[Capability::Get, Capability::Set]))
///     .property_operations()
///     .build();
///
/// assert!(LABEL.supports(Capability::Set));
/// ```
#[must_use]
pub struct AttrDescriptorBuilder {
    inner: AttrDescriptor,
}

impl AttrDescriptorBuilder {
    pub const fn capabilities(mut self, capabilities: CapabilitySet) -> Self {
        self.inner.capabilities = capabilities;
        self
    }

    pub const fn null_repr(mut self, null_repr: NullRepr) -> Self {
        self.inner.null_repr = null_repr;
        self
    }

    pub const fn transfer_mode(mut self, mode: TransferMode) -> Self {
        self.inner.transfer_mode = mode;
        self
    }

    pub const fn on_get(mut self, f: GetFn) -> Self {
        self.inner.slots.get = Some(f);
        self
    }

    pub const fn on_set(mut self, f: SetFn) -> Self {
        self.inner.slots.set = Some(f);
        self
    }

    pub const fn on_construct(mut self, f: ConstructFn) -> Self {
        self.inner.slots.construct = Some(f);
        self
    }

    pub const fn on_clear(mut self, f: ClearFn) -> Self {
        self.inner.slots.clear = Some(f);
        self
    }

    pub const fn on_transfer(mut self, f: TransferFn) -> Self {
        self.inner.slots.transfer = Some(f);
        self
    }

    /// Fills every operation permitted by the capability set with the default GObject property implementation.
    ///
    /// Slots that are already set are kept. The transfer operation defaults to passing the value through unchanged.
    pub const fn property_operations(mut self) -> Self {
        let caps = self.inner.capabilities;
        let slots = &mut self.inner.slots;

        if caps.contains(Capability::Get) && slots.get.is_none() {
            slots.get = Some(property::property_get);
        }
        if caps.contains(Capability::Set) && slots.set.is_none() {
            slots.set = Some(property::property_set);
        }
        if caps.contains(Capability::Construct) && slots.construct.is_none() {
            slots.construct = Some(property::property_construct);
        }
        if caps.contains(Capability::Clear) && slots.clear.is_none() {
            slots.clear = Some(property::property_clear);
        }
        if slots.transfer.is_none() {
            slots.transfer = Some(property::transfer_identity);
        }
        self
    }

    /// Validates that every permitted capability has an operation, and that only nullable attributes can be cleared.
    pub const fn try_build(self) -> Result<AttrDescriptor, RegistrationError> {
        let label = self.inner.label;
        let caps = self.inner.capabilities;
        let slots = &self.inner.slots;

        if label.is_empty() {
            return Err(RegistrationError::EmptyLabel);
        }

        let missing = if caps.contains(Capability::Get) && slots.get.is_none() {
            Some(Capability::Get)
        } else if caps.contains(Capability::Set) && slots.set.is_none() {
            Some(Capability::Set)
        } else if caps.contains(Capability::Construct) && slots.construct.is_none() {
            Some(Capability::Construct)
        } else if caps.contains(Capability::Clear) && slots.clear.is_none() {
            Some(Capability::Clear)
        } else {
            None
        };

        if let Some(capability) = missing {
            return Err(RegistrationError::MissingOperation { label, capability });
        }

        if caps.contains(Capability::Clear) && !self.inner.value_type.is_nullable() {
            return Err(RegistrationError::ClearOnNonNullable { label });
        }

        let writes = caps.contains(Capability::Set) || caps.contains(Capability::Construct);
        if writes && slots.transfer.is_none() {
            return Err(RegistrationError::MissingTransfer { label });
        }

        Ok(self.inner)
    }

    /// ⚠️ Validates and builds the descriptor.
    ///
    /// # Panics
    /// If validation fails. In a `const` or `static` initializer, this is a compile-time error.
    pub const fn build(self) -> AttrDescriptor {
        match self.try_build() {
            Ok(descriptor) => descriptor,
            Err(err) => panic!("{}", err.message()),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Inconsistent attribute declaration, detected when the descriptor is built.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RegistrationError {
    /// A capability is declared, but its operation is not provided.
    MissingOperation {
        label: &'static str,
        capability: Capability,
    },

    /// The attribute is writable, but has no transfer operation.
    MissingTransfer { label: &'static str },

    /// `Clear` is declared for a value type without a null representation.
    ClearOnNonNullable { label: &'static str },

    EmptyLabel,
}

impl RegistrationError {
    /// Static summary, usable in `const` panics.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingOperation { .. } => {
                "attribute descriptor declares a capability without providing its operation"
            }
            Self::MissingTransfer { .. } => "writable attribute descriptor has no transfer operation",
            Self::ClearOnNonNullable { .. } => "clearable attribute descriptor has a non-nullable value type",
            Self::EmptyLabel => "attribute descriptor has an empty label",
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperation { label, capability } => write!(
                f,
                "attribute `{label}` declares capability `{capability}` but provides no `{capability}` operation"
            ),
            Self::MissingTransfer { label } => write!(
                f,
                "attribute `{label}` is writable but provides no transfer operation"
            ),
            Self::ClearOnNonNullable { label } => write!(
                f,
                "attribute `{label}` declares capability `clear` but its value type has no null"
            ),
            Self::EmptyLabel => f.write_str(self.message()),
        }
    }
}

impl Error for RegistrationError {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
