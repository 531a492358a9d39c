/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use crate::meta::error::ConvertError;
use crate::meta::{Capability, ClassName};
use crate::sys::AllocError;

/// An attribute was accessed in a way its descriptor does not permit.
///
/// Raised before any foreign call is made.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CapabilityError {
    label: &'static str,
    origin: ClassName,
    accessed_through: ClassName,
    capability: Capability,
}

impl CapabilityError {
    pub(crate) fn new(
        label: &'static str,
        origin: ClassName,
        accessed_through: ClassName,
        capability: Capability,
    ) -> Self {
        Self {
            label,
            origin,
            accessed_through,
            capability,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Class that introduced the attribute.
    pub fn origin(&self) -> ClassName {
        self.origin
    }

    /// Class of the instance through which the attribute was accessed.
    pub fn accessed_through(&self) -> ClassName {
        self.accessed_through
    }

    /// The capability that was requested but is not permitted.
    pub fn capability(&self) -> Capability {
        self.capability
    }
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            label,
            origin,
            accessed_through,
            capability,
        } = self;

        write!(f, "attribute `{label}` of `{origin}`")?;
        if accessed_through != origin {
            write!(f, " (accessed through `{accessed_through}`)")?;
        }
        write!(f, " does not support `{capability}`")
    }
}

impl Error for CapabilityError {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Failure reported by the foreign object system, the Rust side of a `GError`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ForeignError {
    domain: String,
    code: i32,
    message: String,
}

impl ForeignError {
    pub fn new(domain: impl Into<String>, code: i32, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.domain, self.code, self.message)
    }
}

impl Error for ForeignError {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Error returned by attribute access, batch application and construction.
#[derive(Debug)]
pub enum AttrError {
    /// The requested operation is not in the attribute's capability set.
    Capability(CapabilityError),

    /// A value read from or destined to an attribute had the wrong shape.
    Convert {
        label: &'static str,
        origin: ClassName,
        source: ConvertError,
    },

    /// The foreign object system rejected a call.
    Foreign {
        /// Human-readable description of the target, e.g. ``attribute `label` of `GtkButton` ``.
        target: String,
        source: ForeignError,
    },

    /// No attribute with this label exists on the class, its ancestors or its interfaces.
    UnknownAttribute { class: ClassName, label: String },

    /// No signal with this name exists on the class, its ancestors or its interfaces.
    UnknownSignal { class: ClassName, name: String },

    /// Allocation of a struct instance failed.
    Alloc(AllocError),

    /// A user-supplied action inside a batch operation failed.
    Action(Box<dyn Error>),
}

impl AttrError {
    /// Wraps the failure of a user-supplied action, for use in [`assign_with`][crate::obj::AttrExt::assign_with] and
    /// [`update_with`][crate::obj::AttrExt::update_with] closures.
    pub fn action(err: impl Into<Box<dyn Error>>) -> Self {
        Self::Action(err.into())
    }

    pub fn is_capability(&self) -> bool {
        matches!(self, Self::Capability(_))
    }

    pub fn as_capability(&self) -> Option<&CapabilityError> {
        match self {
            Self::Capability(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capability(err) => write!(f, "{err}"),
            Self::Convert {
                label,
                origin,
                source,
            } => write!(f, "attribute `{label}` of `{origin}`: {source}"),
            Self::Foreign { target, source } => write!(f, "{target}: {source}"),
            Self::UnknownAttribute { class, label } => {
                write!(f, "class `{class}` has no attribute `{label}`")
            }
            Self::UnknownSignal { class, name } => {
                write!(f, "class `{class}` has no signal `{name}`")
            }
            Self::Alloc(err) => write!(f, "{err}"),
            Self::Action(err) => write!(f, "action failed: {err}"),
        }
    }
}

impl Error for AttrError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Capability(err) => Some(err),
            Self::Convert { source, .. } => Some(source),
            Self::Foreign { source, .. } => Some(source),
            Self::Alloc(err) => Some(err),
            Self::Action(err) => Some(&**err),
            Self::UnknownAttribute { .. } | Self::UnknownSignal { .. } => None,
        }
    }
}

impl From<CapabilityError> for AttrError {
    fn from(err: CapabilityError) -> Self {
        Self::Capability(err)
    }
}

impl From<AllocError> for AttrError {
    fn from(err: AllocError) -> Self {
        Self::Alloc(err)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_error_names_everything() {
        let base = ClassName::new("GtkWidget");
        let child = ClassName::new("GtkButton");

        let direct = CapabilityError::new("name", base, base, Capability::Clear);
        assert_eq!(
            direct.to_string(),
            "attribute `name` of `GtkWidget` does not support `clear`"
        );

        let inherited = CapabilityError::new("name", base, child, Capability::Set);
        assert_eq!(
            inherited.to_string(),
            "attribute `name` of `GtkWidget` (accessed through `GtkButton`) does not support `set`"
        );
    }

    #[test]
    fn attr_error_source_chain() {
        let err = AttrError::Foreign {
            target: "attribute `label` of `GtkButton`".to_string(),
            source: ForeignError::new("g-io-error-quark", 3, "permission denied"),
        };

        assert_eq!(
            err.to_string(),
            "attribute `label` of `GtkButton`: g-io-error-quark (3): permission denied"
        );
        assert!(err.source().is_some());
    }
}
