/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

type Cause = Box<dyn Error + Send + Sync>;

/// Represents errors that can occur when converting foreign values to Rust.
///
/// To create user-defined errors, you can use [`ConvertError::default()`] or [`ConvertError::new("message")`][Self::new].
#[derive(Debug)]
pub struct ConvertError {
    kind: ErrorKind,
    cause: Option<Cause>,
    value_str: Option<String>,
}

impl ConvertError {
    /// Construct with a user-defined message.
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Custom(Some(user_message.into())),
            cause: None,
            value_str: None,
        }
    }

    pub(crate) fn with_kind_value<V>(kind: ErrorKind, value: V) -> Self
    where
        V: fmt::Debug,
    {
        Self {
            kind,
            cause: None,
            value_str: Some(format!("{value:?}")),
        }
    }

    /// Create a new custom error with a Rust error as the underlying cause.
    pub fn with_cause<C>(cause: C) -> Self
    where
        C: Into<Cause>,
    {
        Self {
            cause: Some(cause.into()),
            ..Default::default()
        }
    }

    /// Returns the Rust error that caused this error, if one exists.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync)> {
        self.cause.as_deref()
    }

    /// Returns a string representation of the value that failed to convert, if one exists.
    pub fn value_str(&self) -> Option<&str> {
        self.value_str.as_deref()
    }

    /// Whether a foreign null was found where a value is required.
    pub fn is_unexpected_null(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedNull { .. })
    }

    /// Whether the foreign value had a different type than the Rust target.
    pub fn is_bad_type(&self) -> bool {
        matches!(self.kind, ErrorKind::BadType { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::OutOfRange { .. })
    }

    fn description(&self) -> Option<String> {
        self.kind.description()
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.description(), self.cause.as_ref()) {
            (Some(desc), Some(cause)) => write!(f, "{desc}: {cause}")?,
            (Some(desc), None) => write!(f, "{desc}")?,
            (None, Some(cause)) => write!(f, "{cause}")?,
            (None, None) => write!(f, "unknown error: {:?}", self.kind)?,
        }

        if let Some(value) = self.value_str.as_ref() {
            write!(f, ": {value}")?;
        }

        Ok(())
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn Error + 'static))
    }
}

impl Default for ConvertError {
    /// Create a custom error, without any description.
    fn default() -> Self {
        Self {
            kind: ErrorKind::Custom(None),
            cause: None,
            value_str: None,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[derive(Eq, PartialEq, Debug)]
pub(crate) enum ErrorKind {
    UnexpectedNull {
        expected: &'static str,
    },
    BadType {
        expected: &'static str,
        actual: &'static str,
    },
    OutOfRange {
        target: &'static str,
    },
    Custom(Option<String>),
}

impl ErrorKind {
    pub fn into_error<V>(self, value: V) -> ConvertError
    where
        V: fmt::Debug,
    {
        ConvertError::with_kind_value(self, value)
    }

    fn description(&self) -> Option<String> {
        match self {
            Self::UnexpectedNull { expected } => {
                Some(format!("expected {expected}, got foreign null"))
            }
            Self::BadType { expected, actual } => Some(format!("expected {expected}, got {actual}")),
            Self::OutOfRange { target } => Some(format!("value out of range for {target}")),
            Self::Custom(description) => description.clone(),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
