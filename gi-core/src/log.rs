/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! User-facing diagnostics.
//!
//! Unlike [`out!`][crate::out], these are always enabled. They go to stderr with source location, the same place GLib's
//! `g_warning()` and `g_critical()` write to.

/// Prints a warning with source location to stderr.
#[macro_export]
macro_rules! gi_warn {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::log::__print_diagnostic(
            $crate::log::Severity::Warning,
            format_args!($fmt $(, $args)*),
            file!(),
            line!(),
        )
    };
}

/// Prints an error with source location to stderr.
#[macro_export]
macro_rules! gi_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::log::__print_diagnostic(
            $crate::log::Severity::Error,
            format_args!($fmt $(, $args)*),
            file!(),
            line!(),
        )
    };
}

/// Prints a message to stderr, without source location.
#[macro_export]
macro_rules! gi_print {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        eprintln!($fmt $(, $args)*)
    };
}

pub use crate::{gi_error, gi_print, gi_warn};

#[doc(hidden)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Severity {
    Warning,
    Error,
}

#[doc(hidden)]
pub fn __print_diagnostic(
    severity: Severity,
    message: std::fmt::Arguments<'_>,
    file: &str,
    line: u32,
) {
    let prefix = match severity {
        Severity::Warning => "WARNING",
        Severity::Error => "ERROR",
    };

    eprintln!("{prefix}: {message}\n   at {file}:{line}");
}
