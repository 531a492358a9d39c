/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Declarative macros for classes, attributes and signals.

/// Declares a class or interface: an uninhabited marker type implementing [`GiClass`][crate::obj::GiClass], with
/// [`Inherits`][crate::obj::Inherits] impls for every listed ancestor and interface.
///
/// Ancestors are listed nearest first; the first one is the parent. Since inheritance is not inferred, indirect ancestors
/// and the interfaces of ancestors must be listed too.
///
/// ```ignore
/// gi::class! {
///     pub class Button: Widget, Object implements Actionable {
///         attributes: [ButtonLabel, ButtonUseUnderline],
///         signals: [ButtonClicked],
///     }
/// }
/// ```
#[macro_export]
macro_rules! class {
    (
        $(#[$meta:meta])*
        $vis:vis $kind:ident $Name:ident
            $(: $Parent:ident $(, $Ancestor:ident)*)?
            $(implements $($Iface:ident),+)?
        {
            $(attributes: [$($Attr:ty),* $(,)?] $(,)?)?
            $(signals: [$($Sig:ty),* $(,)?] $(,)?)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $Name {}

        impl $crate::obj::GiClass for $Name {
            const CLASS_INFO: &'static $crate::registry::ClassInfo =
                &$crate::registry::ClassInfo::new(stringify!($Name), $crate::__gi_type_kind!($kind))
                    $(.with_parent(<$Parent as $crate::obj::GiClass>::CLASS_INFO))?
                    $(.with_interfaces(&[$(<$Iface as $crate::obj::GiClass>::CLASS_INFO),+]))?
                    $(.with_attributes(&[$(<$Attr as $crate::obj::Attribute>::DESCRIPTOR),*]))?
                    $(.with_signals(&[$(<$Sig as $crate::obj::Signal>::INFO),*]))?;
        }

        $(
            // SAFETY: declared ancestor.
            unsafe impl $crate::obj::Inherits<$Parent> for $Name {}
            $(unsafe impl $crate::obj::Inherits<$Ancestor> for $Name {})*
        )?
        $(
            // SAFETY: declared interface.
            $(unsafe impl $crate::obj::Inherits<$Iface> for $Name {})+
        )?
    };
}

/// Declares attribute handles introduced by one class, with `const` descriptors using the default GObject property
/// operations.
///
/// ```ignore
/// gi::attributes! {
///     impl Button {
///         /// Text of the label.
///         pub ButtonLabel {
///             label: "label",
///             value: Option<String>,
///             value_type: ValueType::String,
///             caps: [get, set, construct, clear],
///         }
///
///         pub ButtonData {
///             label: "user-data",
///             value: Option<RawPtr>,
///             value_type: ValueType::Pointer,
///             caps: [get, set],
///             transfer: gi::private::transfer_cstring => Option<String>,
///         }
///     }
/// }
/// ```
///
/// `null: EmptyList,` makes a foreign null read as an empty list. `transfer:` replaces the identity transfer and sets the
/// raw input type of transferring writes.
#[macro_export]
macro_rules! attributes {
    (
        impl $Owner:ident {
            $(
                $(#[$meta:meta])*
                $vis:vis $Name:ident {
                    label: $label:literal,
                    value: $Value:ty,
                    value_type: $vt:expr,
                    caps: [$($cap:ident),* $(,)?],
                    $(null: $null:ident,)?
                    $(transfer: $transfer:path => $TransferInput:ty,)?
                }
            )*
        }
    ) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, Default)]
            $vis struct $Name;

            impl $crate::obj::Attribute for $Name {
                type Owner = $Owner;
                type Value = $Value;
                type Input = $Value;
                type TransferInput = $crate::__gi_transfer_input!($Value $(, $TransferInput)?);

                const DESCRIPTOR: &'static $crate::registry::AttrDescriptor =
                    &$crate::registry::AttrDescriptor::builder(
                        $label,
                        $crate::meta::ClassName::new(stringify!($Owner)),
                        {
                            #[allow(unused_imports)]
                            use $crate::meta::{ListKind, ValueType};
                            $vt
                        },
                    )
                    .capabilities($crate::meta::CapabilitySet::from_slice(&[
                        $($crate::__gi_capability!($cap)),*
                    ]))
                    $(.null_repr($crate::meta::NullRepr::$null))?
                    $(
                        .transfer_mode($crate::sys::TransferMode::Full)
                        .on_transfer($transfer)
                    )?
                    .property_operations()
                    .build();
            }

            $($crate::__gi_capability_marker!($cap, $Name);)*
        )*
    };
}

/// Declares signal handles introduced by one class.
///
/// ```ignore
/// gi::signals! {
///     impl Button {
///         pub ButtonClicked: "clicked";
///     }
/// }
/// ```
#[macro_export]
macro_rules! signals {
    (
        impl $Owner:ident {
            $(
                $(#[$meta:meta])*
                $vis:vis $Name:ident: $name:literal;
            )*
        }
    ) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, Default)]
            $vis struct $Name;

            impl $crate::obj::Signal for $Name {
                type Owner = $Owner;

                const INFO: &'static $crate::registry::SignalInfo = &$crate::registry::SignalInfo::new(
                    $name,
                    $crate::meta::ClassName::new(stringify!($Owner)),
                );
            }
        )*
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Helpers

#[doc(hidden)]
#[macro_export]
macro_rules! __gi_type_kind {
    (class) => {
        $crate::registry::TypeKind::Object
    };
    (interface) => {
        $crate::registry::TypeKind::Interface
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __gi_capability {
    (get) => {
        $crate::meta::Capability::Get
    };
    (set) => {
        $crate::meta::Capability::Set
    };
    (construct) => {
        $crate::meta::Capability::Construct
    };
    (clear) => {
        $crate::meta::Capability::Clear
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __gi_capability_marker {
    (get, $Name:ident) => {
        impl $crate::obj::Readable for $Name {}
    };
    (set, $Name:ident) => {
        impl $crate::obj::Writable for $Name {}
    };
    (construct, $Name:ident) => {
        impl $crate::obj::Constructible for $Name {}
    };
    (clear, $Name:ident) => {
        impl $crate::obj::Clearable for $Name {}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __gi_transfer_input {
    ($Value:ty) => {
        $Value
    };
    ($Value:ty, $TransferInput:ty) => {
        $TransferInput
    };
}
