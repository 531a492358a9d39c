/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::meta::ClassName;
use crate::registry::{AttrDescriptor, SignalInfo};

/// What kind of type a [`ClassInfo`] describes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeKind {
    Object,
    Interface,
    Struct,
    Union,
}

/// Static description of a class, interface, struct or union.
///
/// Holds the attributes and signals the type introduces itself. Inherited ones are found by walking the parent chain and
/// the implemented interfaces, see [`find_attribute()`][Self::find_attribute]. Structs and unions never carry attributes.
#[derive(Debug)]
pub struct ClassInfo {
    name: ClassName,
    kind: TypeKind,
    parent: Option<&'static ClassInfo>,
    interfaces: &'static [&'static ClassInfo],
    attributes: &'static [&'static AttrDescriptor],
    signals: &'static [&'static SignalInfo],
}

impl ClassInfo {
    pub const fn new(name: &'static str, kind: TypeKind) -> Self {
        Self {
            name: ClassName::new(name),
            kind,
            parent: None,
            interfaces: &[],
            attributes: &[],
            signals: &[],
        }
    }

    pub const fn with_parent(mut self, parent: &'static ClassInfo) -> Self {
        self.parent = Some(parent);
        self
    }

    /// For objects: implemented interfaces. For interfaces: prerequisites.
    pub const fn with_interfaces(mut self, interfaces: &'static [&'static ClassInfo]) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub const fn with_attributes(mut self, attributes: &'static [&'static AttrDescriptor]) -> Self {
        self.attributes = attributes;
        self
    }

    pub const fn with_signals(mut self, signals: &'static [&'static SignalInfo]) -> Self {
        self.signals = signals;
        self
    }

    pub const fn name(&self) -> ClassName {
        self.name
    }

    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    pub const fn parent(&self) -> Option<&'static ClassInfo> {
        self.parent
    }

    pub const fn interfaces(&self) -> &'static [&'static ClassInfo] {
        self.interfaces
    }

    /// Attributes introduced by this type itself.
    pub const fn own_attributes(&self) -> &'static [&'static AttrDescriptor] {
        self.attributes
    }

    pub const fn own_signals(&self) -> &'static [&'static SignalInfo] {
        self.signals
    }

    /// This type followed by its parent, grandparent, and so on.
    pub fn ancestors(&self) -> impl Iterator<Item = &ClassInfo> {
        std::iter::successors(Some(self), |class| class.parent)
    }

    /// Resolves an attribute by label.
    ///
    /// Search order: the type itself, then its ancestors nearest first, then the interfaces of each of these (again nearest
    /// first). The first match wins, so a redeclared attribute shadows the inherited one.
    pub fn find_attribute(&self, label: &str) -> Option<&'static AttrDescriptor> {
        let own = self.ancestors().find_map(|class| {
            class
                .attributes
                .iter()
                .copied()
                .find(|attr| attr.matches_label(label))
        });

        own.or_else(|| {
            self.ancestors()
                .flat_map(|class| class.interfaces.iter())
                .find_map(|iface| iface.find_attribute(label))
        })
    }

    /// Resolves a signal by name, with the same search order as [`find_attribute()`][Self::find_attribute].
    pub fn find_signal(&self, name: &str) -> Option<&'static SignalInfo> {
        let own = self.ancestors().find_map(|class| {
            class
                .signals
                .iter()
                .copied()
                .find(|signal| signal.name() == name)
        });

        own.or_else(|| {
            self.ancestors()
                .flat_map(|class| class.interfaces.iter())
                .find_map(|iface| iface.find_signal(name))
        })
    }

    /// All attributes accessible through this type, in resolution order. Shadowed attributes are omitted.
    pub fn attributes(&self) -> Vec<&'static AttrDescriptor> {
        let mut result: Vec<&'static AttrDescriptor> = Vec::new();
        self.collect_attributes(&mut result);
        result
    }

    fn collect_attributes(&self, result: &mut Vec<&'static AttrDescriptor>) {
        let push = |attr: &'static AttrDescriptor, result: &mut Vec<&'static AttrDescriptor>| {
            if !result.iter().any(|seen| seen.matches_label(attr.label())) {
                result.push(attr);
            }
        };

        for class in self.ancestors() {
            for &attr in class.attributes {
                push(attr, result);
            }
        }

        for class in self.ancestors() {
            for iface in class.interfaces {
                for attr in iface.attributes() {
                    push(attr, result);
                }
            }
        }
    }

    /// Whether this type is `other`, derives from it, or implements it as an interface.
    pub fn is_a(&self, other: &ClassInfo) -> bool {
        self.ancestors().any(|class| {
            class.name == other.name || class.interfaces.iter().any(|iface| iface.is_a(other))
        })
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
