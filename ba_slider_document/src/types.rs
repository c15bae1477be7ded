// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: element identifiers, flags, and element data.

use std::collections::BTreeMap;

use kurbo::Rect;

/// Identifier for an element in the document.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On create, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// ### Newer
///
/// An `ElementId` is considered newer than another when it has a higher generation.
/// If generations are equal, the one with the higher slot index is considered newer.
/// This order is only used to break ties in [hit testing](crate::Document::hit_test_point).
///
/// ### Liveness
///
/// Use [`Document::is_alive`](crate::Document::is_alive) to check whether an `ElementId` still refers
/// to a live element. Stale ids never alias a different live element because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }

    #[inline]
    pub(crate) fn is_newer_than(self, other: Self) -> bool {
        (self.1 > other.1) || (self.1 == other.1 && self.0 > other.0)
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is rendered.
        const VISIBLE  = 0b0000_0001;
        /// Element receives pointer input (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Readiness of the document, mirroring a browser's parse state.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ReadyState {
    /// Markup is still being parsed; scripts that need the full tree should wait.
    Loading,
    /// Parsing finished.
    #[default]
    Complete,
}

/// Data carried by a single element.
///
/// Bounds are client-space and come from upstream layout; the document does not
/// measure or arrange anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Class list, in declaration order.
    pub classes: Vec<String>,
    /// Attributes by name.
    pub attributes: BTreeMap<String, String>,
    /// Inline style properties by name.
    pub style: BTreeMap<String, String>,
    /// Client-space bounding box.
    pub bounds: Rect,
    /// Stacking order among overlapping elements. Higher is on top.
    pub z_index: i32,
    /// Visibility and picking flags.
    pub flags: ElementFlags,
}

impl Element {
    /// An element with no classes, no attributes, and zero bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set an inline style property.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Set the client-space bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the stacking order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Replace the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns true if the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
