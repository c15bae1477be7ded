// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document seam: everything the engine reads from or writes to a live document.
//!
//! The engine never owns elements. It holds opaque [`SliderHost::Element`]
//! handles and goes through this trait for every query, so the same engine runs
//! against the in-memory [`ba_slider_document`](https://docs.rs/ba_slider_document)
//! tree (see [`adapters`](crate::adapters)) or a browser binding.
//!
//! Implementations should treat stale handles as absent: reads return `None`
//! or `false`, writes do nothing.

use std::borrow::Cow;

use kurbo::{Point, Rect};

/// A document the slider engine can drive.
pub trait SliderHost {
    /// Handle to one element. Cheap to copy and compare.
    type Element: Copy + Eq + core::fmt::Debug;

    /// Returns true once the initial markup has been parsed.
    fn is_ready(&self) -> bool;

    /// Connected elements carrying `class`, in document order.
    fn query_class(&self, class: &str) -> Vec<Self::Element>;

    /// First strict descendant of `root` carrying `class`.
    fn find_descendant(&self, root: Self::Element, class: &str) -> Option<Self::Element>;

    /// Returns true if `element` is still part of the document.
    fn is_connected(&self, element: Self::Element) -> bool;

    /// Current value of an attribute.
    fn attribute(&self, element: Self::Element, name: &str) -> Option<Cow<'_, str>>;

    /// Set an attribute.
    fn set_attribute(&mut self, element: Self::Element, name: &str, value: &str);

    /// Remove an attribute.
    fn remove_attribute(&mut self, element: Self::Element, name: &str);

    /// Current value of an inline style property.
    fn style(&self, element: Self::Element, property: &str) -> Option<Cow<'_, str>>;

    /// Set an inline style property.
    fn set_style(&mut self, element: Self::Element, property: &str, value: &str);

    /// Client-space bounding box, measured now. `None` if the element is gone.
    fn bounding_client_rect(&self, element: Self::Element) -> Option<Rect>;

    /// Root→target path of the topmost element under a client point, or empty
    /// if nothing is hit. Pointer events "inside" an element are those whose path
    /// contains it.
    fn hit_path(&self, point: Point) -> Vec<Self::Element>;
}
