// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! BA Slider Document: a headless, generationally indexed element tree.
//!
//! This crate stands in for a live browser document wherever the slider engine
//! runs without one: tests, benches, demos, and native hosts.
//!
//! - Represents a hierarchy of elements with classes, attributes, inline style, and client-space bounds.
//! - Answers class queries in document order and hit tests client points.
//! - Records structural mutations (added/removed subtree roots) that a caller drains with
//!   [`Document::take_mutations`], the way a mutation observer batches `childList` records.
//! - Tracks a [`ReadyState`] so callers can model "still parsing" versus "complete".
//!
//! ## Not a layout engine
//!
//! Bounds are supplied by upstream code. The document never measures or arranges
//! elements; [`Document::scroll_by`] simply shifts every client rect.
//!
//! ## API overview
//!
//! - [`Document`]: container managing elements.
//! - [`Element`]: per-element data (classes, attributes, style, bounds, z, flags).
//! - [`ElementFlags`]: visibility and picking controls.
//! - [`ElementId`]: generational handle of an element.
//! - [`MutationRecords`]: structural changes since the last drain.
//!
//! ### Minimal usage
//!
//! ```
//! use ba_slider_document::{Document, Element};
//! use kurbo::{Point, Rect};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let slider = doc
//!     .insert(
//!         body,
//!         Element::new()
//!             .with_class("ba-slider")
//!             .with_bounds(Rect::new(0.0, 0.0, 300.0, 200.0)),
//!     )
//!     .unwrap();
//!
//! let added = doc.take_mutations().added;
//! assert_eq!(added, vec![slider]);
//!
//! let hit = doc.hit_test_point(Point::new(10.0, 10.0)).unwrap();
//! assert_eq!(hit.element, slider);
//! assert_eq!(doc.query_class("ba-slider"), vec![slider]);
//! ```

mod document;
mod mutation;
mod types;

pub use document::{Document, Hit};
pub use mutation::MutationRecords;
pub use types::{Element, ElementFlags, ElementId, ReadyState};
