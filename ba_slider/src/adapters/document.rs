// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`SliderHost`] for the in-memory [`Document`].
//!
//! ## Feature
//!
//! Enable with `document_adapter` (on by default).
//!
//! ## Notes
//!
//! - `hit_path` is the root-to-target path of the topmost hit, so every
//!   ancestor container of the element under the pointer counts as "inside".
//! - [`sync_mutations`] drains the document's mutation records and feeds them
//!   to the engine; call it after each batch of structural edits.

use std::borrow::Cow;

use ba_slider_document::{Document, ElementId, MutationRecords, ReadyState};
use kurbo::{Point, Rect};

use crate::engine::Engine;
use crate::host::SliderHost;
use crate::lifecycle::LifecycleReport;
use crate::types::Mutations;

impl SliderHost for Document {
    type Element = ElementId;

    fn is_ready(&self) -> bool {
        self.ready_state() == ReadyState::Complete
    }

    fn query_class(&self, class: &str) -> Vec<ElementId> {
        Document::query_class(self, class)
    }

    fn find_descendant(&self, root: ElementId, class: &str) -> Option<ElementId> {
        Document::find_descendant(self, root, class)
    }

    fn is_connected(&self, element: ElementId) -> bool {
        Document::is_connected(self, element)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<Cow<'_, str>> {
        Document::attribute(self, element, name).map(Cow::Borrowed)
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        Document::set_attribute(self, element, name, value);
    }

    fn remove_attribute(&mut self, element: ElementId, name: &str) {
        Document::remove_attribute(self, element, name);
    }

    fn style(&self, element: ElementId, property: &str) -> Option<Cow<'_, str>> {
        Document::style(self, element, property).map(Cow::Borrowed)
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        Document::set_style(self, element, property, value);
    }

    fn bounding_client_rect(&self, element: ElementId) -> Option<Rect> {
        Document::bounding_client_rect(self, element)
    }

    fn hit_path(&self, point: Point) -> Vec<ElementId> {
        self.hit_test_point(point)
            .map(|hit| hit.path)
            .unwrap_or_default()
    }
}

impl From<MutationRecords> for Mutations<ElementId> {
    fn from(records: MutationRecords) -> Self {
        Self {
            added: records.added,
            removed: records.removed,
        }
    }
}

/// Drain `doc`'s pending mutations into `engine`.
///
/// Returns what the engine attached and detached. A no-op when nothing changed.
pub fn sync_mutations(engine: &mut Engine<ElementId>, doc: &mut Document) -> LifecycleReport {
    let records = doc.take_mutations();
    if records.is_empty() {
        return LifecycleReport::default();
    }
    engine.mutations(doc, &records.into())
}
