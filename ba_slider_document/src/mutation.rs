// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural mutation records returned by [`Document::take_mutations`](crate::Document::take_mutations).

use crate::types::ElementId;

/// Batched structural changes since the last [`Document::take_mutations`](crate::Document::take_mutations).
///
/// Only subtree roots are recorded, the way a browser mutation observer reports
/// `addedNodes`: appending a prepared subtree of five elements yields one entry.
/// Attribute and style writes are not recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationRecords {
    /// Roots of subtrees that became connected.
    pub added: Vec<ElementId>,
    /// Roots of subtrees that were disconnected. These ids are stale by the time
    /// they are reported.
    pub removed: Vec<ElementId>,
}

impl MutationRecords {
    /// True if no structural change was recorded.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
