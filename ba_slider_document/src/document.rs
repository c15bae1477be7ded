// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, attributes, style, queries.

use kurbo::{Point, Rect, Vec2};

use crate::mutation::MutationRecords;
use crate::types::{Element, ElementFlags, ElementId, ReadyState};

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A headless element tree with a single `body` root.
///
/// Elements are either connected (reachable from [`Document::body`]) or
/// detached (created but not yet appended). Only connected elements are
/// returned by queries and hit tests.
pub struct Document {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    body: ElementId,
    ready_state: ReadyState,
    pending: MutationRecords,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("ready_state", &self.ready_state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

/// Result of a hit test.
#[derive(Clone, Debug)]
pub struct Hit {
    /// The topmost element under the point.
    pub element: ElementId,
    /// Path from `body` to the element (inclusive).
    pub path: Vec<ElementId>,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    element: Element,
}

impl Node {
    fn new(generation: u32, element: Element) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        }
    }
}

impl Document {
    /// Create a fully parsed document containing only an empty `body`.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            body: ElementId::new(0, 0),
            ready_state: ReadyState::Complete,
            pending: MutationRecords::default(),
        };
        doc.body = doc.alloc(Element::new());
        doc
    }

    /// Create a document that is still parsing.
    ///
    /// Call [`Document::finish_loading`] once the initial markup is in place.
    pub fn loading() -> Self {
        let mut doc = Self::new();
        doc.ready_state = ReadyState::Loading;
        doc
    }

    /// The root element. Never removed.
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Current parse state.
    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Mark parsing as finished.
    pub fn finish_loading(&mut self) {
        self.ready_state = ReadyState::Complete;
    }

    /// Create a detached element. No mutation is recorded until it is appended
    /// to a connected parent.
    pub fn create(&mut self, element: Element) -> ElementId {
        self.alloc(element)
    }

    /// Append a detached `child` under `parent`.
    ///
    /// Returns false (and changes nothing) if either id is stale, if `child`
    /// already has a parent or is the body, or if `parent` is inside `child`.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if !self.is_alive(parent) || !self.is_alive(child) || child == self.body {
            return false;
        }
        if self.parent_of(child).is_some() || self.is_inclusive_ancestor(child, parent) {
            return false;
        }
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.node_opt_mut(child) {
            c.parent = Some(parent);
        }
        if self.is_connected(child) {
            self.pending.added.push(child);
        }
        true
    }

    /// Create an element and append it under `parent`.
    ///
    /// Returns `None` if `parent` is stale.
    pub fn insert(&mut self, parent: ElementId, element: Element) -> Option<ElementId> {
        if !self.is_alive(parent) {
            return None;
        }
        let id = self.alloc(element);
        self.append_child(parent, id);
        Some(id)
    }

    /// Remove an element and its subtree. Every id in the subtree becomes stale.
    ///
    /// Removing the body or a stale id is a no-op.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) || id == self.body {
            return;
        }
        if self.is_connected(id) {
            self.pending.removed.push(id);
        }
        if let Some(parent) = self.parent_of(id)
            && let Some(p) = self.node_opt_mut(parent)
        {
            p.children.retain(|c| *c != id);
        }
        self.free_subtree(id);
    }

    /// Drain the structural mutations recorded since the last call.
    pub fn take_mutations(&mut self) -> MutationRecords {
        core::mem::take(&mut self.pending)
    }

    /// Returns true if `id` refers to a live element (connected or not).
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    /// Returns true if `id` is live and reachable from the body.
    pub fn is_connected(&self, id: ElementId) -> bool {
        let mut cur = id;
        loop {
            if cur == self.body {
                return true;
            }
            match self.node(cur) {
                Some(n) => match n.parent {
                    Some(p) => cur = p,
                    None => return false,
                },
                None => return false,
            }
        }
    }

    /// Parent of a live element.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.node(id)?.parent
    }

    /// Children of a live element, in order. Empty for stale ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Element data for a live id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.node(id).map(|n| &n.element)
    }

    /// Attribute value, if the element is live and carries it.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)?.attributes.get(name).map(String::as_str)
    }

    /// Returns true if the element carries the attribute, whatever its value.
    pub fn has_attribute(&self, id: ElementId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute on a live element.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.attributes.insert(name.into(), value.into());
        }
    }

    /// Remove an attribute from a live element.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.attributes.remove(name);
        }
    }

    /// Inline style property value.
    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.element(id)?.style.get(property).map(String::as_str)
    }

    /// Set an inline style property.
    pub fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            // Skip the allocation when the value is unchanged; render loops
            // rewrite the same values every idle frame.
            if n.element.style.get(property).map(String::as_str) != Some(value) {
                n.element.style.insert(property.into(), value.into());
            }
        }
    }

    /// Update client-space bounds.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.bounds = bounds;
        }
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.flags = flags;
        }
    }

    /// Client-space bounding box of a connected element.
    pub fn bounding_client_rect(&self, id: ElementId) -> Option<Rect> {
        if !self.is_connected(id) {
            return None;
        }
        self.element(id).map(|e| e.bounds)
    }

    /// Scroll the viewport by `delta`: every element's client bounds move by `-delta`.
    pub fn scroll_by(&mut self, delta: Vec2) {
        for n in self.nodes.iter_mut().flatten() {
            n.element.bounds = n.element.bounds - delta;
        }
    }

    /// Connected elements carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<ElementId> {
        self.preorder(self.body)
            .into_iter()
            .filter(|(id, _)| self.element(*id).is_some_and(|e| e.has_class(class)))
            .map(|(id, _)| id)
            .collect()
    }

    /// First strict descendant of `root` carrying `class`, in document order.
    pub fn find_descendant(&self, root: ElementId, class: &str) -> Option<ElementId> {
        self.preorder(root)
            .into_iter()
            .skip(1)
            .map(|(id, _)| id)
            .find(|id| self.element(*id).is_some_and(|e| e.has_class(class)))
    }

    /// Hit test a client-space point. Returns the topmost visible, pickable,
    /// connected element.
    ///
    /// Ordering: higher `z_index` wins; on equal z the deeper element wins
    /// (children paint over parents); then the newer [`ElementId`].
    pub fn hit_test_point(&self, pt: Point) -> Option<Hit> {
        let wanted = ElementFlags::VISIBLE | ElementFlags::PICKABLE;
        let mut best: Option<(ElementId, i32, usize)> = None;
        for (id, depth) in self.preorder(self.body) {
            let Some(el) = self.element(id) else {
                continue;
            };
            if !el.flags.contains(wanted) || !el.bounds.contains(pt) {
                continue;
            }
            let z = el.z_index;
            let better = match best {
                None => true,
                Some((best_id, z_best, d_best)) => {
                    z > z_best
                        || (z == z_best && depth > d_best)
                        || (z == z_best && depth == d_best && id.is_newer_than(best_id))
                }
            };
            if better {
                best = Some((id, z, depth));
            }
        }
        best.map(|(element, _, _)| Hit {
            element,
            path: self.path_to_root(element),
        })
    }

    /// Path from the outermost ancestor to `id` (inclusive). Empty for stale ids.
    pub fn path_to_root(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            if !self.is_alive(c) {
                break;
            }
            out.push(c);
            cur = self.parent_of(c);
        }
        out.reverse();
        out
    }

    // --- internals ---

    fn alloc(&mut self, element: Element) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, element));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, element)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        ElementId::new(idx, generation)
    }

    fn free_subtree(&mut self, id: ElementId) {
        let children = match self.node(id) {
            Some(n) => n.children.clone(),
            None => return,
        };
        for child in children {
            self.free_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.generation()).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    fn is_inclusive_ancestor(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent_of(id) {
                Some(p) => id = p,
                None => return false,
            }
        }
    }

    /// Preorder walk from `root` with depth relative to it.
    fn preorder(&self, root: ElementId) -> Vec<(ElementId, usize)> {
        let mut out = Vec::new();
        if !self.is_alive(root) {
            return out;
        }
        let mut stack = vec![(root, 0_usize)];
        while let Some((id, depth)) = stack.pop() {
            out.push((id, depth));
            for &c in self.children(id).iter().rev() {
                stack.push((c, depth + 1));
            }
        }
        out
    }
}
