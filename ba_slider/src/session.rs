// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sessions and the generational session table.
//!
//! A [`Session`] is the live state bound to one slider container: the element
//! handles it writes to, the current and target split positions, the
//! interaction state, and its render loop. Sessions live in a slot table keyed
//! by [`SessionId`]; removing a session frees its slot, and a reused slot gets
//! a new generation so old ids never alias the new occupant.

use kurbo::Point;

use crate::interaction::InteractionState;
use crate::render::RenderLoop;

/// Generational handle to a session in an [`Engine`](crate::Engine).
///
/// Becomes stale when the session is destroyed; stale ids resolve to `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionId(u32, u32);

impl SessionId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Element handles that make up one slider.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SessionParts<E> {
    /// The container that carries the configuration attributes.
    pub container: E,
    /// The layer whose width follows the split.
    pub before: E,
    /// The divider whose left offset follows the split.
    pub handle: E,
    /// Optional knob; without one, vertical tracking is disabled.
    pub knob: Option<E>,
}

/// Live state of one slider.
#[derive(Clone, Debug)]
pub struct Session<E> {
    pub(crate) parts: SessionParts<E>,
    pub(crate) current: Point,
    pub(crate) target: Point,
    pub(crate) state: InteractionState,
    pub(crate) render: RenderLoop,
}

impl<E: Copy> Session<E> {
    pub(crate) fn new(parts: SessionParts<E>, initial: Point) -> Self {
        Self {
            parts,
            current: initial,
            target: initial,
            state: InteractionState::Idle,
            render: RenderLoop::default(),
        }
    }

    /// Element handles.
    pub fn parts(&self) -> &SessionParts<E> {
        &self.parts
    }

    /// The container element.
    pub fn container(&self) -> E {
        self.parts.container
    }

    /// Rendered split position, in percent.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Desired split position, in percent.
    pub fn target(&self) -> Point {
        self.target
    }

    /// Interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Returns true while a mouse or touch drag is active.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// The session's render loop.
    pub fn render_loop(&self) -> &RenderLoop {
        &self.render
    }
}

/// Slot table of sessions.
#[derive(Clone, Debug)]
pub(crate) struct SessionTable<E> {
    slots: Vec<Option<Session<E>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<E> Default for SessionTable<E> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<E: Copy + Eq> SessionTable<E> {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "SessionId uses 32-bit indices."
    )]
    pub(crate) fn insert(&mut self, session: Session<E>) -> SessionId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(session);
            (idx, generation)
        } else {
            self.slots.push(Some(session));
            self.generations.push(1);
            (self.slots.len() - 1, 1)
        };
        SessionId(idx as u32, generation)
    }

    pub(crate) fn remove(&mut self, id: SessionId) -> Option<Session<E>> {
        if !self.contains(id) {
            return None;
        }
        let session = self.slots[id.idx()].take();
        self.free_list.push(id.idx());
        session
    }

    pub(crate) fn contains(&self, id: SessionId) -> bool {
        self.generations.get(id.idx()) == Some(&id.1)
            && self.slots.get(id.idx()).is_some_and(Option::is_some)
    }

    pub(crate) fn get(&self, id: SessionId) -> Option<&Session<E>> {
        if !self.contains(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: SessionId) -> Option<&mut Session<E>> {
        if !self.contains(id) {
            return None;
        }
        self.slots[id.idx()].as_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "SessionId uses 32-bit indices."
    )]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (SessionId, &Session<E>)> {
        self.slots
            .iter()
            .zip(&self.generations)
            .enumerate()
            .filter_map(|(i, (slot, generation))| {
                slot.as_ref().map(|s| (SessionId(i as u32, *generation), s))
            })
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "SessionId uses 32-bit indices."
    )]
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (SessionId, &mut Session<E>)> {
        self.slots
            .iter_mut()
            .zip(&self.generations)
            .enumerate()
            .filter_map(|(i, (slot, generation))| {
                slot.as_mut().map(|s| (SessionId(i as u32, *generation), s))
            })
    }

    pub(crate) fn find_by_container(&self, container: E) -> Option<SessionId> {
        self.iter()
            .find(|(_, s)| s.parts.container == container)
            .map(|(id, _)| id)
    }
}
