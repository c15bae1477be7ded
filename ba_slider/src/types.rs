// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the engine: input events, responses, and mutation batches.
//!
//! ## Overview
//!
//! These types describe what a host feeds into the [`Engine`](crate::Engine)
//! and what it gets back. Coordinates are client-space [`Point`]s, the same
//! space as [`SliderHost::bounding_client_rect`](crate::SliderHost::bounding_client_rect).

use kurbo::Point;

/// A mouse-style pointer event.
///
/// Appears inside [`InputEvent::Pointer`] and is routed by
/// [`Engine::handle_event`](crate::Engine::handle_event).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a client point.
    Down(Point),
    /// Pointer moved to a client point.
    Move(Point),
    /// Button released at a client point. Ends drags anywhere in the window.
    Up(Point),
    /// The platform cancelled the pointer.
    Cancel,
    /// The pointer left the window.
    LeaveWindow,
}

/// Lifecycle phase of a touch event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TouchPhase {
    /// A contact started.
    Start,
    /// A contact moved.
    Move,
    /// A contact lifted.
    End,
    /// The platform cancelled the contact.
    Cancel,
}

/// A touch event with the list of active contacts.
///
/// Only the primary (first) contact is tracked.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Event phase.
    pub phase: TouchPhase,
    /// Client points of the active contacts, primary first.
    pub touches: Vec<Point>,
}

impl TouchEvent {
    /// Build a touch event with a single contact.
    pub fn single(phase: TouchPhase, point: Point) -> Self {
        Self {
            phase,
            touches: vec![point],
        }
    }

    /// Build a touch event with no active contacts (typical for end/cancel).
    pub fn released(phase: TouchPhase) -> Self {
        Self {
            phase,
            touches: Vec::new(),
        }
    }

    /// The primary contact, if any.
    pub fn primary(&self) -> Option<Point> {
        self.touches.first().copied()
    }
}

/// Any input the engine understands.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse-style pointer input.
    Pointer(PointerEvent),
    /// Touch input.
    Touch(TouchEvent),
}

impl From<PointerEvent> for InputEvent {
    fn from(ev: PointerEvent) -> Self {
        Self::Pointer(ev)
    }
}

impl From<TouchEvent> for InputEvent {
    fn from(ev: TouchEvent) -> Self {
        Self::Touch(ev)
    }
}

/// Outcome of one session handling one event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct InputOutcome {
    /// The session changed its state or target.
    pub handled: bool,
    /// The host should suppress the platform default (selection, scrolling).
    pub default_prevented: bool,
}

impl InputOutcome {
    pub(crate) const IGNORED: Self = Self {
        handled: false,
        default_prevented: false,
    };

    pub(crate) const HANDLED: Self = Self {
        handled: true,
        default_prevented: false,
    };

    pub(crate) const CONSUMED: Self = Self {
        handled: true,
        default_prevented: true,
    };
}

/// Aggregate outcome of dispatching one event to every affected session.
///
/// Returned by [`Engine::handle_event`](crate::Engine::handle_event).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EventResponse {
    /// Any session asked to suppress the platform default.
    pub default_prevented: bool,
    /// Number of sessions that handled the event.
    pub sessions_touched: usize,
}

impl EventResponse {
    pub(crate) fn absorb(&mut self, outcome: InputOutcome) {
        self.default_prevented |= outcome.default_prevented;
        if outcome.handled {
            self.sessions_touched += 1;
        }
    }
}

/// Structural changes reported by the host, the way a mutation observer batches
/// `childList` records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutations<E> {
    /// Roots of subtrees that were added.
    pub added: Vec<E>,
    /// Roots of subtrees that were removed.
    pub removed: Vec<E>,
}

impl<E> Default for Mutations<E> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
        }
    }
}

impl<E> Mutations<E> {
    /// True if nothing was added or removed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
