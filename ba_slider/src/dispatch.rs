// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared input dispatcher.
//!
//! ## Routing
//!
//! The host delivers every input event once, to [`Engine::handle_event`]. The
//! engine resolves the hit path for the event point and routes as follows:
//!
//! - `Down`: every session whose container lies on the hit path. Nested
//!   sliders therefore both see the press, as with bubbling listeners.
//! - `Move`: sessions on the path get inside handling (hover, vertical
//!   tracking, drag); every other session gets outside handling (drag
//!   continues, hover ends).
//! - `Up`, `Cancel`, `LeaveWindow`: every session; only dragging ones react.
//! - Touch `Start`: sessions on the path of the primary contact. Those
//!   sessions join the touch capture until the touch ends.
//! - Touch `Move`: captured sessions only, wherever the contact is.
//! - Touch `End`/`Cancel`: captured sessions, then capture is released.
//!
//! The response reports whether any session asked to suppress the platform
//! default. Touch handling never does; mouse drags always do.

use kurbo::Point;
use tracing::trace;

use crate::engine::Engine;
use crate::host::SliderHost;
use crate::session::SessionId;
use crate::types::{EventResponse, InputEvent, PointerEvent, TouchEvent, TouchPhase};

impl<E: Copy + Eq + core::fmt::Debug> Engine<E> {
    /// Route one input event to the sessions it concerns.
    pub fn handle_event<H>(&mut self, host: &mut H, event: &InputEvent) -> EventResponse
    where
        H: SliderHost<Element = E>,
    {
        let response = match event {
            InputEvent::Pointer(ev) => self.pointer(host, *ev),
            InputEvent::Touch(ev) => self.touch(host, ev),
        };
        trace!(
            ?event,
            touched = response.sessions_touched,
            default_prevented = response.default_prevented,
            "input dispatched"
        );
        response
    }

    fn pointer<H>(&mut self, host: &mut H, event: PointerEvent) -> EventResponse
    where
        H: SliderHost<Element = E>,
    {
        let mut response = EventResponse::default();
        let options = &self.options;
        match event {
            PointerEvent::Down(point) => {
                let path = host.hit_path(point);
                for (_, session) in self.sessions.iter_mut() {
                    if path.contains(&session.parts.container) {
                        response.absorb(session.mouse_down(host, options, point));
                    }
                }
            }
            PointerEvent::Move(point) => {
                let path = host.hit_path(point);
                for (_, session) in self.sessions.iter_mut() {
                    let outcome = if path.contains(&session.parts.container) {
                        session.mouse_move_inside(host, options, point)
                    } else {
                        session.mouse_move_outside(host, options, point)
                    };
                    response.absorb(outcome);
                }
            }
            PointerEvent::Up(_) | PointerEvent::Cancel | PointerEvent::LeaveWindow => {
                for (_, session) in self.sessions.iter_mut() {
                    response.absorb(session.release(host, options));
                }
            }
        }
        response
    }

    fn touch<H>(&mut self, host: &mut H, event: &TouchEvent) -> EventResponse
    where
        H: SliderHost<Element = E>,
    {
        let mut response = EventResponse::default();
        match event.phase {
            TouchPhase::Start => {
                let Some(point) = event.primary() else {
                    return response;
                };
                // Earlier contacts keep their sessions; the next end releases all.
                for id in self.touch_start(host, point, &mut response) {
                    if !self.touch_capture.contains(&id) {
                        self.touch_capture.push(id);
                    }
                }
            }
            TouchPhase::Move => {
                let Some(point) = event.primary() else {
                    return response;
                };
                for &id in &self.touch_capture {
                    if let Some(session) = self.sessions.get_mut(id) {
                        response.absorb(session.touch_move(host, &self.options, point));
                    }
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                for id in core::mem::take(&mut self.touch_capture) {
                    if let Some(session) = self.sessions.get_mut(id) {
                        response.absorb(session.touch_end(host, &self.options));
                    }
                }
            }
        }
        response
    }

    fn touch_start<H>(
        &mut self,
        host: &mut H,
        point: Point,
        response: &mut EventResponse,
    ) -> Vec<SessionId>
    where
        H: SliderHost<Element = E>,
    {
        let path = host.hit_path(point);
        let options = &self.options;
        let mut captured = Vec::new();
        for (id, session) in self.sessions.iter_mut() {
            if path.contains(&session.parts.container) {
                response.absorb(session.touch_start(host, options, point));
                captured.push(id);
            }
        }
        captured
    }

    /// Sessions currently holding the touch capture.
    pub fn touch_capture(&self) -> &[SessionId] {
        &self.touch_capture
    }
}
