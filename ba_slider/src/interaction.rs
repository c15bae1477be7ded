// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state machine: input events to target positions.
//!
//! ## States
//!
//! - [`InteractionState::Idle`]: nothing drives the target.
//! - [`InteractionState::Hovering`]: hover mode, pointer over the container.
//! - [`InteractionState::Dragging`]: a mouse button or touch contact is down.
//!
//! Mouse drags only start in [`InteractionMode::Drag`]; touch always drags,
//! because touch devices have no hover. Every handler re-reads the
//! [config](crate::config) first, so a mode flip applies on the next event.
//!
//! ## Vertical tracking
//!
//! With `vertical-mode = move` and a knob present, a mouse move over the
//! container always updates the vertical target, independent of the
//! horizontal mode gate.
//!
//! Handlers here act on one session. The [`Engine`](crate::Engine) decides
//! which sessions see which event.

use kurbo::Point;

use crate::config::{InteractionMode, SliderConfig, read_config};
use crate::host::SliderHost;
use crate::options::SliderOptions;
use crate::pointer::measure;
use crate::session::Session;
use crate::types::InputOutcome;

/// What started a drag.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerSource {
    /// A mouse button.
    Mouse,
    /// A touch contact.
    Touch,
}

/// Interaction state of one session.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum InteractionState {
    /// No input drives the target.
    #[default]
    Idle,
    /// Hover mode with the pointer over the container.
    Hovering,
    /// A drag is in progress.
    Dragging {
        /// Input that started the drag.
        source: PointerSource,
    },
}

impl InteractionState {
    /// Returns true while dragging.
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

impl<E: Copy + Eq + core::fmt::Debug> Session<E> {
    /// Mouse button pressed inside the container.
    pub(crate) fn mouse_down<H>(
        &mut self,
        host: &mut H,
        options: &SliderOptions,
        point: Point,
    ) -> InputOutcome
    where
        H: SliderHost<Element = E>,
    {
        let config = read_config(host, self.parts.container, options);
        if config.interaction_mode != InteractionMode::Drag {
            return InputOutcome::IGNORED;
        }
        self.begin_drag(host, options, PointerSource::Mouse);
        self.update_targets(host, &config, point);
        InputOutcome::CONSUMED
    }

    /// Mouse moved over the container.
    pub(crate) fn mouse_move_inside<H>(
        &mut self,
        host: &mut H,
        options: &SliderOptions,
        point: Point,
    ) -> InputOutcome
    where
        H: SliderHost<Element = E>,
    {
        let config = read_config(host, self.parts.container, options);
        let mut outcome = InputOutcome::IGNORED;

        if config.tracks_vertical() && self.parts.knob.is_some() {
            if let Some(y) = measure(host, self.parts.container, point).and_then(|n| n.y) {
                self.target.y = y;
            }
            outcome = InputOutcome::HANDLED;
        }

        match (self.state, config.interaction_mode) {
            (InteractionState::Dragging { .. }, _) => {
                self.update_targets(host, &config, point);
                InputOutcome::CONSUMED
            }
            (_, InteractionMode::Hover) => {
                self.transition(InteractionState::Hovering);
                self.update_targets(host, &config, point);
                InputOutcome::HANDLED
            }
            (InteractionState::Hovering, InteractionMode::Drag) => {
                // Mode flipped to drag without a press: hover updates stop here.
                self.transition(InteractionState::Idle);
                InputOutcome::HANDLED
            }
            (InteractionState::Idle, InteractionMode::Drag) => outcome,
        }
    }

    /// Mouse moved somewhere outside the container.
    pub(crate) fn mouse_move_outside<H>(
        &mut self,
        host: &mut H,
        options: &SliderOptions,
        point: Point,
    ) -> InputOutcome
    where
        H: SliderHost<Element = E>,
    {
        match self.state {
            InteractionState::Dragging { .. } => {
                let config = read_config(host, self.parts.container, options);
                self.update_targets(host, &config, point);
                InputOutcome::CONSUMED
            }
            InteractionState::Hovering => {
                self.transition(InteractionState::Idle);
                InputOutcome::HANDLED
            }
            InteractionState::Idle => InputOutcome::IGNORED,
        }
    }

    /// Button released, pointer cancelled, or pointer left the window.
    pub(crate) fn release<H>(&mut self, host: &mut H, options: &SliderOptions) -> InputOutcome
    where
        H: SliderHost<Element = E>,
    {
        if !self.state.is_dragging() {
            return InputOutcome::IGNORED;
        }
        self.end_drag(host, options);
        InputOutcome::HANDLED
    }

    /// Touch contact started inside the container. Drags regardless of mode.
    pub(crate) fn touch_start<H>(
        &mut self,
        host: &mut H,
        options: &SliderOptions,
        point: Point,
    ) -> InputOutcome
    where
        H: SliderHost<Element = E>,
    {
        let config = read_config(host, self.parts.container, options);
        self.begin_drag(host, options, PointerSource::Touch);
        self.update_targets(host, &config, point);
        InputOutcome::HANDLED
    }

    /// Captured touch contact moved. Touch handlers are passive.
    pub(crate) fn touch_move<H>(
        &mut self,
        host: &mut H,
        options: &SliderOptions,
        point: Point,
    ) -> InputOutcome
    where
        H: SliderHost<Element = E>,
    {
        let config = read_config(host, self.parts.container, options);
        self.update_targets(host, &config, point);
        InputOutcome::HANDLED
    }

    /// Captured touch contact lifted or was cancelled.
    pub(crate) fn touch_end<H>(&mut self, host: &mut H, options: &SliderOptions) -> InputOutcome
    where
        H: SliderHost<Element = E>,
    {
        self.end_drag(host, options);
        InputOutcome::HANDLED
    }

    /// Write normalized input into the target. The container is measured now.
    fn update_targets<H>(&mut self, host: &H, config: &SliderConfig, point: Point)
    where
        H: SliderHost<Element = E>,
    {
        let Some(n) = measure(host, self.parts.container, point) else {
            return;
        };
        if let Some(x) = n.x {
            self.target.x = x;
        }
        if config.tracks_vertical()
            && self.parts.knob.is_some()
            && let Some(y) = n.y
        {
            self.target.y = y;
        }
    }

    fn begin_drag<H>(&mut self, host: &mut H, options: &SliderOptions, source: PointerSource)
    where
        H: SliderHost<Element = E>,
    {
        self.transition(InteractionState::Dragging { source });
        host.set_attribute(self.parts.container, &options.attributes.dragging, "true");
    }

    fn end_drag<H>(&mut self, host: &mut H, options: &SliderOptions)
    where
        H: SliderHost<Element = E>,
    {
        self.transition(InteractionState::Idle);
        host.remove_attribute(self.parts.container, &options.attributes.dragging);
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state != next {
            tracing::trace!(
                container = ?self.parts.container,
                from = ?self.state,
                to = ?next,
                "interaction transition"
            );
            self.state = next;
        }
    }
}
