// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine: session table, frame driver, and shared entry points.
//!
//! One [`Engine`] serves every slider in a document. Hosts call into it from
//! three places:
//!
//! - input: [`Engine::handle_event`] (see [`dispatch`](crate::dispatch)),
//! - structure: [`Engine::start`], [`Engine::document_ready`], and
//!   [`Engine::mutations`] (see [`lifecycle`](crate::lifecycle)),
//! - time: [`Engine::frame`], once per animation frame.
//!
//! Everything runs on the caller's thread; an input handler's target write is
//! visible to the next `frame` call.

use kurbo::Point;

use crate::host::SliderHost;
use crate::options::SliderOptions;
use crate::render::TickOutcome;
use crate::session::{Session, SessionId, SessionTable};

/// Where the engine is in its startup sequence.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum StartPhase {
    /// [`Engine::start`] has not been called.
    #[default]
    NotStarted,
    /// Started while the document was loading; waiting for
    /// [`Engine::document_ready`].
    Deferred,
    /// Discovery has run and structural mutations trigger rescans.
    Running,
}

/// Summary of one [`Engine::frame`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FrameReport {
    /// Sessions whose loop ticked.
    pub ticked: usize,
    /// Sessions that interpolated this frame.
    pub moving: usize,
    /// Sessions that were already at their target.
    pub quiescent: usize,
}

impl FrameReport {
    /// Returns true if nothing moved this frame.
    pub fn is_idle(&self) -> bool {
        self.moving == 0
    }
}

/// Interaction engine for every slider in one document.
#[derive(Clone, Debug)]
pub struct Engine<E> {
    pub(crate) options: SliderOptions,
    pub(crate) sessions: SessionTable<E>,
    pub(crate) touch_capture: Vec<SessionId>,
    pub(crate) phase: StartPhase,
}

impl<E: Copy + Eq + core::fmt::Debug> Default for Engine<E> {
    fn default() -> Self {
        Self::new(SliderOptions::default())
    }
}

impl<E: Copy + Eq + core::fmt::Debug> Engine<E> {
    /// Create an engine. Options are [sanitized](SliderOptions::sanitized).
    pub fn new(options: SliderOptions) -> Self {
        Self {
            options: options.sanitized(),
            sessions: SessionTable::default(),
            touch_capture: Vec::new(),
            phase: StartPhase::NotStarted,
        }
    }

    /// Engine options.
    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// Startup phase.
    pub fn phase(&self) -> StartPhase {
        self.phase
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if no session is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a session. `None` for stale ids.
    pub fn session(&self, id: SessionId) -> Option<&Session<E>> {
        self.sessions.get(id)
    }

    /// The session attached to `container`, if any.
    pub fn session_for(&self, container: E) -> Option<SessionId> {
        self.sessions.find_by_container(container)
    }

    /// Live sessions in slot order.
    pub fn sessions(&self) -> impl Iterator<Item = (SessionId, &Session<E>)> {
        self.sessions.iter()
    }

    /// Override a session's target directly, clamped to `[0, 100]`.
    ///
    /// Hosts use this for programmatic moves (keyboard shortcuts, reset
    /// buttons). Returns false for stale ids or non-finite input.
    pub fn set_target(&mut self, id: SessionId, target: Point) -> bool {
        if !(target.x.is_finite() && target.y.is_finite()) {
            return false;
        }
        let Some(session) = self.sessions.get_mut(id) else {
            return false;
        };
        session.target = Point::new(target.x.clamp(0.0, 100.0), target.y.clamp(0.0, 100.0));
        true
    }

    /// Tick every session's render loop once.
    ///
    /// Call from the host's animation-frame callback. Loops never stop on
    /// their own, so hosts keep requesting frames while the engine has
    /// sessions.
    pub fn frame<H>(&mut self, host: &mut H) -> FrameReport
    where
        H: SliderHost<Element = E>,
    {
        let mut report = FrameReport::default();
        let options = &self.options;
        for (_, session) in self.sessions.iter_mut() {
            match session.tick(host, options) {
                Some(TickOutcome::Moving) => report.moving += 1,
                Some(TickOutcome::Quiescent) => report.quiescent += 1,
                None => continue,
            }
            report.ticked += 1;
        }
        tracing::trace!(
            ticked = report.ticked,
            moving = report.moving,
            quiescent = report.quiescent,
            "frame"
        );
        report
    }

    /// Returns true while there are sessions whose loops want another frame.
    pub fn wants_frame(&self) -> bool {
        self.sessions.iter().any(|(_, s)| s.render.is_running())
    }
}
