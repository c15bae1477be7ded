// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped render loop: current position chases target position.
//!
//! Every frame each axis closes a fixed fraction (`damping`) of its remaining
//! gap:
//!
//! ```text
//! current += (target - current) * damping
//! ```
//!
//! Once both gaps are below the quiescence epsilon the loop snaps `current`
//! to `target` exactly, writes the output, and stops computing. It is still
//! ticked every frame so a new target is picked up immediately; an idle
//! session costs one config read and a few unchanged style writes per frame.
//!
//! ```
//! use ba_slider::render::{RenderLoop, TickOutcome};
//! use kurbo::Point;
//!
//! let mut current = Point::new(50.0, 50.0);
//! let target = Point::new(25.0, 50.0);
//! let outcome = RenderLoop::step(&mut current, target, 0.15, 0.01);
//! assert_eq!(outcome, TickOutcome::Moving);
//! assert_eq!(current.x, 46.25);
//! ```

use kurbo::Point;

use crate::config::{SliderConfig, read_config};
use crate::host::SliderHost;
use crate::options::SliderOptions;
use crate::session::Session;

/// Result of one render tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    /// The position moved toward the target.
    Moving,
    /// The position equals the target; nothing was interpolated.
    Quiescent,
}

/// Per-session loop bookkeeping.
///
/// A loop runs from session creation until the session is destroyed.
#[derive(Clone, Debug, Default)]
pub struct RenderLoop {
    frames: u64,
    cancelled: bool,
}

impl RenderLoop {
    /// Advance `current` one frame toward `target`.
    pub fn step(current: &mut Point, target: Point, damping: f64, epsilon: f64) -> TickOutcome {
        let dx = target.x - current.x;
        let dy = target.y - current.y;
        if dx.abs() < epsilon && dy.abs() < epsilon {
            *current = target;
            return TickOutcome::Quiescent;
        }
        current.x += dx * damping;
        current.y += dy * damping;
        TickOutcome::Moving
    }

    /// Frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns false once the owning session has been torn down.
    pub fn is_running(&self) -> bool {
        !self.cancelled
    }

    pub(crate) fn cancel(&mut self) {
        self.cancelled = true;
    }
}

impl<E: Copy + Eq + core::fmt::Debug> Session<E> {
    /// Run one frame: read config, step, write styles.
    ///
    /// Returns `None` if the loop was cancelled.
    pub(crate) fn tick<H>(&mut self, host: &mut H, options: &SliderOptions) -> Option<TickOutcome>
    where
        H: SliderHost<Element = E>,
    {
        if !self.render.is_running() {
            return None;
        }
        let config = read_config(host, self.parts.container, options);
        let outcome = RenderLoop::step(
            &mut self.current,
            self.target,
            config.damping,
            options.quiescence_epsilon,
        );
        self.write_output(host, &config);
        self.render.frames += 1;
        Some(outcome)
    }

    fn write_output<H>(&self, host: &mut H, config: &SliderConfig)
    where
        H: SliderHost<Element = E>,
    {
        let x = percent(self.current.x);
        host.set_style(self.parts.before, "width", &x);
        host.set_style(self.parts.handle, "left", &x);

        let Some(knob) = self.parts.knob else {
            return;
        };
        if config.tracks_vertical() {
            if host.style(knob, "position").as_deref() != Some("absolute") {
                host.set_style(knob, "position", "absolute");
            }
            host.set_style(knob, "top", &percent(self.current.y));
        } else {
            host.set_style(knob, "top", "50%");
        }
    }
}

/// Shortest round-trip decimal followed by `%`.
fn percent(v: f64) -> String {
    format!("{v}%")
}
