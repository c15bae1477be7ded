// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine-wide options: markup names and numeric constants.
//!
//! These are fixed when the [`Engine`](crate::Engine) is built. Per-instance
//! behavior (mode, vertical tracking, damping) is read live from attributes by
//! the [`config`](crate::config) reader instead.
//!
//! With the `serde` feature every struct here deserializes with per-field
//! defaults, so a partial document such as `{"quiescence_epsilon": 0.001}` is
//! valid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attribute names read from and written to each container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AttributeNames {
    /// Interaction mode: `drag` or `hover`.
    pub mode: String,
    /// Vertical mode: `center` or `move`.
    pub vertical: String,
    /// Damping factor.
    pub damping: String,
    /// Written while a drag is active.
    pub dragging: String,
    /// Written when the container has been visited by discovery.
    pub initialized: String,
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self {
            mode: "data-ba-mode".into(),
            vertical: "data-ba-vertical".into(),
            damping: "data-ba-damping".into(),
            dragging: "data-ba-dragging".into(),
            initialized: "data-ba-initialized".into(),
        }
    }
}

/// Class names used to discover containers and their parts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ClassNames {
    /// The slider container.
    pub container: String,
    /// The "before" layer whose width follows the split.
    pub before: String,
    /// The divider handle whose left offset follows the split.
    pub handle: String,
    /// Optional knob that may track the pointer vertically.
    pub knob: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "ba-slider".into(),
            before: "ba-slider--before".into(),
            handle: "ba-slider--handle".into(),
            knob: "ba-slider--knob".into(),
        }
    }
}

/// Options shared by every session of an engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SliderOptions {
    /// Attribute names.
    pub attributes: AttributeNames,
    /// Class names.
    pub classes: ClassNames,
    /// Damping used when the attribute is missing or unparsable.
    pub default_damping: f64,
    /// Lower damping bound.
    pub min_damping: f64,
    /// Upper damping bound.
    pub max_damping: f64,
    /// Per-axis gap below which the render loop snaps and goes quiescent.
    pub quiescence_epsilon: f64,
    /// Initial horizontal split, in percent.
    pub initial_x: f64,
    /// Initial vertical knob position, in percent.
    pub initial_y: f64,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            attributes: AttributeNames::default(),
            classes: ClassNames::default(),
            default_damping: 0.15,
            min_damping: 0.01,
            max_damping: 1.0,
            quiescence_epsilon: 0.01,
            initial_x: 50.0,
            initial_y: 50.0,
        }
    }
}

impl SliderOptions {
    /// Repair values that would break the numeric invariants, falling back to
    /// the defaults field by field.
    ///
    /// - Damping bounds must be finite, within `(0, 1]`, and ordered.
    /// - The default damping is clamped into the bounds.
    /// - The epsilon must be finite and positive.
    /// - Initial positions are clamped to `[0, 100]`.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let in_unit = |v: f64| v.is_finite() && v > 0.0 && v <= 1.0;
        if !in_unit(self.min_damping) {
            self.min_damping = defaults.min_damping;
        }
        if !in_unit(self.max_damping) {
            self.max_damping = defaults.max_damping;
        }
        if self.min_damping > self.max_damping {
            core::mem::swap(&mut self.min_damping, &mut self.max_damping);
        }
        if !self.default_damping.is_finite() {
            self.default_damping = defaults.default_damping;
        }
        self.default_damping = self
            .default_damping
            .clamp(self.min_damping, self.max_damping);
        if !(self.quiescence_epsilon.is_finite() && self.quiescence_epsilon > 0.0) {
            self.quiescence_epsilon = defaults.quiescence_epsilon;
        }
        self.initial_x = clamp_percent(self.initial_x, defaults.initial_x);
        self.initial_y = clamp_percent(self.initial_y, defaults.initial_y);
        self
    }
}

fn clamp_percent(v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 100.0)
    } else {
        fallback
    }
}
