// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Config reader: per-instance behavior derived from live container attributes.
//!
//! [`read_config`] is called on every input event and every frame. Nothing is
//! cached, so a collaborator flipping `data-ba-mode` mid-drag changes behavior
//! on the very next query.
//!
//! Values are never rejected:
//!
//! - Unknown mode strings fall back to the defaults ([`InteractionMode::Drag`],
//!   [`VerticalMode::Center`]).
//! - Damping is parsed leniently (leading numeric prefix, like a browser's
//!   `parseFloat`), defaulted when unparsable, and clamped into range.

use crate::host::SliderHost;
use crate::options::SliderOptions;

/// How horizontal input drives the split.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum InteractionMode {
    /// The split follows the pointer only while a button is held.
    #[default]
    Drag,
    /// The split follows the pointer whenever it is over the container.
    Hover,
}

impl InteractionMode {
    /// Parse an attribute value; anything other than `hover` is `Drag`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.trim().eq_ignore_ascii_case("hover") => Self::Hover,
            _ => Self::Drag,
        }
    }
}

/// Whether the knob tracks the pointer vertically.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum VerticalMode {
    /// The knob stays vertically centered.
    #[default]
    Center,
    /// The knob follows the pointer's vertical position.
    Move,
}

impl VerticalMode {
    /// Parse an attribute value; anything other than `move` is `Center`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.trim().eq_ignore_ascii_case("move") => Self::Move,
            _ => Self::Center,
        }
    }
}

/// Snapshot of one container's behavior at the time of the query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Horizontal interaction mode.
    pub interaction_mode: InteractionMode,
    /// Vertical tracking mode.
    pub vertical_mode: VerticalMode,
    /// Fraction of the remaining gap closed per frame, within the configured bounds.
    pub damping: f64,
}

impl SliderConfig {
    /// Returns true if vertical tracking is enabled.
    pub fn tracks_vertical(&self) -> bool {
        self.vertical_mode == VerticalMode::Move
    }
}

/// Read the current configuration of `container`.
pub fn read_config<H: SliderHost>(
    host: &H,
    container: H::Element,
    options: &SliderOptions,
) -> SliderConfig {
    let names = &options.attributes;
    let mode = host.attribute(container, &names.mode);
    let vertical = host.attribute(container, &names.vertical);
    let damping = host.attribute(container, &names.damping);
    SliderConfig {
        interaction_mode: InteractionMode::parse(mode.as_deref()),
        vertical_mode: VerticalMode::parse(vertical.as_deref()),
        damping: parse_damping(damping.as_deref(), options),
    }
}

/// Parse a damping attribute, defaulting and clamping as configured.
pub fn parse_damping(raw: Option<&str>, options: &SliderOptions) -> f64 {
    match raw.and_then(parse_float_prefix) {
        Some(v) if !v.is_nan() => v.clamp(options.min_damping, options.max_damping),
        _ => options.default_damping,
    }
}

/// Parse the longest leading decimal number of `raw`, skipping leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, and `Infinity`. Returns `None` when no digits are present.
pub(crate) fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            i = 1;
            true
        }
        Some(b'+') => {
            i = 1;
            false
        }
        _ => false,
    };
    if s[i..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac = j - (i + 1);
        if digits + frac > 0 {
            digits += frac;
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    s[..i].parse().ok()
}
