// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer normalizer: client points to container-relative percentages.
//!
//! Mouse and touch input both arrive as client-space [`Point`]s; this module
//! turns them into `[0, 100]` percentages of the container's bounding box.
//! Callers re-measure the box for every event (see [`measure`]) because scroll
//! and resize move it without telling the engine.

use kurbo::{Point, Rect};

use crate::host::SliderHost;

/// A client point expressed as percentages of a bounding box.
///
/// An axis is `None` when the box has no usable extent along it; callers leave
/// the corresponding target untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NormalizedPoint {
    /// Horizontal percentage in `[0, 100]`.
    pub x: Option<f64>,
    /// Vertical percentage in `[0, 100]`.
    pub y: Option<f64>,
}

/// Normalize `client` against `bounds`, clamping each axis to `[0, 100]`.
pub fn normalize(client: Point, bounds: Rect) -> NormalizedPoint {
    let bounds = bounds.abs();
    NormalizedPoint {
        x: normalize_axis(client.x, bounds.x0, bounds.width()),
        y: normalize_axis(client.y, bounds.y0, bounds.height()),
    }
}

/// Measure `container` now and normalize `client` against it.
///
/// Returns `None` if the host no longer knows the container.
pub fn measure<H: SliderHost>(
    host: &H,
    container: H::Element,
    client: Point,
) -> Option<NormalizedPoint> {
    let bounds = host.bounding_client_rect(container)?;
    Some(normalize(client, bounds))
}

fn normalize_axis(value: f64, origin: f64, extent: f64) -> Option<f64> {
    if !(extent.is_finite() && extent > 0.0) || value.is_nan() || origin.is_nan() {
        return None;
    }
    let offset = (value - origin).clamp(0.0, extent);
    Some(offset / extent * 100.0)
}
