// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a single slider and watch the split settle.
//!
//! Builds one 300×200 slider, presses a quarter of the way in, drags toward
//! the right edge, releases, and prints the before-layer width per frame.
//!
//! Run:
//! - `cargo run -p ba_slider_demos --example slider_basics`
//! - `RUST_LOG=ba_slider=trace cargo run -p ba_slider_demos --example slider_basics`

use ba_slider::{Engine, PointerEvent};
use ba_slider_document::{Document, Element};
use kurbo::{Point, Rect};

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "ba_slider=debug".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    init_tracing();

    let mut doc = Document::new();
    let body = doc.body();
    let slider = doc
        .insert(
            body,
            Element::new()
                .with_class("ba-slider")
                .with_bounds(Rect::new(20.0, 40.0, 320.0, 240.0)),
        )
        .unwrap();
    let before = doc
        .insert(slider, Element::new().with_class("ba-slider--before"))
        .unwrap();
    doc.insert(slider, Element::new().with_class("ba-slider--handle"));

    let mut engine = Engine::default();
    let attached = engine.start(&mut doc);
    println!("attached {attached} slider(s); width = {:?}", doc.style(before, "width"));

    // Press at left + 75 on a 300px container: 25%.
    let r = engine.handle_event(&mut doc, &PointerEvent::Down(Point::new(95.0, 100.0)).into());
    println!("press: default prevented = {}", r.default_prevented);
    for frame in 1..=5 {
        let _ = engine.frame(&mut doc);
        println!("frame {frame}: width = {:?}", doc.style(before, "width"));
    }

    // Keep dragging past the right edge; the target clamps at 100%.
    let _ = engine.handle_event(&mut doc, &PointerEvent::Move(Point::new(500.0, 100.0)).into());
    let _ = engine.handle_event(&mut doc, &PointerEvent::Up(Point::new(500.0, 100.0)).into());

    let mut frames = 0;
    while !engine.frame(&mut doc).is_idle() {
        frames += 1;
    }
    println!("settled after {frames} more frames: width = {:?}", doc.style(before, "width"));
    assert_eq!(doc.style(before, "width"), Some("100%"));
    assert_eq!(doc.attribute(slider, "data-ba-dragging"), None);
}
