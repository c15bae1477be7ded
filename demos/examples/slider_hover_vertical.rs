// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A control panel flipping a live slider between modes.
//!
//! The panel only writes container attributes; the engine picks each change
//! up on the next event or frame. Shows hover tracking, the knob following
//! the pointer vertically, and the switch back to drag mode.
//!
//! Run:
//! - `cargo run -p ba_slider_demos --example slider_hover_vertical`

use ba_slider::{Engine, PointerEvent};
use ba_slider_document::{Document, Element, ElementId};
use kurbo::{Point, Rect};

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "ba_slider=debug".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// The demo's button row. Each button sets one attribute on the slider.
struct ControlPanel {
    slider: ElementId,
}

impl ControlPanel {
    fn mode(&self, doc: &mut Document, mode: &str) {
        doc.set_attribute(self.slider, "data-ba-mode", mode);
        tracing::info!(mode, "control panel: mode");
    }

    fn vertical(&self, doc: &mut Document, vertical: &str) {
        doc.set_attribute(self.slider, "data-ba-vertical", vertical);
        tracing::info!(vertical, "control panel: vertical");
    }

    fn damping(&self, doc: &mut Document, damping: &str) {
        doc.set_attribute(self.slider, "data-ba-damping", damping);
        tracing::info!(damping, "control panel: damping");
    }
}

fn settle(engine: &mut Engine<ElementId>, doc: &mut Document) {
    while !engine.frame(doc).is_idle() {}
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
                .with_bounds(Rect::new(0.0, 0.0, 400.0, 400.0)),
        )
        .unwrap();
    let before = doc
        .insert(slider, Element::new().with_class("ba-slider--before"))
        .unwrap();
    let handle = doc
        .insert(slider, Element::new().with_class("ba-slider--handle"))
        .unwrap();
    let knob = doc
        .insert(handle, Element::new().with_class("ba-slider--knob"))
        .unwrap();

    let panel = ControlPanel { slider };
    let mut engine = Engine::default();
    let _ = engine.start(&mut doc);

    panel.mode(&mut doc, "hover");
    panel.vertical(&mut doc, "move");
    panel.damping(&mut doc, "0.3");
    let _ = engine.handle_event(&mut doc, &PointerEvent::Move(Point::new(100.0, 300.0)).into());
    settle(&mut engine, &mut doc);
    println!(
        "hover+move: width = {:?}, knob top = {:?}",
        doc.style(before, "width"),
        doc.style(knob, "top")
    );
    assert_eq!(doc.style(before, "width"), Some("25%"));
    assert_eq!(doc.style(knob, "top"), Some("75%"));

    panel.vertical(&mut doc, "center");
    let _ = engine.frame(&mut doc);
    println!("center: knob top = {:?}", doc.style(knob, "top"));
    assert_eq!(doc.style(knob, "top"), Some("50%"));

    panel.mode(&mut doc, "drag");
    let _ = engine.handle_event(&mut doc, &PointerEvent::Move(Point::new(350.0, 200.0)).into());
    settle(&mut engine, &mut doc);
    println!("drag without press: width = {:?}", doc.style(before, "width"));
    assert_eq!(doc.style(before, "width"), Some("25%"));
}
