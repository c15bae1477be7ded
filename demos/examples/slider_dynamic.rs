// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sliders arriving and leaving after startup.
//!
//! Starts on a loading document, finishes loading, then inserts a gallery of
//! sliders the way a lazy-loaded section would and removes one again. Each
//! batch of structural changes is fed to the engine with `sync_mutations`.
//!
//! Run:
//! - `cargo run -p ba_slider_demos --example slider_dynamic`

use ba_slider::Engine;
use ba_slider::adapters::document::sync_mutations;
use ba_slider_document::{Document, Element, ElementId};
use kurbo::Rect;

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "ba_slider=debug".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build a detached slider subtree.
fn detached_slider(doc: &mut Document, bounds: Rect) -> ElementId {
    let c = doc.create(Element::new().with_class("ba-slider").with_bounds(bounds));
    let before = doc.create(Element::new().with_class("ba-slider--before"));
    let handle = doc.create(Element::new().with_class("ba-slider--handle"));
    doc.append_child(c, before);
    doc.append_child(c, handle);
    c
}

fn main() {
    init_tracing();

    let mut doc = Document::loading();
    let body = doc.body();
    let hero = detached_slider(&mut doc, Rect::new(0.0, 0.0, 600.0, 400.0));
    doc.append_child(body, hero);

    let mut engine = Engine::default();
    println!("start while loading: attached {}", engine.start(&mut doc));
    doc.finish_loading();
    println!("document ready: attached {}", engine.document_ready(&mut doc));
    let _ = doc.take_mutations();

    let gallery = doc.create(Element::new().with_class("gallery"));
    let items: Vec<ElementId> = (0..3)
        .map(|i| {
            let y = 500.0 + f64::from(i) * 250.0;
            let s = detached_slider(&mut doc, Rect::new(0.0, y, 300.0, y + 200.0));
            doc.append_child(gallery, s);
            s
        })
        .collect();
    doc.append_child(body, gallery);
    let report = sync_mutations(&mut engine, &mut doc);
    println!("gallery inserted: {report:?}, live sessions = {}", engine.len());
    assert_eq!(report.attached, 3);

    doc.remove(items[1]);
    let report = sync_mutations(&mut engine, &mut doc);
    println!("one removed: {report:?}, live sessions = {}", engine.len());
    assert_eq!(report.detached, 1);
    assert_eq!(engine.len(), 3);

    let f = engine.frame(&mut doc);
    println!("frame: {f:?}");
    assert_eq!(f.ticked, 3);
}
