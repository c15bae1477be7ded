// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the slider engine.
//!
//! 1. Normalized positions stay in `[0, 100]` for any finite input.
//! 2. The damped step never overshoots and converges exactly.
//! 3. Damping parsed from arbitrary attribute text stays in range.
//! 4. Arbitrary input sequences keep every position in range and keep the
//!    dragging attribute in sync with the interaction state.
//! 5. Rescanning an unchanged document never adds sessions.

#![cfg(feature = "document_adapter")]

use ba_slider::config::parse_damping;
use ba_slider::interaction::{InteractionState, PointerSource};
use ba_slider::pointer::normalize;
use ba_slider::render::{RenderLoop, TickOutcome};
use ba_slider::{Engine, InputEvent, PointerEvent, SliderOptions, TouchEvent, TouchPhase};
use ba_slider_document::{Document, Element, ElementId};
use kurbo::{Point, Rect};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn point_strategy() -> impl Strategy<Value = Point> {
    (-1000.0..1000.0_f64, -1000.0..1000.0_f64).prop_map(|(x, y)| Point::new(x, y))
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -500.0..500.0_f64,
        -500.0..500.0_f64,
        1.0..800.0_f64,
        1.0..800.0_f64,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        point_strategy().prop_map(|p| PointerEvent::Down(p).into()),
        point_strategy().prop_map(|p| PointerEvent::Move(p).into()),
        point_strategy().prop_map(|p| PointerEvent::Up(p).into()),
        Just(PointerEvent::LeaveWindow.into()),
        point_strategy().prop_map(|p| TouchEvent::single(TouchPhase::Start, p).into()),
        point_strategy().prop_map(|p| TouchEvent::single(TouchPhase::Move, p).into()),
        Just(TouchEvent::released(TouchPhase::End).into()),
    ]
}

/// `[0, 100]` with room for one rounding step of `current + gap * damping`.
fn in_range(v: f64) -> bool {
    (-1e-9..=100.0 + 1e-9).contains(&v)
}

/// Two sliders with knobs; `b` overlaps `a` partly and tracks vertically.
fn page() -> (Document, ElementId, ElementId) {
    let mut doc = Document::new();
    let body = doc.body();
    let mut make = |rect: Rect| {
        let c = doc
            .insert(body, Element::new().with_class("ba-slider").with_bounds(rect))
            .unwrap();
        doc.insert(c, Element::new().with_class("ba-slider--before"));
        doc.insert(c, Element::new().with_class("ba-slider--handle"));
        doc.insert(c, Element::new().with_class("ba-slider--knob"));
        c
    };
    let a = make(Rect::new(0.0, 0.0, 400.0, 300.0));
    let b = make(Rect::new(200.0, 100.0, 600.0, 400.0));
    doc.set_attribute(b, "data-ba-vertical", "move");
    (doc, a, b)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Normalization is bounded
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalized_point_is_bounded(p in point_strategy(), r in rect_strategy()) {
        let n = normalize(p, r);
        let x = n.x.expect("positive width yields x");
        let y = n.y.expect("positive height yields y");
        prop_assert!(in_range(x), "x out of range: {x} for {p:?} in {r:?}");
        prop_assert!(in_range(y), "y out of range: {y} for {p:?} in {r:?}");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Damped step converges without overshoot
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_converges_monotonically(
        start in (0.0..=100.0_f64, 0.0..=100.0_f64),
        target in (0.0..=100.0_f64, 0.0..=100.0_f64),
        damping in 0.01..=1.0_f64,
    ) {
        let target = Point::new(target.0, target.1);
        let mut current = Point::new(start.0, start.1);
        let mut gap = (target.x - current.x).abs().max((target.y - current.y).abs());
        let mut frames = 0;
        while RenderLoop::step(&mut current, target, damping, 0.01) == TickOutcome::Moving {
            let next = (target.x - current.x).abs().max((target.y - current.y).abs());
            prop_assert!(next <= gap, "gap grew from {gap} to {next}");
            prop_assert!(in_range(current.x) && in_range(current.y), "left range: {current:?}");
            gap = next;
            frames += 1;
            prop_assert!(frames < 2000, "did not converge with damping {damping}");
        }
        prop_assert_eq!(current, target);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Parsed damping is always in range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parsed_damping_is_clamped(raw in ".{0,12}") {
        let options = SliderOptions::default();
        let d = parse_damping(Some(&raw), &options);
        prop_assert!(
            (options.min_damping..=options.max_damping).contains(&d),
            "{raw:?} parsed to {d}"
        );
    }

    #[test]
    fn numeric_damping_is_clamped(v in -10.0..10.0_f64) {
        let options = SliderOptions::default();
        let d = parse_damping(Some(&v.to_string()), &options);
        prop_assert_eq!(d, v.clamp(options.min_damping, options.max_damping));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Arbitrary input keeps the engine consistent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn input_sequences_keep_positions_in_range(
        events in prop::collection::vec(event_strategy(), 1..40),
        hover in any::<bool>(),
    ) {
        let (mut doc, a, _b) = page();
        if hover {
            doc.set_attribute(a, "data-ba-mode", "hover");
        }
        let mut engine = Engine::default();
        prop_assert_eq!(engine.start(&mut doc), 2);
        for ev in &events {
            let _ = engine.handle_event(&mut doc, ev);
            let _ = engine.frame(&mut doc);
            for (_, s) in engine.sessions() {
                let (c, t) = (s.current(), s.target());
                prop_assert!(in_range(c.x) && in_range(c.y), "current {c:?} after {ev:?}");
                prop_assert!(in_range(t.x) && in_range(t.y), "target {t:?} after {ev:?}");
                prop_assert_eq!(
                    doc.has_attribute(s.container(), "data-ba-dragging"),
                    s.is_dragging(),
                    "dragging attribute out of sync after {:?}",
                    ev
                );
            }
        }
        let _ = engine.handle_event(&mut doc, &TouchEvent::released(TouchPhase::End).into());
        let touch_drag = InteractionState::Dragging { source: PointerSource::Touch };
        prop_assert!(
            engine.sessions().all(|(_, s)| s.state() != touch_drag),
            "touch end alone clears every touch drag"
        );
        let _ = engine.handle_event(&mut doc, &PointerEvent::Up(Point::ZERO).into());
        prop_assert!(
            engine.sessions().all(|(_, s)| !s.is_dragging()),
            "mouse release clears the remaining drags"
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Rescans are idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rescans_never_duplicate(count in 0usize..8, rescans in 1usize..5) {
        let mut doc = Document::new();
        let body = doc.body();
        for i in 0..count {
            let x = i as f64 * 100.0;
            let c = doc
                .insert(
                    body,
                    Element::new()
                        .with_class("ba-slider")
                        .with_bounds(Rect::new(x, 0.0, x + 90.0, 90.0)),
                )
                .unwrap();
            doc.insert(c, Element::new().with_class("ba-slider--before"));
            doc.insert(c, Element::new().with_class("ba-slider--handle"));
        }
        let mut engine = Engine::default();
        prop_assert_eq!(engine.start(&mut doc), count);
        for _ in 0..rescans {
            prop_assert_eq!(engine.scan(&mut doc), 0);
        }
        prop_assert_eq!(engine.len(), count);
    }
}
