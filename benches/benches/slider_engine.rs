// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ba_slider::{Engine, PointerEvent};
use ba_slider_document::{Document, Element, ElementId};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

/// A row-major grid of `n` sliders, each 200×150 with a knob.
fn gen_page(n: usize) -> (Document, Vec<ElementId>) {
    let mut doc = Document::new();
    let body = doc.body();
    let mut containers = Vec::with_capacity(n);
    for i in 0..n {
        let x0 = (i % 10) as f64 * 210.0;
        let y0 = (i / 10) as f64 * 160.0;
        let c = doc
            .insert(
                body,
                Element::new()
                    .with_class("ba-slider")
                    .with_bounds(Rect::new(x0, y0, x0 + 200.0, y0 + 150.0)),
            )
            .unwrap();
        doc.insert(c, Element::new().with_class("ba-slider--before"));
        let handle = doc
            .insert(c, Element::new().with_class("ba-slider--handle"))
            .unwrap();
        doc.insert(handle, Element::new().with_class("ba-slider--knob"));
        containers.push(c);
    }
    (doc, containers)
}

fn started(n: usize) -> (Engine<ElementId>, Document) {
    let (mut doc, _) = gen_page(n);
    let mut engine = Engine::default();
    let _ = engine.start(&mut doc);
    (engine, doc)
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    for &n in &[1usize, 16, 128] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("moving_n{}", n), |b| {
            b.iter_batched(
                || {
                    let (mut engine, doc) = started(n);
                    let ids: Vec<_> = engine.sessions().map(|(id, _)| id).collect();
                    for id in ids {
                        let _ = engine.set_target(id, Point::new(0.0, 100.0));
                    }
                    (engine, doc)
                },
                |(mut engine, mut doc)| {
                    for _ in 0..10 {
                        black_box(engine.frame(&mut doc));
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("idle_n{}", n), |b| {
            let (mut engine, mut doc) = started(n);
            b.iter(|| black_box(engine.frame(&mut doc)));
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &[16usize, 128] {
        let (mut doc, containers) = gen_page(n);
        for &c in &containers {
            doc.set_attribute(c, "data-ba-mode", "hover");
        }
        let mut engine = Engine::default();
        let _ = engine.start(&mut doc);
        let rows = (n / 10 + 1) as f64;
        let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
        let points: Vec<Point> = (0..256)
            .map(|_| Point::new(rng.next_f64() * 2100.0, rng.next_f64() * 160.0 * rows))
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("hover_moves_n{}", n), |b| {
            b.iter(|| {
                for &p in &points {
                    black_box(engine.handle_event(&mut doc, &PointerEvent::Move(p).into()));
                }
            });
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for &n in &[16usize, 128] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("initial_n{}", n), |b| {
            b.iter_batched(
                || gen_page(n).0,
                |mut doc| {
                    let mut engine = Engine::default();
                    black_box(engine.start(&mut doc));
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("rescan_unchanged_n{}", n), |b| {
            let (mut engine, mut doc) = started(n);
            b.iter(|| black_box(engine.scan(&mut doc)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame, bench_dispatch, bench_scan);
criterion_main!(benches);
