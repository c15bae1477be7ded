// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! BA Slider: a headless engine for before/after comparison sliders.
//!
//! ## Overview
//!
//! A comparison slider stacks two images in one container and reveals the
//! "before" image up to a movable divider. This crate owns the interaction and
//! animation. The document stays with the host, reached through the
//! [`SliderHost`] trait.
//!
//! Per container the engine keeps a [`Session`](crate::session::Session): the
//! element handles, a *target* position written by input, a *current* position
//! that chases it, and the interaction state. Positions are percentages in
//! `[0, 100]`; x drives the divider, y drives an optional knob.
//!
//! ## Reactive configuration
//!
//! Behavior is read from container attributes on every event and every frame,
//! so external code can flip modes while a slider is live:
//!
//! | attribute            | values                       | default |
//! |----------------------|------------------------------|---------|
//! | `data-ba-mode`       | `drag` \| `hover`            | `drag`  |
//! | `data-ba-vertical`   | `center` \| `move`           | `center`|
//! | `data-ba-damping`    | number in `[0.01, 1.0]`      | `0.15`  |
//!
//! The engine writes `data-ba-initialized` once per container and toggles
//! `data-ba-dragging` during drags. Attribute and class names are configurable
//! through [`SliderOptions`].
//!
//! ## Host loop
//!
//! 1) [`Engine::start`] when the engine is created, and
//!    [`Engine::document_ready`] if the document was still loading.
//! 2) [`Engine::handle_event`] for every pointer and touch event. Honor
//!    [`EventResponse::default_prevented`].
//! 3) [`Engine::frame`] once per animation frame while
//!    [`Engine::wants_frame`] is true.
//! 4) [`Engine::mutations`] with each batch of added/removed subtrees.
//!
//! ## Minimal usage
//!
//! ```
//! # #[cfg(feature = "document_adapter")] {
//! use ba_slider::{Engine, PointerEvent};
//! use ba_slider_document::{Document, Element};
//! use kurbo::{Point, Rect};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let slider = doc
//!     .insert(
//!         body,
//!         Element::new()
//!             .with_class("ba-slider")
//!             .with_bounds(Rect::new(0.0, 0.0, 400.0, 300.0)),
//!     )
//!     .unwrap();
//! let before = doc.insert(slider, Element::new().with_class("ba-slider--before")).unwrap();
//! doc.insert(slider, Element::new().with_class("ba-slider--handle"));
//!
//! let mut engine = Engine::default();
//! assert_eq!(engine.start(&mut doc), 1);
//! assert_eq!(doc.style(before, "width"), Some("50%"));
//!
//! let response = engine.handle_event(&mut doc, &PointerEvent::Down(Point::new(100.0, 150.0)).into());
//! assert!(response.default_prevented);
//! while !engine.frame(&mut doc).is_idle() {}
//! assert_eq!(doc.style(before, "width"), Some("25%"));
//! # }
//! ```
//!
//! ## Logging
//!
//! The engine emits [`tracing`] events (attach/detach at `debug`, state
//! transitions and frames at `trace`) and never installs a subscriber.

pub mod adapters;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod host;
pub mod interaction;
pub mod lifecycle;
pub mod options;
pub mod pointer;
pub mod render;
pub mod session;
pub mod types;

pub use engine::{Engine, FrameReport, StartPhase};
pub use error::SetupError;
pub use host::SliderHost;
pub use lifecycle::LifecycleReport;
pub use options::{AttributeNames, ClassNames, SliderOptions};
pub use session::{Session, SessionId, SessionParts};
pub use types::{
    EventResponse, InputEvent, InputOutcome, Mutations, PointerEvent, TouchEvent, TouchPhase,
};
