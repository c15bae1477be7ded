// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance lifecycle: discovery, idempotent attach, and teardown.
//!
//! ## Startup
//!
//! [`Engine::start`] scans right away when the host reports the document as
//! parsed; otherwise it defers until [`Engine::document_ready`].
//!
//! ## Discovery
//!
//! [`Engine::scan`] visits every container by class. A container that already
//! carries the `initialized` attribute, or already owns a live session, is
//! skipped, so scanning an unchanged document any number of times yields one
//! session per container. The marker is written *before* the structure check:
//! a container missing its parts is visited once and then left alone.
//!
//! ## Mutations
//!
//! [`Engine::mutations`] treats any added node as a reason to rescan the whole
//! document (the idempotency checks keep that cheap), and any removed node as
//! a reason to reap sessions whose container is no longer connected. Reaping
//! clears the marker; an explicit [`Engine::destroy_session`] keeps it.

use tracing::{debug, info, trace};

use crate::engine::{Engine, StartPhase};
use crate::error::SetupError;
use crate::host::SliderHost;
use crate::session::{Session, SessionId, SessionParts};
use crate::types::Mutations;

/// Summary of one [`Engine::mutations`] call.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LifecycleReport {
    /// Sessions created by the rescan.
    pub attached: usize,
    /// Sessions torn down because their container left the document.
    pub detached: usize,
}

impl<E: Copy + Eq + core::fmt::Debug> Engine<E> {
    /// Begin discovery. Returns the number of sessions attached now (zero when
    /// deferred or already started).
    pub fn start<H>(&mut self, host: &mut H) -> usize
    where
        H: SliderHost<Element = E>,
    {
        if self.phase != StartPhase::NotStarted {
            return 0;
        }
        if host.is_ready() {
            self.phase = StartPhase::Running;
            self.scan(host)
        } else {
            debug!("document still loading; deferring slider discovery");
            self.phase = StartPhase::Deferred;
            0
        }
    }

    /// The host finished parsing. Runs deferred discovery, if any.
    pub fn document_ready<H>(&mut self, host: &mut H) -> usize
    where
        H: SliderHost<Element = E>,
    {
        if self.phase != StartPhase::Deferred {
            return 0;
        }
        self.phase = StartPhase::Running;
        let attached = self.scan(host);
        info!(attached, "deferred slider discovery complete");
        attached
    }

    /// Attach a session to every eligible container. Returns how many were attached.
    pub fn scan<H>(&mut self, host: &mut H) -> usize
    where
        H: SliderHost<Element = E>,
    {
        let containers = host.query_class(&self.options.classes.container);
        let mut attached = 0;
        for container in containers {
            match self.try_attach(host, container) {
                Ok(_) => attached += 1,
                Err(SetupError::AlreadyInitialized) => {
                    trace!(?container, "slider already initialized");
                }
                Err(err) => debug!(?container, %err, "skipping slider container"),
            }
        }
        attached
    }

    /// Attach a session to one container.
    ///
    /// On success the session's first frame has already been rendered.
    pub fn try_attach<H>(&mut self, host: &mut H, container: E) -> Result<SessionId, SetupError>
    where
        H: SliderHost<Element = E>,
    {
        if !host.is_connected(container) {
            return Err(SetupError::ContainerDetached);
        }
        let names = &self.options.attributes;
        if host.attribute(container, &names.initialized).is_some()
            || self.sessions.find_by_container(container).is_some()
        {
            return Err(SetupError::AlreadyInitialized);
        }
        host.set_attribute(container, &names.initialized, "true");

        let classes = &self.options.classes;
        let before = host
            .find_descendant(container, &classes.before)
            .ok_or(SetupError::MissingBeforeLayer)?;
        let handle = host
            .find_descendant(container, &classes.handle)
            .ok_or(SetupError::MissingHandle)?;
        let knob = host.find_descendant(container, &classes.knob);

        let parts = SessionParts {
            container,
            before,
            handle,
            knob,
        };
        let initial = kurbo::Point::new(self.options.initial_x, self.options.initial_y);
        let id = self.sessions.insert(Session::new(parts, initial));
        if let Some(session) = self.sessions.get_mut(id) {
            let _ = session.tick(host, &self.options);
        }
        debug!(?container, ?id, has_knob = knob.is_some(), "slider attached");
        Ok(id)
    }

    /// Apply a batch of structural mutations. Removals reap first, then
    /// additions trigger a rescan once the engine is running.
    pub fn mutations<H>(&mut self, host: &mut H, mutations: &Mutations<E>) -> LifecycleReport
    where
        H: SliderHost<Element = E>,
    {
        let mut report = LifecycleReport::default();
        if !mutations.removed.is_empty() {
            report.detached = self.reap_disconnected(host);
        }
        if self.phase == StartPhase::Running && !mutations.added.is_empty() {
            report.attached = self.scan(host);
        }
        report
    }

    /// Tear down every session whose container is no longer connected.
    ///
    /// Reaped containers lose their `initialized` marker, so one that is
    /// re-inserted later is attached again by the next rescan.
    pub fn reap_disconnected<H>(&mut self, host: &mut H) -> usize
    where
        H: SliderHost<Element = E>,
    {
        let gone: Vec<(SessionId, E)> = self
            .sessions
            .iter()
            .filter(|(_, s)| !host.is_connected(s.parts.container))
            .map(|(id, s)| (id, s.parts.container))
            .collect();
        let mut reaped = 0;
        for (id, container) in gone {
            host.remove_attribute(container, &self.options.attributes.initialized);
            if self.destroy_session(id) {
                reaped += 1;
            }
        }
        reaped
    }

    /// Tear down one session: cancel its loop, release any touch capture, and
    /// free its slot. The container keeps its `initialized` marker, so later
    /// scans do not re-attach it.
    ///
    /// Returns false for stale ids.
    pub fn destroy_session(&mut self, id: SessionId) -> bool {
        let Some(mut session) = self.sessions.remove(id) else {
            return false;
        };
        session.render.cancel();
        self.touch_capture.retain(|&c| c != id);
        debug!(
            container = ?session.parts.container,
            ?id,
            frames = session.render.frames(),
            "slider detached"
        );
        true
    }
}

#[cfg(all(test, feature = "document_adapter"))]
mod tests {
    use ba_slider_document::{Document, Element, ElementId};
    use kurbo::Rect;

    use super::*;
    use crate::adapters::document::sync_mutations;

    fn slider(doc: &mut Document, parent: ElementId, with_parts: bool) -> ElementId {
        let bounds = Rect::new(0.0, 0.0, 300.0, 200.0);
        let c = doc
            .insert(parent, Element::new().with_class("ba-slider").with_bounds(bounds))
            .unwrap();
        if with_parts {
            doc.insert(c, Element::new().with_class("ba-slider--before"));
            doc.insert(c, Element::new().with_class("ba-slider--handle"));
        }
        c
    }

    #[test]
    fn scanning_twice_is_idempotent() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = slider(&mut doc, body, true);
        let b = slider(&mut doc, body, true);
        let mut engine = Engine::default();
        assert_eq!(engine.start(&mut doc), 2);
        assert_eq!(engine.scan(&mut doc), 0, "second scan attaches nothing");
        assert_eq!(engine.len(), 2);
        assert!(engine.session_for(a).is_some(), "a attached");
        assert!(engine.session_for(b).is_some(), "b attached");
        assert_eq!(doc.attribute(a, "data-ba-initialized"), Some("true"));
    }

    #[test]
    fn session_table_guards_even_if_marker_is_removed() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = slider(&mut doc, body, true);
        let mut engine = Engine::default();
        let _ = engine.start(&mut doc);
        doc.remove_attribute(a, "data-ba-initialized");
        assert_eq!(
            engine.try_attach(&mut doc, a),
            Err(SetupError::AlreadyInitialized)
        );
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn missing_parts_skip_only_that_container() {
        let mut doc = Document::new();
        let body = doc.body();
        let broken = slider(&mut doc, body, false);
        let ok = slider(&mut doc, body, true);
        let mut engine = Engine::default();
        assert_eq!(engine.start(&mut doc), 1, "broken container skipped");
        assert!(engine.session_for(ok).is_some(), "valid container attached");
        assert!(engine.session_for(broken).is_none(), "broken container has no session");
        assert_eq!(
            doc.attribute(broken, "data-ba-initialized"),
            Some("true"),
            "marker written before validation"
        );
    }

    #[test]
    fn missing_handle_is_reported() {
        let mut doc = Document::new();
        let body = doc.body();
        let c = slider(&mut doc, body, false);
        doc.insert(c, Element::new().with_class("ba-slider--before"));
        let mut engine = Engine::default();
        assert_eq!(engine.try_attach(&mut doc, c), Err(SetupError::MissingHandle));
        let d = slider(&mut doc, body, false);
        assert_eq!(
            engine.try_attach(&mut doc, d),
            Err(SetupError::MissingBeforeLayer)
        );
        let detached = doc.create(Element::new().with_class("ba-slider"));
        assert_eq!(
            engine.try_attach(&mut doc, detached),
            Err(SetupError::ContainerDetached)
        );
    }

    #[test]
    fn deferred_start_waits_for_ready() {
        let mut doc = Document::loading();
        let body = doc.body();
        let a = slider(&mut doc, body, true);
        let mut engine = Engine::default();
        assert_eq!(engine.start(&mut doc), 0, "nothing while loading");
        assert_eq!(engine.phase(), StartPhase::Deferred);
        assert_eq!(sync_mutations(&mut engine, &mut doc).attached, 0, "no rescans before ready");
        assert!(engine.session_for(a).is_none(), "still waiting");

        doc.finish_loading();
        assert_eq!(engine.document_ready(&mut doc), 1);
        assert_eq!(engine.phase(), StartPhase::Running);
        assert_eq!(engine.document_ready(&mut doc), 0, "ready only runs once");
        assert_eq!(engine.start(&mut doc), 0, "start only runs once");
    }

    #[test]
    fn added_subtree_is_discovered() {
        let mut doc = Document::new();
        let mut engine = Engine::default();
        let _ = engine.start(&mut doc);
        let _ = doc.take_mutations();

        let wrapper = doc.create(Element::new());
        let c = doc.create(
            Element::new()
                .with_class("ba-slider")
                .with_bounds(Rect::new(0.0, 0.0, 100.0, 100.0)),
        );
        doc.append_child(wrapper, c);
        doc.insert(c, Element::new().with_class("ba-slider--before"));
        doc.insert(c, Element::new().with_class("ba-slider--handle"));
        let body = doc.body();
        doc.append_child(body, wrapper);

        let report = sync_mutations(&mut engine, &mut doc);
        assert_eq!(report.attached, 1, "nested container found by full rescan");
        assert!(engine.session_for(c).is_some(), "session attached");
    }

    #[test]
    fn removed_container_is_reaped() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = slider(&mut doc, body, true);
        let b = slider(&mut doc, body, true);
        let mut engine = Engine::default();
        let _ = engine.start(&mut doc);
        let _ = doc.take_mutations();
        let id_a = engine.session_for(a).unwrap();

        doc.remove(a);
        let report = sync_mutations(&mut engine, &mut doc);
        assert_eq!(report.detached, 1);
        assert!(engine.session(id_a).is_none(), "stale id resolves to nothing");
        assert_eq!(engine.len(), 1);
        assert!(engine.session_for(b).is_some(), "sibling untouched");
        assert_eq!(engine.frame(&mut doc).ticked, 1, "only the survivor ticks");
    }

    /// A document whose `detached` container is out of the tree but still alive,
    /// the way a moved node sits between removal and re-insertion.
    struct Detaching {
        doc: Document,
        detached: Option<ElementId>,
    }

    impl SliderHost for Detaching {
        type Element = ElementId;

        fn is_ready(&self) -> bool {
            SliderHost::is_ready(&self.doc)
        }

        fn query_class(&self, class: &str) -> Vec<ElementId> {
            let mut found = SliderHost::query_class(&self.doc, class);
            found.retain(|&e| Some(e) != self.detached);
            found
        }

        fn find_descendant(&self, root: ElementId, class: &str) -> Option<ElementId> {
            SliderHost::find_descendant(&self.doc, root, class)
        }

        fn is_connected(&self, element: ElementId) -> bool {
            Some(element) != self.detached && SliderHost::is_connected(&self.doc, element)
        }

        fn attribute(&self, element: ElementId, name: &str) -> Option<std::borrow::Cow<'_, str>> {
            SliderHost::attribute(&self.doc, element, name)
        }

        fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
            SliderHost::set_attribute(&mut self.doc, element, name, value);
        }

        fn remove_attribute(&mut self, element: ElementId, name: &str) {
            SliderHost::remove_attribute(&mut self.doc, element, name);
        }

        fn style(&self, element: ElementId, property: &str) -> Option<std::borrow::Cow<'_, str>> {
            SliderHost::style(&self.doc, element, property)
        }

        fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
            SliderHost::set_style(&mut self.doc, element, property, value);
        }

        fn bounding_client_rect(&self, element: ElementId) -> Option<Rect> {
            SliderHost::bounding_client_rect(&self.doc, element)
        }

        fn hit_path(&self, point: kurbo::Point) -> Vec<ElementId> {
            SliderHost::hit_path(&self.doc, point)
        }
    }

    #[test]
    fn reattached_container_is_activated_again() {
        let mut doc = Document::new();
        let body = doc.body();
        let c = slider(&mut doc, body, true);
        let mut host = Detaching {
            doc,
            detached: None,
        };
        let mut engine = Engine::default();
        assert_eq!(engine.start(&mut host), 1);
        let first = engine.session_for(c).unwrap();

        host.detached = Some(c);
        let report = engine.mutations(
            &mut host,
            &Mutations {
                added: vec![],
                removed: vec![c],
            },
        );
        assert_eq!(report.detached, 1);
        assert_eq!(
            host.doc.attribute(c, "data-ba-initialized"),
            None,
            "reap clears the marker"
        );

        host.detached = None;
        let report = engine.mutations(
            &mut host,
            &Mutations {
                added: vec![c],
                removed: vec![],
            },
        );
        assert_eq!(report.attached, 1, "re-inserted container attaches again");
        let second = engine.session_for(c).unwrap();
        assert_ne!(first, second, "fresh session");
        assert_eq!(host.doc.attribute(c, "data-ba-initialized"), Some("true"));
        assert_eq!(engine.frame(&mut host).ticked, 1);
    }

    #[test]
    fn destroyed_session_is_not_resurrected_by_scan() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = slider(&mut doc, body, true);
        let mut engine = Engine::default();
        let _ = engine.start(&mut doc);
        let id = engine.session_for(a).unwrap();
        assert!(engine.destroy_session(id), "live id destroyed");
        assert!(!engine.destroy_session(id), "second destroy is a no-op");
        assert_eq!(engine.scan(&mut doc), 0, "marker keeps it detached");
    }
}
