//! Drag controller: composes the activation filter, the session machine and
//! the transform compositor, and drives a [`DragSurface`].
//!
//! One controller per draggable element; controllers never share state or
//! coordinate with each other.

use crate::activation::{drag_allowed, NodeClass};
use crate::geometry::Point;
use crate::pointer::PointerSample;
use crate::session::{DragSession, SessionUpdate};
use crate::transform::ForeignTransform;

/// Seam between the gesture logic and the element being positioned.
///
/// Implemented over a DOM element by the web adapter; tests implement it
/// with a recording mock.
pub trait DragSurface {
    /// Current value of the element's transform styling, if any.
    fn transform(&self) -> Option<String>;

    /// Overwrites the element's transform styling.
    fn set_transform(&self, value: &str);

    /// Toggles the visual dragging feedback (class, cursor) on the element.
    fn set_drag_active(&self, active: bool);
}

/// Outcome of a movement event, for the platform event handler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// No gesture in progress; nothing happened.
    Ignored,
    /// The element was repositioned. The handler must suppress the event's
    /// default handling, or touch drags scroll the page.
    Moved(Point),
    /// The gesture was ended by the missed-release guard.
    Released,
}

pub struct DragController<S: DragSurface> {
    surface: S,
    session: DragSession,
}

impl<S: DragSurface> DragController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            session: DragSession::new(),
        }
    }

    /// Gesture start. `target_chain` is the classified ancestor chain from
    /// the event target up to the drag surface; a chain containing an
    /// interactive control rejects the start and leaves the session idle.
    ///
    /// Returns whether a gesture began.
    pub fn pointer_down<I>(&mut self, sample: PointerSample, target_chain: I) -> bool
    where
        I: IntoIterator<Item = NodeClass>,
    {
        if self.session.is_active() {
            return false;
        }
        if !drag_allowed(target_chain) {
            return false;
        }
        self.session.start(sample.position);
        self.surface.set_drag_active(true);
        log::debug!(
            "drag started at ({}, {})",
            sample.position.x,
            sample.position.y
        );
        true
    }

    /// Gesture update. Repositions the element synchronously when a gesture
    /// is in progress; a no-op otherwise.
    pub fn pointer_move(&mut self, sample: PointerSample) -> DragUpdate {
        match self.session.update(sample) {
            SessionUpdate::Ignored => DragUpdate::Ignored,
            SessionUpdate::Moved(displacement) => {
                self.apply(displacement);
                DragUpdate::Moved(displacement)
            }
            SessionUpdate::ReleaseMissed => {
                self.surface.set_drag_active(false);
                DragUpdate::Released
            }
        }
    }

    /// Gesture end; safe no-op when idle. Returns whether a gesture ended.
    pub fn pointer_up(&mut self) -> bool {
        if !self.session.end() {
            return false;
        }
        self.surface.set_drag_active(false);
        let persisted = self.session.persisted();
        log::debug!("drag ended, persisted ({}, {})", persisted.x, persisted.y);
        true
    }

    /// Writes the composed transform for `displacement`, preserving any
    /// foreign component currently on the surface. The foreign kind is
    /// re-derived per write; the owning layout logic may have changed it.
    fn apply(&mut self, displacement: Point) {
        let foreign = ForeignTransform::detect(self.surface.transform().as_deref());
        self.surface.set_transform(&foreign.compose(displacement));
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
