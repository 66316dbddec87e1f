//! Drag session state machine.
//!
//! Two states, `IDLE` and `DRAGGING`, cycled for the element's entire
//! lifetime. The machine owns the offset bookkeeping that makes gestures
//! continuous: the origin of a new gesture is shifted by the offset
//! persisted from previous ones, so the element never jumps at start.

use crate::geometry::Point;
use crate::pointer::{PointerSample, PointerSource};

/// Outcome of feeding one movement sample to the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionUpdate {
    /// No gesture in progress; the sample was ignored.
    Ignored,
    /// The gesture advanced to this displacement.
    Moved(Point),
    /// A mouse sample arrived with no buttons pressed while dragging: the
    /// release event was missed. The gesture has been committed and ended.
    ReleaseMissed,
}

/// Per-element gesture state. One session per controller, never shared.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSession {
    active: bool,
    /// Pointer coordinate at gesture start, shifted by `persisted`.
    origin: Point,
    /// Most recent displacement; stale while `active` is false.
    live: Point,
    /// Cumulative displacement carried across gestures.
    persisted: Point,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn persisted(&self) -> Point {
        self.persisted
    }

    /// IDLE → DRAGGING. The caller has already run the activation filter.
    ///
    /// `origin = pointer − persisted`, so displacement math during the
    /// gesture continues from where the last gesture left the element.
    /// `live` starts at `persisted` so a gesture that ends without any
    /// movement commits the offset unchanged.
    pub fn start(&mut self, pointer: Point) {
        self.origin = pointer - self.persisted;
        self.live = self.persisted;
        self.active = true;
    }

    /// DRAGGING → DRAGGING; ignored while idle.
    ///
    /// Samples are applied strictly in arrival order with no batching or
    /// smoothing. A mouse sample with an empty buttons bitset means the
    /// release happened somewhere this session could not observe it; the
    /// gesture is ended instead of dragging forever.
    pub fn update(&mut self, sample: PointerSample) -> SessionUpdate {
        if !self.active {
            return SessionUpdate::Ignored;
        }
        if sample.source == PointerSource::Mouse && sample.buttons.is_empty() {
            log::debug!("drag release missed, ending gesture");
            self.end();
            return SessionUpdate::ReleaseMissed;
        }
        self.live = sample.position - self.origin;
        SessionUpdate::Moved(self.live)
    }

    /// DRAGGING → IDLE; safe no-op while idle (an end listener can fire
    /// without a prior successful start). Returns whether a gesture ended.
    ///
    /// The session's displacement becomes the baseline for the next gesture.
    pub fn end(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.persisted = self.live;
        true
    }
}
