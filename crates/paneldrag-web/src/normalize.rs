//! Event normalization: DOM pointer/touch payloads to [`PointerSample`]s.
//!
//! Applied identically at gesture start and at every update so the offset
//! arithmetic in the session machine stays consistent.

use paneldrag_core::{Point, PointerButtons, PointerSample};
use web_sys::{MouseEvent, TouchEvent};

/// Sample from a mouse event: viewport coordinates plus the buttons bitmask
/// (the DOM bitmask and [`PointerButtons`] share a bit layout).
pub fn mouse_sample(event: &MouseEvent) -> PointerSample {
    PointerSample::mouse(
        Point::new(event.client_x() as f32, event.client_y() as f32),
        PointerButtons::from_bits(event.buttons() as u8),
    )
}

/// Sample from a touch event, using the first active touch point. An event
/// with an empty touch list (possible on `touchend`) yields no sample.
pub fn touch_sample(event: &TouchEvent) -> Option<PointerSample> {
    let touch = event.touches().get(0)?;
    Some(PointerSample::touch(Point::new(
        touch.client_x() as f32,
        touch.client_y() as f32,
    )))
}
