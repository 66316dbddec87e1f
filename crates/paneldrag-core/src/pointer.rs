//! Normalized pointer input.
//!
//! Platform adapters reduce heterogeneous device events (mouse events,
//! multi-point touch events) to one [`PointerSample`] per event. Everything
//! downstream of the adapter is device-agnostic.

use crate::geometry::Point;

/// Which device class produced a sample.
///
/// The session machine applies a mouse-only sanity check (see
/// [`crate::DragSession::update`]), so the source is carried alongside the
/// coordinates rather than erased.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

/// Compact bitset of pressed pointer buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    /// Builds a bitset from the DOM `buttons` bitmask (same bit layout).
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// One normalized input event: a position in viewport pixels plus the
/// device state needed by the gesture machine.
///
/// Normalization must be identical at gesture start and at every update so
/// origin arithmetic stays consistent across the whole gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub source: PointerSource,
    pub buttons: PointerButtons,
}

impl PointerSample {
    pub fn mouse(position: Point, buttons: PointerButtons) -> Self {
        Self {
            position,
            source: PointerSource::Mouse,
            buttons,
        }
    }

    /// A touch contact. Touch events carry no button state; the bitset is
    /// left empty and is never consulted for touch-sourced samples.
    pub fn touch(position: Point) -> Self {
        Self {
            position,
            source: PointerSource::Touch,
            buttons: PointerButtons::NONE,
        }
    }
}
