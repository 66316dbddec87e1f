//! Platform-independent logic for draggable panels.
//!
//! This crate contains everything with real behavior: the normalized pointer
//! model, the drag session state machine, the activation filter predicate,
//! and the transform compositor. A platform adapter (see `paneldrag-web`)
//! feeds it normalized samples and implements [`DragSurface`] over a real
//! element.

mod activation;
mod controller;
mod geometry;
mod pointer;
mod session;
mod transform;

#[cfg(test)]
mod tests;

pub use activation::*;
pub use controller::*;
pub use geometry::*;
pub use pointer::*;
pub use session::*;
pub use transform::*;

pub mod prelude {
    pub use crate::activation::{drag_allowed, NodeClass};
    pub use crate::controller::{DragController, DragSurface, DragUpdate};
    pub use crate::geometry::Point;
    pub use crate::pointer::{PointerButton, PointerButtons, PointerSample, PointerSource};
    pub use crate::session::DragSession;
    pub use crate::transform::ForeignTransform;
}
