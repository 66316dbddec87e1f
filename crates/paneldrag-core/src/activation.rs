//! Activation filter: decides whether a drag may begin from a given target.
//!
//! Panels contain interactive controls (buttons, inputs, grid cells) that
//! must keep their own pointer behavior; a drag that starts on one of them
//! is rejected outright. The platform adapter walks the target's ancestor
//! chain up to the drag surface and classifies each node; the predicate
//! here is pure and order-independent.

/// Classification of one node in the target-to-surface chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeClass {
    Button,
    Input,
    /// Custom control not implemented as a native form element, marked via
    /// a designated class (grid, grid cell, digit button).
    InteractiveRegion,
    Other,
}

impl NodeClass {
    pub fn is_interactive(self) -> bool {
        !matches!(self, NodeClass::Other)
    }
}

/// True if a gesture may start from a target whose ancestor chain (target
/// first, drag surface last) classifies as `chain`.
///
/// Runs once per gesture attempt, before any state mutation; a rejection
/// leaves the session untouched.
pub fn drag_allowed<I>(chain: I) -> bool
where
    I: IntoIterator<Item = NodeClass>,
{
    chain.into_iter().all(|class| !class.is_interactive())
}
