//! Transform composition.
//!
//! The element's `transform` style is a two-part composed value: an optional
//! foreign component owned by external layout logic (centering), followed by
//! the drag displacement. The pair is tracked structurally; string matching
//! happens only at the detection boundary, against whatever the element's
//! transform currently is.

use crate::geometry::Point;

const CENTER_LEFT_MARKER: &str = "translateX(-50%)";
const CENTER_RIGHT_MARKER: &str = "translateX(50%)";

/// Pre-existing positional transform component that must survive every
/// write this system makes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForeignTransform {
    #[default]
    None,
    CenterLeft,
    CenterRight,
}

impl ForeignTransform {
    /// Recognizes the foreign component of an element's current transform.
    ///
    /// Re-run before each write rather than cached for the element's
    /// lifetime: the layout collaborator owning the centering may change it
    /// between writes. The left marker is checked first; the two markers do
    /// not substring-overlap thanks to the sign.
    pub fn detect(current: Option<&str>) -> Self {
        let Some(current) = current else {
            return ForeignTransform::None;
        };
        if current.contains(CENTER_LEFT_MARKER) {
            ForeignTransform::CenterLeft
        } else if current.contains(CENTER_RIGHT_MARKER) {
            ForeignTransform::CenterRight
        } else {
            ForeignTransform::None
        }
    }

    fn marker(self) -> Option<&'static str> {
        match self {
            ForeignTransform::None => None,
            ForeignTransform::CenterLeft => Some(CENTER_LEFT_MARKER),
            ForeignTransform::CenterRight => Some(CENTER_RIGHT_MARKER),
        }
    }

    /// Builds the full transform value for a displacement, foreign component
    /// prefixed. Pure and idempotent: the output depends only on the inputs,
    /// so repeated writes with the same displacement never compound.
    pub fn compose(self, displacement: Point) -> String {
        let translation = format!(
            "translate({}px, {}px)",
            displacement.x, displacement.y
        );
        match self.marker() {
            Some(marker) => format!("{marker} {translation}"),
            None => translation,
        }
    }
}
