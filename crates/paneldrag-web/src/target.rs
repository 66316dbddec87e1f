//! Classification of event targets for the activation filter.
//!
//! The DOM walk happens in the controller; the mapping from a node's tag
//! and class attribute to a [`NodeClass`] is plain string logic and is kept
//! separate so it can be tested natively.

use paneldrag_core::NodeClass;

/// Marker classes designating custom interactive controls that are not
/// native form elements (the digit grid and its cells).
pub const INTERACTIVE_REGION_CLASSES: [&str; 3] = ["grid", "grid-cell", "digit-button"];

/// Classifies one node from its DOM tag name (uppercase for HTML elements)
/// and its raw `class` attribute value.
pub fn classify_node(tag_name: &str, class_attr: &str) -> NodeClass {
    match tag_name {
        "BUTTON" => return NodeClass::Button,
        "INPUT" => return NodeClass::Input,
        _ => {}
    }
    let interactive = class_attr
        .split_whitespace()
        .any(|class| INTERACTIVE_REGION_CLASSES.contains(&class));
    if interactive {
        NodeClass::InteractiveRegion
    } else {
        NodeClass::Other
    }
}
