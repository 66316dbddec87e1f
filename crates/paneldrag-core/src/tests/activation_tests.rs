use crate::activation::{drag_allowed, NodeClass};

#[test]
fn test_plain_chain_allows_drag() {
    assert!(drag_allowed([NodeClass::Other, NodeClass::Other]));
    assert!(drag_allowed(std::iter::empty()));
}

#[test]
fn test_button_target_rejects_drag() {
    assert!(!drag_allowed([NodeClass::Button]));
}

#[test]
fn test_input_target_rejects_drag() {
    assert!(!drag_allowed([NodeClass::Input]));
}

#[test]
fn test_interactive_region_rejects_drag() {
    assert!(!drag_allowed([NodeClass::InteractiveRegion]));
}

#[test]
fn test_interactive_ancestor_rejects_drag() {
    // e.g. a <span> inside a <button>: the walk finds the button above.
    assert!(!drag_allowed([
        NodeClass::Other,
        NodeClass::Button,
        NodeClass::Other,
    ]));
}
