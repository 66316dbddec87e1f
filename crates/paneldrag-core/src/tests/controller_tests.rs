use std::cell::{Cell, RefCell};

use crate::activation::NodeClass;
use crate::controller::{DragController, DragSurface, DragUpdate};
use crate::geometry::Point;
use crate::pointer::{PointerButton, PointerButtons, PointerSample};

// Mock surface that mirrors a DOM element: reading the transform back
// returns whatever was last written.
struct MockSurface {
    transform: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
    drag_active: Cell<bool>,
}

impl MockSurface {
    fn new(initial_transform: Option<&str>) -> Self {
        Self {
            transform: RefCell::new(initial_transform.map(str::to_string)),
            writes: RefCell::new(Vec::new()),
            drag_active: Cell::new(false),
        }
    }
}

impl DragSurface for MockSurface {
    fn transform(&self) -> Option<String> {
        self.transform.borrow().clone()
    }

    fn set_transform(&self, value: &str) {
        *self.transform.borrow_mut() = Some(value.to_string());
        self.writes.borrow_mut().push(value.to_string());
    }

    fn set_drag_active(&self, active: bool) {
        self.drag_active.set(active);
    }
}

fn primary() -> PointerButtons {
    PointerButtons::new().with(PointerButton::Primary)
}

fn mouse(x: f32, y: f32) -> PointerSample {
    PointerSample::mouse(Point::new(x, y), primary())
}

const PLAIN_CHAIN: [NodeClass; 1] = [NodeClass::Other];

#[test]
fn test_full_drag_scenario_with_centering_transform() {
    let mut controller = DragController::new(MockSurface::new(Some("translateX(-50%)")));

    assert!(controller.pointer_down(mouse(100.0, 100.0), PLAIN_CHAIN));
    assert!(controller.surface().drag_active.get());

    let update = controller.pointer_move(mouse(130.0, 160.0));
    assert_eq!(update, DragUpdate::Moved(Point::new(30.0, 60.0)));
    assert_eq!(
        controller.surface().transform().as_deref(),
        Some("translateX(-50%) translate(30px, 60px)")
    );

    assert!(controller.pointer_up());
    assert!(!controller.surface().drag_active.get());
    assert_eq!(controller.session().persisted(), Point::new(30.0, 60.0));

    // Second drag starting at the release point with no motion: the
    // displayed transform must not change.
    assert!(controller.pointer_down(mouse(130.0, 160.0), PLAIN_CHAIN));
    let update = controller.pointer_move(mouse(130.0, 160.0));
    assert_eq!(update, DragUpdate::Moved(Point::new(30.0, 60.0)));
    assert_eq!(
        controller.surface().transform().as_deref(),
        Some("translateX(-50%) translate(30px, 60px)")
    );
}

#[test]
fn test_foreign_transform_preserved_across_every_write() {
    let mut controller = DragController::new(MockSurface::new(Some("translateX(-50%)")));

    controller.pointer_down(mouse(0.0, 0.0), PLAIN_CHAIN);
    controller.pointer_move(mouse(10.0, 0.0));
    controller.pointer_move(mouse(20.0, 5.0));
    controller.pointer_up();

    controller.pointer_down(mouse(20.0, 5.0), PLAIN_CHAIN);
    controller.pointer_move(mouse(25.0, 5.0));
    controller.pointer_up();

    let writes = controller.surface().writes.borrow();
    assert!(!writes.is_empty());
    for write in writes.iter() {
        assert!(
            write.starts_with("translateX(-50%) translate("),
            "foreign component lost in {write:?}"
        );
    }
}

#[test]
fn test_down_on_interactive_control_never_leaves_idle() {
    for chain in [
        [NodeClass::Button],
        [NodeClass::Input],
        [NodeClass::InteractiveRegion],
    ] {
        let mut controller = DragController::new(MockSurface::new(None));
        assert!(!controller.pointer_down(mouse(50.0, 50.0), chain));
        assert!(!controller.session().is_active());
        assert!(!controller.surface().drag_active.get());

        // The document-level listeners still fire; they must not move
        // anything.
        assert_eq!(controller.pointer_move(mouse(80.0, 80.0)), DragUpdate::Ignored);
        assert!(!controller.pointer_up());
        assert!(controller.surface().writes.borrow().is_empty());
    }
}

#[test]
fn test_update_and_end_are_noops_when_idle() {
    let mut controller = DragController::new(MockSurface::new(None));

    assert_eq!(controller.pointer_move(mouse(10.0, 10.0)), DragUpdate::Ignored);
    assert!(!controller.pointer_up());
    assert!(!controller.pointer_up());
    assert!(controller.surface().writes.borrow().is_empty());
    assert_eq!(controller.session().persisted(), Point::ZERO);
}

#[test]
fn test_missed_release_ends_gesture_and_clears_feedback() {
    let mut controller = DragController::new(MockSurface::new(None));

    controller.pointer_down(mouse(0.0, 0.0), PLAIN_CHAIN);
    controller.pointer_move(mouse(15.0, 0.0));
    assert!(controller.surface().drag_active.get());

    let update = controller.pointer_move(PointerSample::mouse(
        Point::new(20.0, 0.0),
        PointerButtons::NONE,
    ));
    assert_eq!(update, DragUpdate::Released);
    assert!(!controller.surface().drag_active.get());
    assert_eq!(controller.session().persisted(), Point::new(15.0, 0.0));
}

#[test]
fn test_foreign_transform_rederived_when_layout_changes_it() {
    let mut controller = DragController::new(MockSurface::new(None));

    controller.pointer_down(mouse(0.0, 0.0), PLAIN_CHAIN);
    controller.pointer_move(mouse(10.0, 10.0));
    assert_eq!(
        controller.surface().transform().as_deref(),
        Some("translate(10px, 10px)")
    );

    // External layout recenters the element mid-gesture; the next write
    // must pick the marker up.
    *controller.surface().transform.borrow_mut() =
        Some("translateX(50%) translate(10px, 10px)".to_string());
    controller.pointer_move(mouse(12.0, 10.0));
    assert_eq!(
        controller.surface().transform().as_deref(),
        Some("translateX(50%) translate(12px, 10px)")
    );
}

#[test]
fn test_second_down_while_dragging_is_rejected() {
    let mut controller = DragController::new(MockSurface::new(None));

    assert!(controller.pointer_down(mouse(0.0, 0.0), PLAIN_CHAIN));
    controller.pointer_move(mouse(30.0, 0.0));
    assert!(!controller.pointer_down(mouse(100.0, 100.0), PLAIN_CHAIN));

    // The origin of the running gesture is untouched.
    let update = controller.pointer_move(mouse(40.0, 0.0));
    assert_eq!(update, DragUpdate::Moved(Point::new(40.0, 0.0)));
}
