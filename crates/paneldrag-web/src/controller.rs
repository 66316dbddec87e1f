//! Per-panel DOM wiring.
//!
//! [`PanelHandle::attach`] builds one controller for one panel element:
//! an optional inner `.container` acts as the drag surface, an optional
//! header child gets the cursor affordance, gesture-start listeners go on
//! the container and update/end listeners on the document. All listeners
//! close over this panel's own controller; panels never share state.

use std::cell::RefCell;
use std::rc::Rc;

use paneldrag_core::{DragController, DragSurface, DragUpdate, NodeClass};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent,
};

use crate::listener::EventListenerHandle;
use crate::normalize::{mouse_sample, touch_sample};
use crate::target::classify_node;

/// Class toggled on the panel for the duration of an active gesture.
const DRAGGING_CLASS: &str = "dragging";
const CURSOR_IDLE: &str = "grab";
const CURSOR_ACTIVE: &str = "grabbing";
/// Inner drag surface, when the panel has one.
const CONTAINER_SELECTOR: &str = ".container";
/// Header-like child used for cursor affordance only.
const HEADER_SELECTOR: &str = "h3, .grid-title";

/// [`DragSurface`] over a DOM element. The transform and the dragging class
/// go on the panel element itself; the cursor goes on the drag surface and
/// the header. Style writes are cosmetic, so failures are swallowed.
struct DomSurface {
    element: HtmlElement,
    container: HtmlElement,
    header: Option<HtmlElement>,
}

impl DomSurface {
    fn set_cursor(&self, cursor: &str) {
        let _ = self.container.style().set_property("cursor", cursor);
        if let Some(header) = &self.header {
            let _ = header.style().set_property("cursor", cursor);
        }
    }
}

impl DragSurface for DomSurface {
    fn transform(&self) -> Option<String> {
        let value = self.element.style().get_property_value("transform").ok()?;
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn set_transform(&self, value: &str) {
        let _ = self.element.style().set_property("transform", value);
    }

    fn set_drag_active(&self, active: bool) {
        let class_list = self.element.class_list();
        if active {
            let _ = class_list.add_1(DRAGGING_CLASS);
            self.set_cursor(CURSOR_ACTIVE);
        } else {
            let _ = class_list.remove_1(DRAGGING_CLASS);
            self.set_cursor(CURSOR_IDLE);
        }
    }
}

/// One attached panel. Dropping the handle detaches every listener,
/// including the document-level ones.
pub struct PanelHandle {
    _listeners: Vec<EventListenerHandle>,
}

impl PanelHandle {
    pub fn attach(element: &HtmlElement) -> Result<Self, JsValue> {
        let container = element
            .query_selector(CONTAINER_SELECTOR)?
            .and_then(|found| found.dyn_into::<HtmlElement>().ok())
            .unwrap_or_else(|| element.clone());
        let header = container
            .query_selector(HEADER_SELECTOR)?
            .and_then(|found| found.dyn_into::<HtmlElement>().ok());

        let _ = container.style().set_property("cursor", CURSOR_IDLE);
        if let Some(header) = &header {
            let _ = header.style().set_property("cursor", CURSOR_IDLE);
            let _ = header.style().set_property("user-select", "none");
        }

        let surface = DomSurface {
            element: element.clone(),
            container: container.clone(),
            header,
        };
        let controller = Rc::new(RefCell::new(DragController::new(surface)));

        let document = element
            .owner_document()
            .ok_or("panel element is not in a document")?;
        let document: &EventTarget = document.as_ref();
        let mut listeners = Vec::with_capacity(7);

        // Gesture start stays scoped to the container; update/end listeners
        // go on the document because fast motion leaves the container's
        // bounds mid-drag and must still be tracked.
        {
            let controller = controller.clone();
            let surface_el: Element = container.clone().into();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let mouse: &MouseEvent = event.unchecked_ref();
                let chain = classify_chain(event.target(), &surface_el);
                controller
                    .borrow_mut()
                    .pointer_down(mouse_sample(mouse), chain);
            }) as Box<dyn FnMut(Event)>);
            listeners.push(EventListenerHandle::add(
                container.as_ref(),
                "mousedown",
                closure,
            )?);
        }

        {
            let controller = controller.clone();
            let surface_el: Element = container.clone().into();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let touch: &TouchEvent = event.unchecked_ref();
                let Some(sample) = touch_sample(touch) else {
                    return;
                };
                let chain = classify_chain(event.target(), &surface_el);
                controller.borrow_mut().pointer_down(sample, chain);
            }) as Box<dyn FnMut(Event)>);
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            listeners.push(EventListenerHandle::add_with_options(
                container.as_ref(),
                "touchstart",
                closure,
                &options,
            )?);
        }

        {
            let controller = controller.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let mouse: &MouseEvent = event.unchecked_ref();
                if let DragUpdate::Moved(_) = controller.borrow_mut().pointer_move(mouse_sample(mouse))
                {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(Event)>);
            listeners.push(EventListenerHandle::add(document, "mousemove", closure)?);
        }

        {
            let controller = controller.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let touch: &TouchEvent = event.unchecked_ref();
                let Some(sample) = touch_sample(touch) else {
                    return;
                };
                // Suppressing the default here is what keeps the page from
                // scrolling under a touch drag.
                if let DragUpdate::Moved(_) = controller.borrow_mut().pointer_move(sample) {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(Event)>);
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            listeners.push(EventListenerHandle::add_with_options(
                document,
                "touchmove",
                closure,
                &options,
            )?);
        }

        for end_event in ["mouseup", "touchend", "touchcancel"] {
            let controller = controller.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                controller.borrow_mut().pointer_up();
            }) as Box<dyn FnMut(Event)>);
            listeners.push(EventListenerHandle::add(document, end_event, closure)?);
        }

        Ok(Self {
            _listeners: listeners,
        })
    }

    /// Removes every listener this panel registered. Equivalent to dropping
    /// the handle; provided for explicit teardown call sites.
    pub fn detach(self) {}
}

/// Walks from the event target up to the drag surface (inclusive),
/// classifying each element for the activation filter.
fn classify_chain(target: Option<EventTarget>, surface: &Element) -> Vec<NodeClass> {
    let mut chain = Vec::new();
    let mut current = target.and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        chain.push(classify_node(&element.tag_name(), &element.class_name()));
        if element.is_same_node(Some(surface.as_ref())) {
            break;
        }
        current = element.parent_element();
    }
    chain
}
