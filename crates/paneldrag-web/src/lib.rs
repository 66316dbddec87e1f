//! DOM adapter for draggable panels.
//!
//! Wires browser pointer/touch events into `paneldrag-core`: normalizes
//! events to samples, implements the drag surface over an element's style,
//! and attaches one controller per known panel once the document is ready.
//!
//! Target classification (`target` module) is plain string logic and builds
//! everywhere; everything touching `web-sys` is wasm-only.

mod target;

#[cfg(target_arch = "wasm32")]
mod controller;
#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
mod normalize;

pub use target::{classify_node, INTERACTIVE_REGION_CLASSES};

#[cfg(target_arch = "wasm32")]
pub use controller::PanelHandle;
#[cfg(target_arch = "wasm32")]
pub use listener::EventListenerHandle;
#[cfg(target_arch = "wasm32")]
pub use normalize::{mouse_sample, touch_sample};

/// Panel element ids activated by the default initializer. Absence of an id
/// in the document is not an error; that panel is skipped.
pub const DRAGGABLE_PANEL_IDS: [&str; 2] = ["overlay2d", "predictionOverlay"];

/// Class added to each panel the initializer successfully attaches.
pub const DRAGGABLE_CLASS: &str = "draggable";

#[cfg(target_arch = "wasm32")]
mod init {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::Document;

    use crate::controller::PanelHandle;
    use crate::{DRAGGABLE_CLASS, DRAGGABLE_PANEL_IDS};

    thread_local! {
        // Panels attached by the default initializer live for the page
        // lifetime. Dropping a handle detaches its listeners.
        static PANELS: RefCell<Vec<PanelHandle>> = RefCell::new(Vec::new());
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        init_when_ready()
    }

    /// Attaches controllers to the known panels, immediately if the document
    /// is already interactive, otherwise once `DOMContentLoaded` fires.
    pub fn init_when_ready() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let document = window.document().ok_or("should have a document on window")?;

        if document.ready_state() == "loading" {
            let deferred = document.clone();
            let closure = Closure::once(move |_: web_sys::Event| {
                if let Err(err) = attach_known_panels(&deferred) {
                    log::error!("panel initialization failed: {err:?}");
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            )?;
            // One-shot: wasm-bindgen frees the closure after it runs.
            closure.forget();
        } else {
            attach_known_panels(&document)?;
        }
        Ok(())
    }

    /// Looks up each known panel id and attaches a controller to the ones
    /// that exist, parking the handles in the page-lifetime registry.
    pub fn attach_known_panels(document: &Document) -> Result<(), JsValue> {
        for id in DRAGGABLE_PANEL_IDS {
            let Some(element) = document.get_element_by_id(id) else {
                log::debug!("panel '{id}' not present, skipping");
                continue;
            };
            let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            let handle = PanelHandle::attach(&element)?;
            element.class_list().add_1(DRAGGABLE_CLASS)?;
            PANELS.with(|panels| panels.borrow_mut().push(handle));
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use init::{attach_known_panels, init_when_ready};
