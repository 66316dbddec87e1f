//! Event listener registration with a detach capability.
//!
//! Gesture update/end listeners live on the document because fast motion
//! leaves the panel's bounds mid-drag, which makes them effectively
//! process-wide. Each registration is held as a handle that removes the
//! listener when dropped, so tearing a controller down releases them.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget};

pub struct EventListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerHandle {
    pub fn add(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Registration with explicit options. Touch listeners must be
    /// non-passive or `prevent_default` is ignored during touch drags.
    pub fn add_with_options(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
        options: &AddEventListenerOptions,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
