//! Scoped window listeners for host environment events.
use tentaclegrid_game::HostEvent;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, Window};

use crate::dom::{self, HostError};

/// Resize and orientation listeners attached to `window`.
///
/// Both listeners are removed when the guard is dropped, however the owning
/// component goes away. If attaching the second listener fails the first is
/// released before the error is returned.
pub struct WindowListeners {
    window: Window,
    handlers: Vec<(HostEvent, Closure<dyn FnMut(Event)>)>,
}

impl WindowListeners {
    /// Attach one listener per [`HostEvent`], each calling `on_event`.
    ///
    /// # Errors
    /// Returns [`HostError::NoWindow`] outside a browser, or
    /// [`HostError::Listener`] if the browser rejects a registration.
    pub fn attach<F>(on_event: F) -> Result<Self, HostError>
    where
        F: Fn(HostEvent) + Clone + 'static,
    {
        let window = dom::window().ok_or(HostError::NoWindow)?;
        let mut listeners = Self {
            window,
            handlers: Vec::with_capacity(HostEvent::ALL.len()),
        };
        for kind in HostEvent::ALL {
            let callback = on_event.clone();
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| callback(kind));
            listeners
                .window
                .add_event_listener_with_callback(
                    kind.event_name(),
                    closure.as_ref().unchecked_ref(),
                )
                .map_err(|err| HostError::Listener {
                    event: kind.event_name(),
                    message: dom::js_error_message(&err),
                })?;
            listeners.handlers.push((kind, closure));
        }
        log::debug!("attached {} window listeners", listeners.handlers.len());
        Ok(listeners)
    }
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        for (kind, closure) in self.handlers.drain(..) {
            let _ = self.window.remove_event_listener_with_callback(
                kind.event_name(),
                closure.as_ref().unchecked_ref(),
            );
        }
        log::debug!("released window listeners");
    }
}
