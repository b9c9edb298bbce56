use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::error::PreviewError;

/// A DOM event listener that is removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Register `handler` for `event` on `target`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, PreviewError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(
            event,
            callback.as_ref().unchecked_ref(),
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Register a listener that cancels `event` and stops it propagating.
    pub fn suppress(
        target: &EventTarget,
        event: &'static str,
    ) -> Result<Self, PreviewError> {
        Self::new(target, event, |e: Event| {
            e.prevent_default();
            e.stop_propagation();
        })
    }

    /// Name of the event this listener is registered for.
    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to remove {} listener: {e:?}", self.event);
        }
    }
}
