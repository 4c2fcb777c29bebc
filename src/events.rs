//! In-process event subsystem.
//!
//! Mirrors the host runtime's event API: `listen` hands back its unlisten capability as a
//! future, `emit` fans a payload out to every listener of an event name.

use std::sync::{Arc, Weak};

use futures::future::{self, Ready};
use log::trace;
use parking_lot::Mutex;
use serde_json::Value;
use uuid::Uuid;

use crate::error::BridgeError;
use crate::models::Event;
use crate::unlisten::{make_deferred_unlisten, DeferredUnlisten, UnlistenFn};

type Handler = Arc<dyn Fn(Event) + Send + Sync>;

struct Listener {
    id: String,
    event: String,
    handler: Handler,
}

#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to `event`.
    ///
    /// The listener is registered immediately; the returned future yields the capability
    /// that removes it. Calling that capability more than once is a no-op after the first.
    pub fn listen<F>(
        &self,
        event: impl Into<String>,
        handler: F,
    ) -> Ready<Result<UnlistenFn, BridgeError>>
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        future::ready(self.register(event.into(), Arc::new(handler)))
    }

    /// [`listen`](Self::listen) wrapped into a [`DeferredUnlisten`].
    pub fn listen_deferred<F>(&self, event: impl Into<String>, handler: F) -> DeferredUnlisten
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        make_deferred_unlisten(self.listen(event, handler))
    }

    fn register(&self, event: String, handler: Handler) -> Result<UnlistenFn, BridgeError> {
        validate_event_name(&event)?;
        let id = Uuid::new_v4().to_string();
        trace!("listen {event} ({id})");
        self.listeners.lock().push(Listener {
            id: id.clone(),
            event,
            handler,
        });

        let listeners: Weak<Mutex<Vec<Listener>>> = Arc::downgrade(&self.listeners);
        Ok(Arc::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                remove_listener(&listeners, &id);
            }
        }))
    }

    /// Deliver `payload` to every listener of `event`, in registration order.
    /// Returns how many listeners were called.
    pub fn emit(&self, event: &str, payload: Value) -> usize {
        // Snapshot first: handlers may listen or unlisten while running.
        let targets: Vec<(String, Handler)> = self
            .listeners
            .lock()
            .iter()
            .filter(|l| l.event == event)
            .map(|l| (l.id.clone(), l.handler.clone()))
            .collect();

        for (id, handler) in &targets {
            handler(Event {
                id: id.clone(),
                name: event.to_string(),
                payload: payload.clone(),
            });
        }
        targets.len()
    }

    /// Remove one listener by id. Returns false if it was already gone.
    pub fn unlisten(&self, id: &str) -> bool {
        remove_listener(&self.listeners, id)
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.lock().iter().filter(|l| l.event == event).count()
    }
}

/// Event names follow the host runtime's rules: non-empty, alphanumeric plus `-/:_`.
pub fn validate_event_name(event: &str) -> Result<(), BridgeError> {
    let valid = !event.is_empty()
        && event
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '/' | ':' | '_'));
    if !valid {
        return Err(BridgeError::InvalidEvent(event.to_string()));
    }
    Ok(())
}

fn remove_listener(listeners: &Mutex<Vec<Listener>>, id: &str) -> bool {
    let mut listeners = listeners.lock();
    let before = listeners.len();
    listeners.retain(|l| l.id != id);
    let removed = listeners.len() != before;
    if removed {
        trace!("unlisten {id}");
    }
    removed
}
