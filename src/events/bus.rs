//! Observer registry.
//!
//! The controller owns one `EventBus`. Observers register once and receive
//! every event in emission order. Closures, channels, and `EventLog` all
//! implement `GameObserver`.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Receives game events. Must not call back into the controller.
pub trait GameObserver: Send {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Forwards events to a channel. A closed receiver is ignored.
impl GameObserver for Sender<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        let _ = self.send(event.clone());
    }
}

/// Handle returned by `EventBus::register`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

/// Registered observers, notified in registration order.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_id: u32,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns true if it was registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Deliver an event to every observer.
    pub fn emit(&mut self, event: &GameEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }

    /// Deliver an event to one observer only.
    pub fn emit_to(&mut self, id: ObserverId, event: &GameEvent) {
        if let Some((_, observer)) = self.observers.iter_mut().find(|(oid, _)| *oid == id) {
            observer.on_event(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A shared, cloneable recorder of every event it receives.
///
/// Register one clone with the bus and keep another to inspect.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every event recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Remove and return every event recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
