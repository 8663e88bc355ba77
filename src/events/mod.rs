//! Outbound notifications to the presentation layer.
//!
//! The engine has no dependency on any rendering or event-loop mechanism.
//! It emits `GameEvent`s through an `EventBus`; hosts register observers
//! (closures, `mpsc::Sender`s, or their own `GameObserver` types).
//!
//! Emission happens only after a mutation has fully committed, so an
//! observer always sees the state the event describes.

pub mod bus;
pub mod event;

pub use bus::{EventBus, EventLog, GameObserver, ObserverId};
pub use event::GameEvent;
