//! Core engine types: ids, positions, state, undo actions, snapshots, RNG,
//! errors.
//!
//! Everything here is plain data plus the collection operations on it. The
//! rules that decide *when* state may change live in `rules` and
//! `controller`.

pub mod action;
pub mod error;
pub mod id;
pub mod position;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::{CardMove, UndoAction, UndoKind};
pub use error::{ConfigError, MoveRejection, SnapshotError};
pub use id::{CardId, CardIdAllocator};
pub use position::Position;
pub use rng::GameRng;
pub use snapshot::{CardRecord, Snapshot};
pub use state::PlayArea;
