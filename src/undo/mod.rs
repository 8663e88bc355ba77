//! Single-step undo.
//!
//! Every forward transition pushes one `UndoAction` onto the `UndoLog`
//! before it mutates state. `UndoManager::undo` pops the latest action and
//! inverts it from the captured fields alone, so repeated undos walk the log
//! backward without replaying history. There is no redo.
//!
//! ## Example
//!
//! ```
//! use tray_match::core::PlayArea;
//! use tray_match::undo::UndoManager;
//! use tray_match::core::MoveRejection;
//!
//! let mut manager = UndoManager::new();
//! let mut area = PlayArea::new();
//!
//! assert!(!manager.can_undo());
//! assert_eq!(manager.undo(&mut area), Err(MoveRejection::NothingToUndo));
//! ```

pub mod invert;
mod undo_log;
mod manager;

pub use undo_log::UndoLog;
pub use manager::UndoManager;
