//! Slot geometry supplied by the presentation layer.
//!
//! The engine needs two coordinates: where the tray slot is and where the
//! stack slot is. They become target positions for forward moves and the
//! recorded positions in undo actions. `TableLayout` is a plain-data
//! implementation with the default 1080-wide table.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Pure, side-effect-free slot lookups.
pub trait SlotGeometry {
    fn tray_position(&self) -> Position;
    fn stack_position(&self) -> Position;
}

impl<T: SlotGeometry + ?Sized> SlotGeometry for &T {
    fn tray_position(&self) -> Position {
        (**self).tray_position()
    }

    fn stack_position(&self) -> Position {
        (**self).stack_position()
    }
}

/// Fixed slot coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub tray: Position,
    pub stack: Position,
}

impl TableLayout {
    /// Design width of the default table.
    pub const DESIGN_WIDTH: f32 = 1080.0;

    /// Height of both slots on the default table.
    pub const SLOT_Y: f32 = 400.0;

    #[must_use]
    pub fn new(tray: Position, stack: Position) -> Self {
        Self { tray, stack }
    }

    #[must_use]
    pub fn with_tray(mut self, tray: Position) -> Self {
        self.tray = tray;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: Position) -> Self {
        self.stack = stack;
        self
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            tray: Position::new(Self::DESIGN_WIDTH / 2.0 - 150.0, Self::SLOT_Y),
            stack: Position::new(Self::DESIGN_WIDTH / 2.0, Self::SLOT_Y),
        }
    }
}

impl SlotGeometry for TableLayout {
    fn tray_position(&self) -> Position {
        self.tray
    }

    fn stack_position(&self) -> Position {
        self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots() {
        let layout = TableLayout::default();

        assert_eq!(layout.tray_position(), Position::new(390.0, 400.0));
        assert_eq!(layout.stack_position(), Position::new(540.0, 400.0));
    }

    #[test]
    fn test_builder_overrides() {
        let layout = TableLayout::default()
            .with_tray(Position::new(1.0, 2.0))
            .with_stack(Position::new(3.0, 4.0));

        assert_eq!(layout, TableLayout::new(Position::new(1.0, 2.0), Position::new(3.0, 4.0)));
    }

    #[test]
    fn test_reference_is_geometry() {
        fn tray_of(g: impl SlotGeometry) -> Position {
            g.tray_position()
        }

        let layout = TableLayout::default();
        assert_eq!(tray_of(&layout), layout.tray);
    }
}
