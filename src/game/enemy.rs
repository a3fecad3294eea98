use super::cell::Cell;
use super::position::Position;
use crate::consts;

/// The object the snake is trying to reach and consume.  Passive data; a new
/// one is created each time the current one is destroyed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Enemy {
    cell: Cell,
}

impl Enemy {
    pub(super) fn new(position: Position) -> Enemy {
        Enemy {
            cell: Cell::new(
                position,
                consts::ENEMY_BG,
                consts::ENEMY_FG,
                consts::ENEMY_GLYPH,
            ),
        }
    }

    pub(super) fn cell(&self) -> Cell {
        self.cell
    }

    pub(crate) fn position(&self) -> Position {
        self.cell.position()
    }
}
