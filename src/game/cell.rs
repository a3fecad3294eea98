use super::direction::Direction;
use super::position::Position;
use ratatui::style::Color;

/// One renderable unit of the board: a position plus the colors and glyph to
/// draw there.  Cells are immutable; when a cell's appearance changes, a new
/// `Cell` is produced and announced, never mutated in place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Cell {
    position: Position,
    bg: Color,
    fg: Color,
    glyph: char,
}

impl Cell {
    pub(crate) fn new(position: Position, bg: Color, fg: Color, glyph: char) -> Cell {
        Cell {
            position,
            bg,
            fg,
            glyph,
        }
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn bg(&self) -> Color {
        self.bg
    }

    pub(crate) fn fg(&self) -> Color {
        self.fg
    }

    pub(crate) fn glyph(&self) -> char {
        self.glyph
    }
}

/// A [`Cell`] belonging to the snake, extended with the direction the segment
/// is facing.  The glyph is always the facing's arrow; the head additionally
/// swaps background and foreground colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PlayerCell {
    pub(super) cell: Cell,
    pub(super) facing: Direction,
}

impl PlayerCell {
    pub(super) fn position(&self) -> Position {
        self.cell.position()
    }
}
