use super::direction::Direction;

/// A location on the game grid.  Coordinates are signed so that the cell a
/// snake is about to move into can be represented even when it lies outside
/// the grid (the wall-collision policies need to reason about such cells).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// The position one cell away in the given direction.  North is towards
    /// decreasing `y`.
    pub(crate) fn neighbor(self, direction: Direction) -> Position {
        match direction {
            Direction::North => Position::new(self.x, self.y - 1),
            Direction::East => Position::new(self.x + 1, self.y),
            Direction::South => Position::new(self.x, self.y + 1),
            Direction::West => Position::new(self.x - 1, self.y),
        }
    }

    /// The direction something at `from` travelled to arrive at `to`.
    /// Horizontal displacement wins when the positions differ on both axes.
    /// Returns `None` when the positions are equal, since no travel occurred.
    pub(crate) fn direction_of_travel(from: Position, to: Position) -> Option<Direction> {
        if from.x > to.x {
            Some(Direction::West)
        } else if from.x < to.x {
            Some(Direction::East)
        } else if from.y > to.y {
            Some(Direction::North)
        } else if from.y < to.y {
            Some(Direction::South)
        } else {
            None
        }
    }
}
