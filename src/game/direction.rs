use crate::consts;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub(crate) fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// The arrow glyph a snake segment facing this way is drawn with
    pub(crate) fn glyph(self) -> char {
        match self {
            Direction::North => consts::GLYPH_NORTH,
            Direction::East => consts::GLYPH_EAST,
            Direction::South => consts::GLYPH_SOUTH,
            Direction::West => consts::GLYPH_WEST,
        }
    }

    pub(crate) fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    pub(crate) fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}
