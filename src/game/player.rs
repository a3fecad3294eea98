use super::cell::{Cell, PlayerCell};
use super::direction::Direction;
use super::position::Position;
use crate::consts;

/// The snake.  `cells[0]` is the head and `cells[last]` is the tail; `facing`
/// mirrors the head segment's facing.  The sequence is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Player {
    pub(super) cells: Vec<PlayerCell>,
    pub(super) facing: Direction,
}

impl Player {
    /// Create a snake with its head at `head` and its body extending
    /// southwards, facing north.
    pub(super) fn new(head: Position) -> Player {
        let cells = (0..consts::INITIAL_SNAKE_LENGTH)
            .map(|i| {
                let offset = i32::try_from(i).expect("initial snake length should fit in i32");
                let position = Position::new(head.x, head.y + offset);
                Player::create_cell(position, i == 0, Direction::North)
            })
            .collect();
        Player {
            cells,
            facing: Direction::North,
        }
    }

    /// Build a snake segment cell.  `flip_colors` selects the inverted head
    /// styling; the glyph always follows `facing`.
    pub(super) fn create_cell(position: Position, flip_colors: bool, facing: Direction) -> PlayerCell {
        let (bg, fg) = if flip_colors {
            (consts::PLAYER_FG, consts::PLAYER_BG)
        } else {
            (consts::PLAYER_BG, consts::PLAYER_FG)
        };
        PlayerCell {
            cell: Cell::new(position, bg, fg, facing.glyph()),
            facing,
        }
    }

    pub(super) fn head(&self) -> &PlayerCell {
        self.cells.first().expect("the snake should never be empty")
    }

    pub(super) fn tail(&self) -> &PlayerCell {
        self.cells.last().expect("the snake should never be empty")
    }

    pub(crate) fn facing(&self) -> Direction {
        self.facing
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the snake may turn to face `direction`.  The only forbidden
    /// turn is the direct opposite of the current facing, which would steer
    /// the head straight into the segment behind it.
    pub(crate) fn can_face(&self, direction: Direction) -> bool {
        !direction.is_opposite(self.facing)
    }

    /// Turn to face `direction`, restyling the head segment to match.
    /// Callers are expected to have consulted [`Player::can_face`] first;
    /// this method does not re-validate.
    pub(super) fn face(&mut self, direction: Direction) {
        self.facing = direction;
        let head_position = self.head().position();
        self.cells[0] = Player::create_cell(head_position, true, direction);
    }

    /// The position the head will occupy if the snake advances one cell in
    /// its current direction.
    pub(crate) fn next_head_position(&self) -> Position {
        self.head().position().neighbor(self.facing)
    }

    /// Whether any segment sits at `position`.  With `ignore_tail` set, the
    /// tail cell does not count: on a normal move the tail vacates its cell
    /// during the same tick the head advances, so moving onto it is legal.
    pub(crate) fn is_occupying_position(&self, position: Position, ignore_tail: bool) -> bool {
        self.cells
            .iter()
            .any(|c| c.position() == position && !(ignore_tail && position == self.tail().position()))
    }

    /// Whether two segments currently share a position
    pub(crate) fn collided_with_self(&self) -> bool {
        let positions: Vec<Position> = self.cells.iter().map(PlayerCell::position).collect();
        positions
            .iter()
            .enumerate()
            .any(|(i, p)| positions[..i].contains(p))
    }

    /// Reverse the snake end-for-end: the old tail becomes the new head and
    /// travel continues in (roughly) the opposite direction.
    ///
    /// The natural choice of new facing is the opposite of the current one,
    /// but if stepping that way from the old tail would land on the
    /// second-to-last segment — the cell that becomes the new neck — the
    /// new head would immediately re-enter the body.  In that case the facing
    /// is derived from the tail's own direction of travel instead, reversed,
    /// which is guaranteed to point away from the body.
    pub(super) fn reverse(&mut self) {
        let natural = self.facing.opposite();
        let tail_position = self.tail().position();
        let new_facing = match self.cells.len().checked_sub(2).map(|i| self.cells[i].position()) {
            Some(neck_position) if tail_position.neighbor(natural) == neck_position => {
                Position::direction_of_travel(tail_position, neck_position)
                    .expect("adjacent segments should occupy distinct positions")
                    .opposite()
            }
            _ => natural,
        };
        self.cells.reverse();
        for cell in &mut self.cells[1..] {
            *cell = Player::create_cell(cell.position(), false, cell.facing.opposite());
        }
        self.face(new_facing);
    }
}
