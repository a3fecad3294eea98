use super::cell::Cell;
use super::direction::Direction;
use super::enemy::Enemy;
use super::player::Player;
use super::position::Position;
use crate::consts;
use crate::events::EventSink;
use rand::{seq::IteratorRandom, Rng};

/// Owner of the board and every entity on it.  All state-changing operations
/// on the snake go through the grid so that a cell-update notification can be
/// emitted for every cell whose appearance changed.
///
/// Operations that need a registered player treat its absence as a
/// programming error and panic; a missing player is never a recoverable game
/// condition.
#[derive(Debug)]
pub(crate) struct GameGrid {
    pub(super) width: i32,
    pub(super) height: i32,
    pub(super) cells: Vec<Cell>,
    pub(super) player: Option<Player>,
    pub(super) enemy: Option<Enemy>,
    events: EventSink,
}

impl GameGrid {
    pub(crate) fn new(width: i32, height: i32, events: EventSink) -> GameGrid {
        let mut grid = GameGrid {
            width,
            height,
            cells: Vec::new(),
            player: None,
            enemy: None,
            events,
        };
        grid.build_cells();
        grid
    }

    /// Rebuild the base styling for a new round, dropping any leftover snake
    /// and enemy, and re-announce every cell.
    pub(crate) fn reset(&mut self) {
        self.player = None;
        self.enemy = None;
        self.build_cells();
    }

    pub(crate) fn is_in_bounds(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Register the snake.  Placement is not validated; the caller is
    /// responsible for choosing a legal starting position.
    pub(crate) fn add_player(&mut self, player: Player) {
        for cell in &player.cells {
            self.events.cell_updated(cell.cell, false);
        }
        self.player = Some(player);
    }

    pub(crate) fn add_enemy(&mut self, enemy: Enemy) {
        self.events.cell_updated(enemy.cell(), false);
        self.enemy = Some(enemy);
    }

    /// Drop the current enemy without restyling its cell; the caller only
    /// does this when the snake's head has just covered it.
    pub(crate) fn clear_enemy(&mut self) {
        self.enemy = None;
    }

    pub(crate) fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub(crate) fn enemy_position(&self) -> Option<Position> {
        self.enemy.as_ref().map(Enemy::position)
    }

    /// Advance the snake's head to `next_head_position`, restyling the former
    /// head as a body segment and vacating the tail.  Returns the vacated
    /// tail position so the caller can grow the snake there if it just ate.
    pub(crate) fn move_player(&mut self, next_head_position: Position) -> Position {
        let player = self.required_player();
        let facing = player.facing;
        let new_head = Player::create_cell(next_head_position, true, facing);
        let old_head = Player::create_cell(player.head().position(), false, facing);
        let old_tail_position = player.tail().position();
        player.cells.insert(0, new_head);
        player.cells[1] = old_head;
        player.cells.pop();
        let vacated = self.base_cell(old_tail_position);
        self.events.cell_updated(vacated, false);
        self.events.cell_updated(old_head.cell, false);
        self.events.cell_updated(new_head.cell, false);
        old_tail_position
    }

    /// Append one body segment at `position` (the cell the old tail vacated
    /// this tick), growing the snake by one net segment.
    pub(crate) fn extend_player_tail(&mut self, position: Position) {
        let player = self.required_player();
        let facing = player.facing;
        let cell = Player::create_cell(position, false, facing);
        player.cells.push(cell);
        self.events.cell_updated(cell.cell, false);
    }

    /// Reverse the snake in place and re-announce every segment, since every
    /// segment's facing and styling change.
    pub(crate) fn reverse_player(&mut self) {
        let player = self.required_player();
        player.reverse();
        let cells: Vec<Cell> = player.cells.iter().map(|c| c.cell).collect();
        for cell in cells {
            self.events.cell_updated(cell, false);
        }
    }

    /// Wrap a head position that left the grid on one axis back in through
    /// the opposite edge, then move the snake there.  Only one coordinate is
    /// expected to be out of range at a time.
    pub(crate) fn portal_player(&mut self, old_head_position: Position) -> Position {
        let Position { mut x, mut y } = old_head_position;
        if old_head_position.x < 0 {
            x = self.width - 1;
        } else if old_head_position.x > self.width - 1 {
            x = 0;
        } else if old_head_position.y < 0 {
            y = self.height - 1;
        } else if old_head_position.y > self.height - 1 {
            y = 0;
        }
        self.move_player(Position::new(x, y))
    }

    /// Turn the snake to face `direction` and re-announce the head cell
    pub(crate) fn set_player_facing(&mut self, direction: Direction) {
        let player = self.required_player();
        player.face(direction);
        let head = player.head().cell;
        self.events.cell_updated(head, false);
    }

    /// Every board position covered by neither the snake nor the enemy
    pub(crate) fn available_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .map(Cell::position)
            .filter(|&p| {
                self.enemy.as_ref().is_none_or(|e| e.position() != p)
                    && self
                        .player
                        .as_ref()
                        .is_none_or(|pl| !pl.is_occupying_position(p, false))
            })
            .collect()
    }

    /// Uniformly sample an available position.  The caller must have checked
    /// that one exists; exhaustion is a win condition, not a sampling error.
    pub(crate) fn random_available_position<R: Rng>(&self, rng: &mut R) -> Position {
        self.available_positions()
            .into_iter()
            .choose(rng)
            .expect("the caller should have checked that a position is available")
    }

    fn base_cell(&self, position: Position) -> Cell {
        Cell::new(position, consts::GRID_BG, consts::GRID_FG, consts::GRID_GLYPH)
    }

    fn build_cells(&mut self) {
        self.cells.clear();
        for x in 0..self.width {
            for y in 0..self.height {
                let cell = self.base_cell(Position::new(x, y));
                self.cells.push(cell);
                self.events.cell_updated(cell, false);
            }
        }
    }

    fn required_player(&mut self) -> &mut Player {
        self.player
            .as_mut()
            .expect("a player should be registered with the grid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::GameEvent;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::sync::mpsc::{channel, Receiver};

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn grid_with_events(width: i32, height: i32) -> (GameGrid, Receiver<GameEvent>) {
        let (tx, rx) = channel();
        let grid = GameGrid::new(width, height, EventSink::new(tx));
        while rx.try_recv().is_ok() {}
        (grid, rx)
    }

    fn cell_updates(rx: &Receiver<GameEvent>) -> Vec<(Position, bool)> {
        let mut updates = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let GameEvent::CellUpdated {
                cell,
                preserve_exact,
            } = event
            {
                updates.push((cell.position(), preserve_exact));
            }
        }
        updates
    }

    #[test]
    fn construction_announces_every_base_cell() {
        let (tx, rx) = channel();
        let grid = GameGrid::new(4, 3, EventSink::new(tx));
        assert_eq!(grid.cells.len(), 12);
        assert_eq!(cell_updates(&rx).len(), 12);
    }

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(4, 2), true)]
    #[case(Position::new(-1, 0), false)]
    #[case(Position::new(0, -1), false)]
    #[case(Position::new(5, 0), false)]
    #[case(Position::new(0, 3), false)]
    fn bounds(#[case] position: Position, #[case] in_bounds: bool) {
        let (grid, _rx) = grid_with_events(5, 3);
        assert_eq!(grid.is_in_bounds(position), in_bounds);
    }

    #[test]
    fn move_player_shifts_the_body_and_announces_three_cells() {
        let (mut grid, rx) = grid_with_events(10, 10);
        grid.add_player(Player::new(Position::new(5, 5)));
        while rx.try_recv().is_ok() {}

        let vacated = grid.move_player(Position::new(5, 4));
        assert_eq!(vacated, Position::new(5, 9));
        let player = grid.player().unwrap();
        assert_eq!(player.len(), consts::INITIAL_SNAKE_LENGTH);
        assert_eq!(player.head().position(), Position::new(5, 4));
        assert_eq!(player.tail().position(), Position::new(5, 8));
        assert!(!player.collided_with_self());

        let updates = cell_updates(&rx);
        assert_eq!(
            updates,
            vec![
                (Position::new(5, 9), false), // vacated tail
                (Position::new(5, 5), false), // demoted head
                (Position::new(5, 4), false), // new head
            ]
        );
    }

    #[test]
    fn extend_player_tail_grows_by_one() {
        let (mut grid, rx) = grid_with_events(10, 10);
        grid.add_player(Player::new(Position::new(5, 5)));
        let vacated = grid.move_player(Position::new(5, 4));
        while rx.try_recv().is_ok() {}

        grid.extend_player_tail(vacated);
        let player = grid.player().unwrap();
        assert_eq!(player.len(), consts::INITIAL_SNAKE_LENGTH + 1);
        assert_eq!(player.tail().position(), vacated);
        assert!(!player.collided_with_self());
        assert_eq!(cell_updates(&rx), vec![(vacated, false)]);
    }

    #[test]
    fn reverse_player_announces_every_segment() {
        let (mut grid, rx) = grid_with_events(10, 10);
        grid.add_player(Player::new(Position::new(5, 5)));
        while rx.try_recv().is_ok() {}

        grid.reverse_player();
        let player = grid.player().unwrap();
        assert_eq!(player.facing(), Direction::South);
        assert_eq!(cell_updates(&rx).len(), consts::INITIAL_SNAKE_LENGTH);
    }

    #[rstest]
    #[case(Position::new(5, 2), Position::new(0, 2))]
    #[case(Position::new(-1, 2), Position::new(4, 2))]
    #[case(Position::new(3, 5), Position::new(3, 0))]
    #[case(Position::new(3, -1), Position::new(3, 4))]
    fn portal_wraps_exactly_one_axis(#[case] outside: Position, #[case] wrapped: Position) {
        let (mut grid, _rx) = grid_with_events(5, 5);
        // A short snake well away from the edges being tested
        let mut player = Player::new(Position::new(2, 2));
        player.cells.truncate(1);
        grid.add_player(player);

        grid.portal_player(outside);
        assert_eq!(grid.player().unwrap().head().position(), wrapped);
    }

    #[test]
    fn available_positions_exclude_snake_and_enemy() {
        let (mut grid, _rx) = grid_with_events(3, 3);
        let mut player = Player::new(Position::new(1, 0));
        player.cells.truncate(3); // (1,0) (1,1) (1,2)
        grid.add_player(player);
        grid.add_enemy(Enemy::new(Position::new(0, 0)));

        let mut available = grid.available_positions();
        available.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            available,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn available_positions_count_the_whole_tail() {
        // The tail-exclusion rule applies to movement only; for placement,
        // every segment's cell is occupied.
        let (mut grid, _rx) = grid_with_events(4, 4);
        let mut player = Player::new(Position::new(0, 0));
        player.cells.truncate(4);
        grid.add_player(player);
        let available = grid.available_positions();
        assert_eq!(available.len(), 12);
        let tail = grid.player().unwrap().tail().position();
        assert!(!available.contains(&tail));
    }

    #[test]
    fn random_placement_never_lands_on_an_occupied_cell() {
        let (mut grid, _rx) = grid_with_events(4, 4);
        let mut player = Player::new(Position::new(1, 0));
        player.cells.truncate(4);
        grid.add_player(player);
        grid.add_enemy(Enemy::new(Position::new(0, 0)));

        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..200 {
            let position = grid.random_available_position(&mut rng);
            assert!(grid.is_in_bounds(position));
            assert!(!grid
                .player()
                .unwrap()
                .is_occupying_position(position, false));
            assert_ne!(grid.enemy_position(), Some(position));
        }
    }

    #[test]
    fn reset_drops_entities_and_reannounces_the_board() {
        let (mut grid, rx) = grid_with_events(4, 4);
        grid.add_player(Player::new(Position::new(1, 0)));
        grid.add_enemy(Enemy::new(Position::new(3, 3)));
        while rx.try_recv().is_ok() {}

        grid.reset();
        assert!(grid.player().is_none());
        assert!(grid.enemy_position().is_none());
        assert_eq!(cell_updates(&rx).len(), 16);
        assert_eq!(grid.available_positions().len(), 16);
    }

    #[test]
    #[should_panic(expected = "a player should be registered")]
    fn moving_without_a_player_is_a_programming_error() {
        let (mut grid, _rx) = grid_with_events(4, 4);
        grid.move_player(Position::new(1, 1));
    }
}
