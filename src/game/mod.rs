mod cell;
mod direction;
mod enemy;
mod grid;
mod player;
mod position;
mod timer;
pub(crate) use self::cell::Cell;
pub(crate) use self::direction::Direction;
use self::enemy::Enemy;
use self::grid::GameGrid;
use self::player::Player;
pub(crate) use self::position::Position;
use self::timer::PlayTimer;
use crate::audio::AudioManager;
use crate::events::EventSink;
use crate::input::PlayerInput;
use crate::settings::{Settings, WallCollisionBehavior};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The phases of one game process.  `Won` and `GameOver` are the terminal
/// phases of a round; `Exiting` is the terminal phase of the process.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Initializing,
    Playing,
    Paused,
    GameOver,
    Won,
    Exiting,
}

impl GameState {
    pub(crate) fn is_gameplay_over(self) -> bool {
        matches!(self, GameState::GameOver | GameState::Won)
    }
}

/// What the caller should do after one pass of input processing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Continue,
    Quit,
}

/// The top-level game orchestrator: owns the settings, the grid, the score,
/// and the state machine, and drives one tick per configured interval.
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    settings: Settings,
    grid: GameGrid,
    state: GameState,
    score: u32,
    ticks_per_second: u32,
    timer: PlayTimer,
    audio: AudioManager,
    events: EventSink,
    rng: R,
    next_tick: Option<Instant>,
    pending_facing: Option<Direction>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings, events: EventSink) -> Self {
        Game::new_with_rng(settings, events, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: Settings, events: EventSink, rng: R) -> Game<R> {
        let grid = GameGrid::new(settings.width, settings.height, events.clone());
        let mut game = Game {
            settings,
            grid,
            state: GameState::Initializing,
            score: 0,
            ticks_per_second: settings.initial_ticks_per_second,
            timer: PlayTimer::new(events.clone()),
            audio: AudioManager::new(settings.audio_enabled),
            events,
            rng,
            next_tick: None,
            pending_facing: None,
        };
        game.initialize();
        game
    }

    /// Set up (or re-set up, on replay) everything that lives for one round
    fn initialize(&mut self) {
        info!(settings = ?self.settings, "setting up round");
        self.grid.reset();
        self.set_state(GameState::Initializing);
        self.set_score(0);
        self.timer.reset();
        self.ticks_per_second = self.settings.initial_ticks_per_second;
        self.next_tick = None;
        self.pending_facing = None;

        let center = Position::new(self.settings.width / 2, self.settings.height / 2);
        self.grid.add_player(Player::new(center));
        self.initialize_enemy();

        // Setup is complete; an immediately-full board has already moved the
        // round to its terminal state instead.
        if self.state == GameState::Initializing {
            self.set_state(GameState::Playing);
        }
    }

    /// Wait for input until the next tick deadline, whichever comes first.
    /// While a round is not in progress there is no deadline and this blocks
    /// until a key arrives.
    pub(crate) fn process_input(&mut self) -> io::Result<Outcome> {
        self.timer.maybe_report();
        match self.state {
            GameState::Playing => {
                if self.next_tick.is_none() {
                    self.next_tick = Some(Instant::now() + self.tick_period());
                }
                let when = self.next_tick.expect("next_tick should be Some");
                let wait = when.saturating_duration_since(Instant::now());
                if wait.is_zero() || !poll(wait)? {
                    self.next_tick = None;
                    self.tick();
                    Ok(Outcome::Continue)
                } else {
                    Ok(self.handle_event(read()?))
                }
            }
            GameState::Exiting => Ok(Outcome::Quit),
            _ => Ok(self.handle_event(read()?)),
        }
    }

    fn handle_event(&mut self, event: Event) -> Outcome {
        if event == Event::FocusLost && self.state == GameState::Playing {
            self.set_state(GameState::Paused);
            return Outcome::Continue;
        }
        let Some(key) = event.as_key_press_event() else {
            return Outcome::Continue;
        };
        let Some(input) = PlayerInput::from_key_event(key, self.state) else {
            return Outcome::Continue;
        };
        debug!(?input, "player input captured");
        match input {
            PlayerInput::TogglePause => self.handle_toggle_pause(),
            PlayerInput::FaceNorth
            | PlayerInput::FaceEast
            | PlayerInput::FaceSouth
            | PlayerInput::FaceWest => {
                if self.state == GameState::Playing {
                    let direction = input
                        .direction()
                        .expect("facing inputs should map to a direction");
                    self.handle_change_direction(direction);
                }
            }
            PlayerInput::Replay => {
                if self.state.is_gameplay_over() {
                    info!("replay requested");
                    self.initialize();
                }
            }
            PlayerInput::Quit => {
                self.set_state(GameState::Exiting);
                return Outcome::Quit;
            }
        }
        Outcome::Continue
    }

    fn handle_toggle_pause(&mut self) {
        match self.state {
            GameState::Playing => self.set_state(GameState::Paused),
            GameState::Paused => self.set_state(GameState::Playing),
            _ => (),
        }
    }

    /// Record a request to turn.  Only the latest request in a tick interval
    /// survives, and it is resolved against the facing the snake last moved
    /// with at the top of the next tick; applying key presses one by one
    /// would let two of them compose into a 180° turn between ticks.
    fn handle_change_direction(&mut self, direction: Direction) {
        self.pending_facing = Some(direction);
    }

    /// Apply the buffered turn request, if any.  The turn is ignored (not an
    /// error) when the snake cannot face that way.
    fn apply_pending_facing(&mut self) {
        let Some(direction) = self.pending_facing.take() else {
            return;
        };
        let player = self.grid.player().expect("a player should be registered");
        if !player.can_face(direction) {
            debug!(?direction, "cannot face direction");
            return;
        }
        self.grid.set_player_facing(direction);
        debug!(?direction, "direction changed");
        self.audio.play_player_moved();
    }

    /// One simulation step: resolve at most one direction change, then move
    /// the snake, resolving wall contact, self collision, and enemy
    /// destruction.
    fn tick(&mut self) {
        self.apply_pending_facing();
        let next_head_position = self
            .grid
            .player()
            .expect("a player should be registered")
            .next_head_position();
        debug!(?next_head_position, "tick");

        if !self.grid.is_in_bounds(next_head_position) {
            self.handle_wall_collision(next_head_position);
            return;
        }

        let player = self.grid.player().expect("a player should be registered");
        if player.is_occupying_position(next_head_position, true) {
            info!("snake collided with itself");
            self.audio.play_player_destroyed();
            self.set_state(GameState::GameOver);
            return;
        }

        let old_tail_position = self.grid.move_player(next_head_position);
        if self.enemy_destroyed() {
            self.handle_enemy_destroyed(old_tail_position);
        }
    }

    fn handle_wall_collision(&mut self, next_head_position: Position) {
        match self.settings.wall_collision_behavior {
            WallCollisionBehavior::Rebound => {
                debug!("rebounding off the wall");
                self.grid.reverse_player();
            }
            WallCollisionBehavior::Portal => {
                debug!("portalling through the wall");
                self.grid.portal_player(next_head_position);
            }
            WallCollisionBehavior::GameOver => {
                info!("snake crashed into the wall");
                self.audio.play_player_destroyed();
                self.set_state(GameState::GameOver);
            }
        }
    }

    fn enemy_destroyed(&self) -> bool {
        let head_position = self
            .grid
            .player()
            .expect("a player should be registered")
            .head()
            .position();
        self.grid.enemy_position() == Some(head_position)
    }

    fn handle_enemy_destroyed(&mut self, old_tail_position: Position) {
        info!(score = self.score + 1, "enemy destroyed");
        self.grid.clear_enemy();
        self.grid.extend_player_tail(old_tail_position);
        self.audio.play_enemy_destroyed();
        self.set_score(self.score + 1);
        if self.settings.increase_speed_on_enemy_destroyed
            && self.ticks_per_second < crate::consts::MAX_TICKS_PER_SECOND
        {
            self.ticks_per_second += 1;
            debug!(ticks_per_second = self.ticks_per_second, "speed increased");
        }
        self.initialize_enemy();
    }

    /// Place a fresh enemy on a random free cell; a board with no free cell
    /// left means the snake has filled the grid and the round is won.
    fn initialize_enemy(&mut self) {
        if self.grid.available_positions().is_empty() {
            info!("the snake fills the entire grid");
            self.set_state(GameState::Won);
        } else {
            let position = self.grid.random_available_position(&mut self.rng);
            debug!(?position, "placing new enemy");
            self.grid.add_enemy(Enemy::new(position));
        }
    }

    fn tick_period(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second))
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.events.score_updated(score);
    }

    fn set_state(&mut self, state: GameState) {
        match state {
            GameState::Playing => self.timer.start(),
            GameState::Paused | GameState::GameOver | GameState::Won => self.timer.stop(),
            GameState::Initializing | GameState::Exiting => (),
        }
        self.state = state;
        info!(?state, "game state updated");
        self.events.state_updated(state);
    }
}
