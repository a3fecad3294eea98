use crate::game::{Direction, GameState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The game-level actions a key press can map to.  The mapping depends on the
/// current game state: movement keys mean nothing on the game-over screen,
/// and `r` only means "replay" there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PlayerInput {
    FaceNorth,
    FaceEast,
    FaceSouth,
    FaceWest,
    TogglePause,
    Replay,
    Quit,
}

impl PlayerInput {
    pub(crate) fn from_key_event(key: KeyEvent, state: GameState) -> Option<PlayerInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return (key.code == KeyCode::Char('c')).then_some(PlayerInput::Quit);
        }
        if state.is_gameplay_over() {
            return match key.code {
                KeyCode::Char('r') => Some(PlayerInput::Replay),
                KeyCode::Char('q') | KeyCode::Esc => Some(PlayerInput::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'k') => Some(PlayerInput::FaceNorth),
            KeyCode::Right | KeyCode::Char('d' | 'l') => Some(PlayerInput::FaceEast),
            KeyCode::Down | KeyCode::Char('s' | 'j') => Some(PlayerInput::FaceSouth),
            KeyCode::Left | KeyCode::Char('a' | 'h') => Some(PlayerInput::FaceWest),
            KeyCode::Esc | KeyCode::Char('p') => Some(PlayerInput::TogglePause),
            KeyCode::Char('q') => Some(PlayerInput::Quit),
            _ => None,
        }
    }

    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            PlayerInput::FaceNorth => Some(Direction::North),
            PlayerInput::FaceEast => Some(Direction::East),
            PlayerInput::FaceSouth => Some(Direction::South),
            PlayerInput::FaceWest => Some(Direction::West),
            _ => None,
        }
    }
}
