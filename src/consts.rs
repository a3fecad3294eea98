//! Assorted constants & hard-coded configuration
use ratatui::style::Color;

/// Number of segments the snake starts each round with
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 5;

/// How many times each grid cell is repeated along the X axis when drawn.
/// Terminal cells are roughly twice as tall as they are wide, so doubling
/// horizontally keeps the board visually square.
pub(crate) const WIDTH_MULTIPLIER: i32 = 2;

/// Height in terminal rows of the HUD strip below the grid.  HUD cells are
/// never multiplied.
pub(crate) const HUD_HEIGHT: u16 = 5;

/// Upper bound on the snake's speed, both for configured values and for
/// growth under the speed-up rule.  Past roughly this rate the inter-tick
/// delay rounds toward zero and input polling never gets a chance to run.
pub(crate) const MAX_TICKS_PER_SECOND: u32 = 60;

/// Glyph for the snake when facing north/up
pub(crate) const GLYPH_NORTH: char = '↑';

/// Glyph for the snake when facing east/right
pub(crate) const GLYPH_EAST: char = '→';

/// Glyph for the snake when facing south/down
pub(crate) const GLYPH_SOUTH: char = '↓';

/// Glyph for the snake when facing west/left
pub(crate) const GLYPH_WEST: char = '←';

/// Glyph for the enemy
pub(crate) const ENEMY_GLYPH: char = '#';

/// Glyph for empty grid cells
pub(crate) const GRID_GLYPH: char = ' ';

/// Background color of empty grid cells
pub(crate) const GRID_BG: Color = Color::DarkGray;

/// Foreground color of empty grid cells
pub(crate) const GRID_FG: Color = Color::DarkGray;

/// Background color of the snake's body; the head swaps background and
/// foreground so it stands out.
pub(crate) const PLAYER_BG: Color = Color::White;

/// Foreground color of the snake's body
pub(crate) const PLAYER_FG: Color = Color::Red;

/// Background color of the enemy cell
pub(crate) const ENEMY_BG: Color = Color::Cyan;

/// Foreground color of the enemy cell
pub(crate) const ENEMY_FG: Color = Color::Blue;

/// Background color of the HUD strip
pub(crate) const HUD_BG: Color = Color::Gray;

/// Foreground color of HUD text
pub(crate) const HUD_FG: Color = Color::Black;

/// File that debug logging is written to when enabled
pub(crate) const LOG_FILE: &str = "slither-debug.log";

/// Directory that sound effect files are looked up in
pub(crate) const AUDIO_DIR: &str = "assets";
