use crate::consts;
use crate::events::GameEvent;
use crate::game::{Cell, GameState};
use crate::util::center_rect;
use ratatui::buffer::Buffer;
use ratatui::layout::{Rect, Size};
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::sync::mpsc::Receiver;

/// The terminal rendition of the game: the grid on top, the HUD below it.
///
/// The screen holds its own character-level framebuffer, updated by draining
/// the game's event channel before each frame.  Grid cells are drawn two
/// columns wide so the board looks roughly square in a terminal; HUD text is
/// drawn literally.
#[derive(Debug)]
pub(crate) struct Screen {
    events: Receiver<GameEvent>,
    columns: u16,
    grid_rows: u16,
    rows: u16,
    cells: Vec<ScreenCell>,
    hud: Hud,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ScreenCell {
    glyph: char,
    style: Style,
}

impl Default for ScreenCell {
    fn default() -> ScreenCell {
        ScreenCell {
            glyph: ' ',
            style: Style::new().bg(consts::GRID_BG).fg(consts::GRID_FG),
        }
    }
}

impl Screen {
    pub(crate) fn new(width: i32, height: i32, events: Receiver<GameEvent>) -> Screen {
        let grid_columns = u16::try_from(width).expect("grid width should fit in u16");
        let grid_rows = u16::try_from(height).expect("grid height should fit in u16");
        let multiplier = u16::try_from(consts::WIDTH_MULTIPLIER).expect("width multiplier should fit in u16");
        let columns = grid_columns * multiplier;
        let rows = grid_rows + consts::HUD_HEIGHT;
        let cells = vec![ScreenCell::default(); usize::from(columns) * usize::from(rows)];
        let mut screen = Screen {
            events,
            columns,
            grid_rows,
            rows,
            cells,
            hud: Hud::new(),
        };
        screen.redraw_hud();
        screen
    }

    pub(crate) fn size(&self) -> Size {
        Size::new(self.columns, self.rows)
    }

    /// Drain every pending game event into the framebuffer.  Called once
    /// before each frame is drawn.
    pub(crate) fn apply_updates(&mut self) {
        let mut hud_dirty = false;
        while let Ok(event) = self.events.try_recv() {
            match event {
                GameEvent::CellUpdated {
                    cell,
                    preserve_exact,
                } => self.draw_cell(cell, preserve_exact),
                GameEvent::ScoreUpdated(score) => {
                    self.hud.score = score;
                    hud_dirty = true;
                }
                GameEvent::StateUpdated(state) => {
                    self.hud.state = state;
                    hud_dirty = true;
                }
                GameEvent::TimerUpdated(elapsed) => {
                    self.hud.elapsed_secs = elapsed.as_secs();
                    hud_dirty = true;
                }
            }
        }
        if hud_dirty {
            self.redraw_hud();
        }
    }

    /// Render one game cell into the framebuffer.  Ordinarily the cell's
    /// column is multiplied out to two screen columns, glyph first and a
    /// same-styled space after it; `preserve_exact` skips the multiplication
    /// for literal text.
    fn draw_cell(&mut self, cell: Cell, preserve_exact: bool) {
        let position = cell.position();
        let (Ok(x), Ok(y)) = (u16::try_from(position.x), u16::try_from(position.y)) else {
            return;
        };
        let style = Style::new().bg(cell.bg()).fg(cell.fg());
        if preserve_exact {
            self.set_cell(x, y, cell.glyph(), style);
        } else {
            let multiplier = u16::try_from(consts::WIDTH_MULTIPLIER)
                .expect("width multiplier should fit in u16");
            self.set_cell(x * multiplier, y, cell.glyph(), style);
            for pad in 1..multiplier {
                self.set_cell(x * multiplier + pad, y, ' ', style);
            }
        }
    }

    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: Style) {
        if x < self.columns && y < self.rows {
            let i = usize::from(y) * usize::from(self.columns) + usize::from(x);
            self.cells[i] = ScreenCell { glyph, style };
        }
    }

    fn redraw_hud(&mut self) {
        let style = Style::new().bg(consts::HUD_BG).fg(consts::HUD_FG);
        for y in self.grid_rows..self.rows {
            for x in 0..self.columns {
                self.set_cell(x, y, ' ', style);
            }
        }
        let status = self.hud.status_line();
        let start = usize::from(self.columns).saturating_sub(status.chars().count()) / 2;
        self.set_text(saturating_u16(start), self.grid_rows + 1, &status, style);

        let score = format!("Score: {}", self.hud.score);
        self.set_text(2, self.grid_rows + 3, &score, style);

        let time = format!("Time: {}s", self.hud.elapsed_secs);
        let time_start = usize::from(self.columns).saturating_sub(time.chars().count() + 2);
        self.set_text(saturating_u16(time_start), self.grid_rows + 3, &time, style);
    }

    fn set_text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (i, glyph) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                return;
            };
            self.set_cell(x.saturating_add(offset), y, glyph, style);
        }
    }

    #[cfg(test)]
    fn cell_at(&self, x: u16, y: u16) -> ScreenCell {
        self.cells[usize::from(y) * usize::from(self.columns) + usize::from(x)]
    }

    #[cfg(test)]
    fn row_text(&self, y: u16) -> String {
        (0..self.columns).map(|x| self.cell_at(x, y).glyph).collect()
    }
}

impl Widget for &Screen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen_area = center_rect(area, self.size());
        for y in 0..screen_area.height.min(self.rows) {
            for x in 0..screen_area.width.min(self.columns) {
                let cell = self.cells[usize::from(y) * usize::from(self.columns) + usize::from(x)];
                if let Some(buf_cell) = buf.cell_mut((screen_area.x + x, screen_area.y + y)) {
                    buf_cell.set_char(cell.glyph);
                    buf_cell.set_style(cell.style);
                }
            }
        }
    }
}

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// The textual status area below the grid
#[derive(Clone, Copy, Debug)]
struct Hud {
    score: u32,
    elapsed_secs: u64,
    state: GameState,
}

impl Hud {
    fn new() -> Hud {
        Hud {
            score: 0,
            elapsed_secs: 0,
            state: GameState::Initializing,
        }
    }

    fn status_line(self) -> String {
        match self.state {
            GameState::Initializing => String::from("Get Ready"),
            GameState::Playing => String::from("Playing"),
            GameState::Paused => String::from("Paused"),
            GameState::GameOver => String::from("Game Over - Replay? (r)"),
            GameState::Won => String::from("You Won! - Replay? (r)"),
            GameState::Exiting => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::{channel, Sender};
    use std::time::Duration;

    fn screen(width: i32, height: i32) -> (Screen, Sender<GameEvent>) {
        let (tx, rx) = channel();
        (Screen::new(width, height, rx), tx)
    }

    #[test]
    fn screen_dimensions_include_the_hud() {
        let (screen, _tx) = screen(15, 15);
        assert_eq!(screen.size(), Size::new(30, 20));
    }

    #[test]
    fn grid_cells_are_two_columns_wide() {
        let (mut screen, tx) = screen(5, 5);
        let cell = Cell::new(
            Position::new(2, 1),
            consts::PLAYER_BG,
            consts::PLAYER_FG,
            '↑',
        );
        tx.send(GameEvent::CellUpdated {
            cell,
            preserve_exact: false,
        })
        .unwrap();
        screen.apply_updates();

        let style = Style::new().bg(consts::PLAYER_BG).fg(consts::PLAYER_FG);
        assert_eq!(screen.cell_at(4, 1), ScreenCell { glyph: '↑', style });
        assert_eq!(screen.cell_at(5, 1), ScreenCell { glyph: ' ', style });
        assert_eq!(screen.cell_at(6, 1), ScreenCell::default());
    }

    #[test]
    fn exact_cells_are_not_multiplied() {
        let (mut screen, tx) = screen(5, 5);
        let cell = Cell::new(Position::new(3, 2), consts::HUD_BG, consts::HUD_FG, 'S');
        tx.send(GameEvent::CellUpdated {
            cell,
            preserve_exact: true,
        })
        .unwrap();
        screen.apply_updates();

        let style = Style::new().bg(consts::HUD_BG).fg(consts::HUD_FG);
        assert_eq!(screen.cell_at(3, 2), ScreenCell { glyph: 'S', style });
        assert_eq!(screen.cell_at(4, 2), ScreenCell::default());
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let (mut screen, tx) = screen(5, 5);
        for position in [Position::new(-1, 2), Position::new(2, -1), Position::new(9, 9)] {
            tx.send(GameEvent::CellUpdated {
                cell: Cell::new(position, consts::PLAYER_BG, consts::PLAYER_FG, '↑'),
                preserve_exact: false,
            })
            .unwrap();
        }
        screen.apply_updates();
        for y in 0..5 {
            for x in 0..10 {
                assert_eq!(screen.cell_at(x, y), ScreenCell::default());
            }
        }
    }

    #[test]
    fn hud_shows_score_and_time() {
        let (mut screen, tx) = screen(15, 15);
        tx.send(GameEvent::ScoreUpdated(12)).unwrap();
        tx.send(GameEvent::TimerUpdated(Duration::from_secs(34)))
            .unwrap();
        screen.apply_updates();

        let row = screen.row_text(18);
        assert_eq!(&row[2..11], "Score: 12");
        assert_eq!(&row[19..28], "Time: 34s");
    }

    #[test]
    fn hud_shows_the_replay_hint_after_game_over() {
        let (mut screen, tx) = screen(15, 15);
        tx.send(GameEvent::StateUpdated(GameState::Playing)).unwrap();
        screen.apply_updates();
        assert!(screen.row_text(16).contains("Playing"));
        assert!(!screen.row_text(16).contains("Replay"));

        tx.send(GameEvent::StateUpdated(GameState::GameOver)).unwrap();
        screen.apply_updates();
        assert!(screen.row_text(16).contains("Game Over - Replay? (r)"));
    }

    #[test]
    fn status_line_is_centered() {
        let (mut screen, tx) = screen(15, 15);
        tx.send(GameEvent::StateUpdated(GameState::Paused)).unwrap();
        screen.apply_updates();
        // "Paused" is 6 characters wide on a 30-column screen
        assert_eq!(&screen.row_text(16)[12..18], "Paused");
    }

    #[test]
    fn hud_survives_grid_updates() {
        let (mut screen, tx) = screen(15, 15);
        tx.send(GameEvent::ScoreUpdated(3)).unwrap();
        screen.apply_updates();
        tx.send(GameEvent::CellUpdated {
            cell: Cell::new(
                Position::new(0, 0),
                consts::PLAYER_BG,
                consts::PLAYER_FG,
                '↑',
            ),
            preserve_exact: false,
        })
        .unwrap();
        screen.apply_updates();
        assert!(screen.row_text(18).contains("Score: 3"));
    }

    #[test]
    fn render_centers_the_screen_in_the_buffer() {
        let (mut screen, tx) = screen(5, 5);
        tx.send(GameEvent::CellUpdated {
            cell: Cell::new(
                Position::new(0, 0),
                consts::PLAYER_BG,
                consts::PLAYER_FG,
                '→',
            ),
            preserve_exact: false,
        })
        .unwrap();
        screen.apply_updates();

        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 14));
        (&screen).render(buf.area, &mut buf);
        // 10×10 screen centered in 20×14 starts at (5, 2)
        let cell = &buf[(5, 2)];
        assert_eq!(cell.symbol(), "→");
    }
}
