use crate::display::Screen;
use crate::events::EventSink;
use crate::game::{Game, Outcome};
use crate::settings::Settings;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::sync::mpsc::channel;

/// Ties the game core to the terminal: the core announces changes on a
/// channel, the screen drains them, and the loop alternates drawing with
/// input processing.
#[derive(Debug)]
pub(crate) struct App {
    game: Game,
    screen: Screen,
}

impl App {
    pub(crate) fn new(settings: Settings) -> App {
        let (tx, rx) = channel();
        let screen = Screen::new(settings.width, settings.height, rx);
        let game = Game::new(settings, EventSink::new(tx));
        App { game, screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            self.screen.apply_updates();
            terminal.draw(|frame| frame.render_widget(&self.screen, frame.area()))?;
            match self.game.process_input()? {
                Outcome::Continue => (),
                Outcome::Quit => return Ok(()),
            }
        }
    }
}
