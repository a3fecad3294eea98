//! Outbound notifications from the game core to the presentation layer.
//!
//! The core never touches the terminal; it announces every observable change
//! on a channel and the [`Screen`](crate::display::Screen) drains the channel
//! before each frame.  Emission is synchronous and fire-and-forget: a core
//! with no listener attached still plays correctly.

use crate::game::{Cell, GameState};
use std::sync::mpsc::Sender;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    /// A cell's appearance changed.  `preserve_exact` means the consumer must
    /// draw the glyph literally (HUD text) instead of applying the display's
    /// cell multiplication.
    CellUpdated { cell: Cell, preserve_exact: bool },
    ScoreUpdated(u32),
    StateUpdated(GameState),
    TimerUpdated(Duration),
}

/// A handle the core emits events through.  A disconnected sink (no channel,
/// or a dropped receiver) swallows every event.
#[derive(Clone, Debug, Default)]
pub(crate) struct EventSink {
    tx: Option<Sender<GameEvent>>,
}

impl EventSink {
    pub(crate) fn new(tx: Sender<GameEvent>) -> EventSink {
        EventSink { tx: Some(tx) }
    }

    /// A sink that discards everything; used when no display is attached
    pub(crate) fn disconnected() -> EventSink {
        EventSink::default()
    }

    pub(crate) fn cell_updated(&self, cell: Cell, preserve_exact: bool) {
        self.send(GameEvent::CellUpdated {
            cell,
            preserve_exact,
        });
    }

    pub(crate) fn score_updated(&self, score: u32) {
        self.send(GameEvent::ScoreUpdated(score));
    }

    pub(crate) fn state_updated(&self, state: GameState) {
        self.send(GameEvent::StateUpdated(state));
    }

    pub(crate) fn timer_updated(&self, elapsed: Duration) {
        self.send(GameEvent::TimerUpdated(elapsed));
    }

    fn send(&self, event: GameEvent) {
        if let Some(ref tx) = self.tx {
            let _ = tx.send(event);
        }
    }
}
