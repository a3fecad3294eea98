use crate::events::EventSink;
use std::time::{Duration, Instant};

/// Wall-clock play timer for the HUD.  It only measures time spent in the
/// `Playing` state and reports whole-second changes; it never participates in
/// game-logic mutation, and all writes happen on the tick thread.
#[derive(Clone, Debug)]
pub(super) struct PlayTimer {
    accumulated: Duration,
    started_at: Option<Instant>,
    reported_secs: u64,
    events: EventSink,
}

impl PlayTimer {
    pub(super) fn new(events: EventSink) -> PlayTimer {
        PlayTimer {
            accumulated: Duration::ZERO,
            started_at: None,
            reported_secs: 0,
            events,
        }
    }

    pub(super) fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub(super) fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    pub(super) fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
        self.reported_secs = 0;
        self.events.timer_updated(Duration::ZERO);
    }

    pub(super) fn elapsed(&self) -> Duration {
        let running = self.started_at.map_or(Duration::ZERO, |t| t.elapsed());
        self.accumulated + running
    }

    /// Announce the elapsed time if the displayed value (whole seconds) has
    /// changed since the last announcement.
    pub(super) fn maybe_report(&mut self) {
        let elapsed = self.elapsed();
        if elapsed.as_secs() != self.reported_secs {
            self.reported_secs = elapsed.as_secs();
            self.events.timer_updated(elapsed);
        }
    }
}
