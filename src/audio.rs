use crate::consts;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Fire-and-forget sound effects, played by spawning the platform's
/// command-line audio player.  Playback failures (no player installed, no
/// sound hardware) are logged and otherwise ignored; audio must never take
/// the game down.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AudioManager {
    enabled: bool,
}

impl AudioManager {
    pub(crate) fn new(enabled: bool) -> AudioManager {
        AudioManager { enabled }
    }

    pub(crate) fn play_player_moved(&self) {
        self.play("move.wav");
    }

    pub(crate) fn play_enemy_destroyed(&self) {
        self.play("destroy.wav");
    }

    pub(crate) fn play_player_destroyed(&self) {
        self.play("game-over.wav");
    }

    fn play(&self, sound: &str) {
        if !self.enabled {
            return;
        }
        let path = Path::new(consts::AUDIO_DIR).join(sound);
        let player = if cfg!(target_os = "macos") {
            "afplay"
        } else if cfg!(unix) {
            "aplay"
        } else {
            return;
        };
        let r = Command::new(player)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Err(e) = r {
            debug!(?path, error = %e, "failed to play sound");
        }
    }
}
