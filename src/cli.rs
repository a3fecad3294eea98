use crate::config::{Config, ConfigError};
use crate::settings::{Settings, SettingsError, WallCollisionBehavior};
use lexopt::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

static USAGE: &str = concat!(
    "Usage: slither [options]\n",
    "\n",
    "A snake game for the terminal\n",
    "\n",
    "Options:\n",
    "  -W, --width <INT>             Width of the game grid in cells [default: 15]\n",
    "  -H, --height <INT>            Height of the game grid in cells [default: 15]\n",
    "  -t, --ticks-per-second <INT>  Initial speed of the snake [default: 8]\n",
    "  -i, --increase-speed          Speed up each time an enemy is destroyed\n",
    "  -w, --walls <BEHAVIOR>        What hitting a wall does: game-over, rebound,\n",
    "                                or portal [default: game-over]\n",
    "      --no-audio                Disable sound effects\n",
    "      --debug                   Write a debug log to slither-debug.log\n",
    "  -c, --config <FILE>           Read configuration from the given file\n",
    "  -h, --help                    Print this help text and exit\n",
    "  -V, --version                 Print version information and exit\n",
);

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run {
        config_path: Option<PathBuf>,
        overrides: Overrides,
    },
    Help,
    Version,
}

impl Command {
    pub(crate) fn from_env() -> Result<Command, CliError> {
        Command::from_parser(lexopt::Parser::from_env())
    }

    fn from_parser(mut parser: lexopt::Parser) -> Result<Command, CliError> {
        let mut config_path = None;
        let mut overrides = Overrides::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('W') | Long("width") => {
                    overrides.width = Some(parser.value()?.parse()?);
                }
                Short('H') | Long("height") => {
                    overrides.height = Some(parser.value()?.parse()?);
                }
                Short('t') | Long("ticks-per-second") => {
                    overrides.initial_ticks_per_second = Some(parser.value()?.parse()?);
                }
                Short('i') | Long("increase-speed") => {
                    overrides.increase_speed_on_enemy_destroyed = Some(true);
                }
                Short('w') | Long("walls") => {
                    overrides.wall_collision_behavior = Some(parser.value()?.parse()?);
                }
                Long("no-audio") => overrides.audio_enabled = Some(false),
                Long("debug") => overrides.debug_logging = Some(true),
                Short('c') | Long("config") => {
                    config_path = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => return Ok(Command::Help),
                Short('V') | Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected().into()),
            }
        }
        Ok(Command::Run {
            config_path,
            overrides,
        })
    }

    pub(crate) fn usage() -> &'static str {
        USAGE
    }
}

/// Settings given on the command line, which take precedence over the
/// configuration file
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Overrides {
    width: Option<i32>,
    height: Option<i32>,
    initial_ticks_per_second: Option<u32>,
    increase_speed_on_enemy_destroyed: Option<bool>,
    wall_collision_behavior: Option<WallCollisionBehavior>,
    audio_enabled: Option<bool>,
    debug_logging: Option<bool>,
}

impl Overrides {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(tps) = self.initial_ticks_per_second {
            settings.initial_ticks_per_second = tps;
        }
        if let Some(increase) = self.increase_speed_on_enemy_destroyed {
            settings.increase_speed_on_enemy_destroyed = increase;
        }
        if let Some(behavior) = self.wall_collision_behavior {
            settings.wall_collision_behavior = behavior;
        }
        if let Some(audio) = self.audio_enabled {
            settings.audio_enabled = audio;
        }
        if let Some(debug) = self.debug_logging {
            settings.debug_logging = debug;
        }
        settings
    }
}

/// Resolve the final settings for a [`Command::Run`]: the configuration file
/// (the given one, or the default if it exists) overlaid with the command
/// line.
pub(crate) fn resolve_settings(
    config_path: Option<&std::path::Path>,
    overrides: Overrides,
) -> Result<Settings, CliError> {
    let config = match config_path {
        Some(path) => Config::load(path, false)?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    let settings = overrides.apply(config.settings);
    settings.validate()?;
    Ok(settings)
}

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Parse(#[from] lexopt::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
