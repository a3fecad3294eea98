use crate::consts;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the grid treats a snake head that tries to leave the board
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum WallCollisionBehavior {
    /// Hitting a wall ends the round
    #[default]
    GameOver,
    /// Hitting a wall reverses the snake in place
    Rebound,
    /// The snake wraps around to the opposite edge
    Portal,
}

impl fmt::Display for WallCollisionBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WallCollisionBehavior::GameOver => "game-over",
            WallCollisionBehavior::Rebound => "rebound",
            WallCollisionBehavior::Portal => "portal",
        })
    }
}

impl FromStr for WallCollisionBehavior {
    type Err = ParseWallCollisionBehaviorError;

    fn from_str(s: &str) -> Result<WallCollisionBehavior, ParseWallCollisionBehaviorError> {
        match s.to_ascii_lowercase().as_str() {
            "game-over" | "gameover" => Ok(WallCollisionBehavior::GameOver),
            "rebound" => Ok(WallCollisionBehavior::Rebound),
            "portal" => Ok(WallCollisionBehavior::Portal),
            _ => Err(ParseWallCollisionBehaviorError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid wall collision behavior {0:?}; expected \"game-over\", \"rebound\", or \"portal\"")]
pub(crate) struct ParseWallCollisionBehaviorError(String);

/// All the knobs a player can turn, whether from the config file or the
/// command line
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Settings {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) initial_ticks_per_second: u32,
    pub(crate) increase_speed_on_enemy_destroyed: bool,
    pub(crate) wall_collision_behavior: WallCollisionBehavior,
    pub(crate) audio_enabled: bool,
    pub(crate) debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: 15,
            height: 15,
            initial_ticks_per_second: 8,
            increase_speed_on_enemy_destroyed: false,
            wall_collision_behavior: WallCollisionBehavior::default(),
            audio_enabled: true,
            debug_logging: false,
        }
    }
}

impl Settings {
    pub(crate) fn validate(&self) -> Result<(), SettingsError> {
        if !(5..=100).contains(&self.width) {
            return Err(SettingsError::Width(self.width));
        }
        // The snake starts at the vertical center and extends downward, so
        // the lower half of the grid must hold the whole initial body.
        let snake_length =
            i32::try_from(consts::INITIAL_SNAKE_LENGTH).expect("initial snake length should fit in i32");
        if self.height / 2 + snake_length > self.height || self.height > 50 {
            return Err(SettingsError::Height(self.height));
        }
        if !(1..=consts::MAX_TICKS_PER_SECOND).contains(&self.initial_ticks_per_second) {
            return Err(SettingsError::TicksPerSecond(self.initial_ticks_per_second));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error("grid width {0} is out of range; expected 5 to 100")]
    Width(i32),
    #[error("grid height {0} is out of range; expected 9 to 50")]
    Height(i32),
    #[error("ticks per second {0} is out of range; expected 1 to 60")]
    TicksPerSecond(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn default_settings_validate() {
        let settings = Settings::default();
        assert_eq!(settings.width, 15);
        assert_eq!(settings.height, 15);
        assert_eq!(settings.initial_ticks_per_second, 8);
        assert!(!settings.increase_speed_on_enemy_destroyed);
        assert_eq!(
            settings.wall_collision_behavior,
            WallCollisionBehavior::GameOver
        );
        assert!(settings.audio_enabled);
        assert!(!settings.debug_logging);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[rstest]
    #[case("game-over", WallCollisionBehavior::GameOver)]
    #[case("GameOver", WallCollisionBehavior::GameOver)]
    #[case("rebound", WallCollisionBehavior::Rebound)]
    #[case("Portal", WallCollisionBehavior::Portal)]
    fn parse_wall_behavior(#[case] s: &str, #[case] behavior: WallCollisionBehavior) {
        assert_eq!(s.parse(), Ok(behavior));
        assert_eq!(behavior.to_string().parse(), Ok(behavior));
    }

    #[test]
    fn parse_wall_behavior_rejects_unknown_values() {
        assert_eq!(
            "bounce".parse::<WallCollisionBehavior>(),
            Err(ParseWallCollisionBehaviorError("bounce".into()))
        );
    }

    #[rstest]
    #[case(Settings {width: 4, ..Settings::default()}, SettingsError::Width(4))]
    #[case(Settings {width: 101, ..Settings::default()}, SettingsError::Width(101))]
    #[case(Settings {height: 8, ..Settings::default()}, SettingsError::Height(8))]
    #[case(Settings {height: 51, ..Settings::default()}, SettingsError::Height(51))]
    #[case(
        Settings {initial_ticks_per_second: 0, ..Settings::default()},
        SettingsError::TicksPerSecond(0)
    )]
    #[case(
        Settings {initial_ticks_per_second: 61, ..Settings::default()},
        SettingsError::TicksPerSecond(61)
    )]
    fn out_of_range_settings(#[case] settings: Settings, #[case] err: SettingsError) {
        assert_eq!(settings.validate(), Err(err));
    }

    #[rstest]
    #[case(Settings {width: 5, ..Settings::default()})]
    #[case(Settings {width: 100, ..Settings::default()})]
    #[case(Settings {height: 9, ..Settings::default()})]
    #[case(Settings {height: 50, ..Settings::default()})]
    #[case(Settings {initial_ticks_per_second: 1, ..Settings::default()})]
    #[case(Settings {initial_ticks_per_second: 60, ..Settings::default()})]
    fn boundary_settings_validate(#[case] settings: Settings) {
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn deserialize_kebab_case_with_defaults() {
        let settings: Settings = toml::from_str(concat!(
            "height = 20\n",
            "wall-collision-behavior = \"portal\"\n",
            "increase-speed-on-enemy-destroyed = true\n",
        ))
        .unwrap();
        assert_eq!(
            settings,
            Settings {
                height: 20,
                wall_collision_behavior: WallCollisionBehavior::Portal,
                increase_speed_on_enemy_destroyed: true,
                ..Settings::default()
            }
        );
    }
}
