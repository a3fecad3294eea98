use crate::settings::Settings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub(crate) struct Config {
    /// Default game settings when the command line does not override them
    #[serde(default)]
    pub(crate) settings: Settings,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("slither").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WallCollisionBehavior;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            concat!(
                "[settings]\n",
                "width = 30\n",
                "height = 20\n",
                "initial-ticks-per-second = 12\n",
                "increase-speed-on-enemy-destroyed = true\n",
                "wall-collision-behavior = \"rebound\"\n",
                "audio-enabled = false\n",
                "debug-logging = true\n",
            )
        )
        .unwrap();
        file.flush().unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(
            config.settings,
            Settings {
                width: 30,
                height: 20,
                initial_ticks_per_second: 12,
                increase_speed_on_enemy_destroyed: true,
                wall_collision_behavior: WallCollisionBehavior::Rebound,
                audio_enabled: false,
                debug_logging: true,
            }
        );
    }

    #[test]
    fn load_partial_config_fills_in_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\nwidth = 25").unwrap();
        file.flush().unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(
            config.settings,
            Settings {
                width: 25,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn load_empty_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        file.flush().unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_not_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.toml");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\nwidth = \"wide\"").unwrap();
        file.flush().unwrap();
        let r = Config::load(file.path(), false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }
}
