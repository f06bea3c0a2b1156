//! Configuration loading for the near doubles game.
//!
//! ```toml
//! [game]
//! focus_set = "advanced"   # normal | advanced
//! mode = "fix"             # mixed | build | fix
//! start_equation = "6+7"
//! ```
//!
//! The file lives at `~/.neardoubles/config.toml` unless `NEARDOUBLES_CONFIG`
//! points elsewhere. Raw structs here carry `Option`s and strings; they are
//! resolved into [`GameSettings`] before leaving this crate.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use neardouble_types::{FocusSet, GameSettings, Mode, ValidationError, parse_equation_text};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "NEARDOUBLES_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearDoublesConfig {
    pub game: Option<GameConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Difficulty tier for random equations. Default: normal.
    #[serde(default)]
    pub focus_set: FocusSet,
    /// Round type policy. Default: mixed.
    #[serde(default)]
    pub mode: Mode,
    /// Equation for the first round, in the same syntax the learner types.
    pub start_equation: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid start_equation {raw:?} in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        raw: String,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

impl NearDoublesConfig {
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Resolve into validated settings.
    ///
    /// `path` is only used to label errors.
    pub fn resolve(self, path: &Path) -> Result<GameSettings, ConfigError> {
        let Some(game) = self.game else {
            return Ok(GameSettings::default());
        };

        let settings = GameSettings::new(game.focus_set, game.mode);
        match game.start_equation {
            Some(raw) => match parse_equation_text(&raw) {
                Ok(equation) => Ok(settings.with_start_equation(equation)),
                Err(source) => Err(ConfigError::Invalid {
                    path: path.to_path_buf(),
                    raw,
                    source,
                }),
            },
            None => Ok(settings),
        }
    }
}

/// Load and resolve settings from the default location.
///
/// A missing file yields [`GameSettings::default`].
pub fn load_settings() -> Result<GameSettings, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_settings_from(&path),
        Some(path) => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(GameSettings::default())
        }
        None => Ok(GameSettings::default()),
    }
}

pub fn load_settings_from(path: &Path) -> Result<GameSettings, ConfigError> {
    let settings = NearDoublesConfig::load_from(path)?.resolve(path)?;
    tracing::debug!(
        path = %path.display(),
        focus_set = settings.focus_set().as_str(),
        mode = settings.mode().as_str(),
        "Loaded game settings"
    );
    Ok(settings)
}

/// `$NEARDOUBLES_CONFIG` when set and non-empty, else
/// `~/.neardoubles/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(raw) = env::var_os(CONFIG_PATH_ENV)
        && !raw.is_empty()
    {
        return Some(PathBuf::from(raw));
    }
    dirs::home_dir().map(|home| home.join(".neardoubles").join("config.toml"))
}
