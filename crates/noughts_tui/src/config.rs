//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_core::UndoPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Shortcut letters for the session-level actions.
///
/// Digits 1-9 (cells) and `h`/`j`/`k`/`l` (cursor) are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Starts a new round.
    #[serde(default = "default_new_round_key")]
    new_round: char,

    /// Zeroes the scores.
    #[serde(default = "default_reset_scores_key")]
    reset_scores: char,

    /// Takes back a move.
    #[serde(default = "default_undo_key")]
    undo: char,

    /// Leaves the game.
    #[serde(default = "default_quit_key")]
    quit: char,
}

fn default_new_round_key() -> char {
    'r'
}

fn default_reset_scores_key() -> char {
    's'
}

fn default_undo_key() -> char {
    'u'
}

fn default_quit_key() -> char {
    'q'
}

const RESERVED_KEYS: [char; 13] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', 'h', 'j', 'k', 'l'];

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            new_round: default_new_round_key(),
            reset_scores: default_reset_scores_key(),
            undo: default_undo_key(),
            quit: default_quit_key(),
        }
    }
}

impl KeyBindings {
    /// Checks bindings are printable, unreserved and distinct (ignoring case).
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = [
            ("new_round", self.new_round),
            ("reset_scores", self.reset_scores),
            ("undo", self.undo),
            ("quit", self.quit),
        ];

        for (i, (name, key)) in keys.iter().enumerate() {
            let key = key.to_ascii_lowercase();
            if !key.is_ascii_graphic() {
                return Err(ConfigError::new(format!(
                    "Key for {} must be a printable ASCII character, got {:?}",
                    name, key
                )));
            }
            if RESERVED_KEYS.contains(&key) {
                return Err(ConfigError::new(format!(
                    "Key {:?} for {} is reserved for board navigation",
                    key, name
                )));
            }
            if let Some((other, _)) = keys[..i]
                .iter()
                .find(|(_, k)| k.to_ascii_lowercase() == key)
            {
                return Err(ConfigError::new(format!(
                    "Key {:?} is bound to both {} and {}",
                    key, other, name
                )));
            }
        }
        Ok(())
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Directory holding the persisted scores.
    #[serde(default = "default_scores_dir")]
    scores_dir: PathBuf,

    /// File receiving log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Undo behaviour.
    #[serde(default)]
    undo: UndoPolicy,

    /// Shortcut letters.
    #[serde(default)]
    keys: KeyBindings,
}

fn default_scores_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scores_dir: default_scores_dir(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            undo: UndoPolicy::default(),
            keys: KeyBindings::default(),
        }
    }
}

impl AppConfig {
    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.keys.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(scores_dir = %config.scores_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(*config.keys().new_round(), 'r');
        assert_eq!(config.undo(), &UndoPolicy::History);
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml(
            r#"
            scores_dir = "/tmp/noughts"
            undo = "highest-index"

            [keys]
            undo = "z"
            "#,
        )
        .unwrap();
        assert_eq!(config.scores_dir(), &PathBuf::from("/tmp/noughts"));
        assert_eq!(config.undo(), &UndoPolicy::HighestIndex);
        assert_eq!(*config.keys().undo(), 'z');
        assert_eq!(*config.keys().quit(), 'q');
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let err = AppConfig::from_toml("[keys]\nundo = \"R\"\n").unwrap_err();
        assert!(err.message.contains("bound to both"), "{}", err);
    }

    #[test]
    fn test_reserved_keys_rejected() {
        assert!(AppConfig::from_toml("[keys]\nquit = \"5\"\n").is_err());
        assert!(AppConfig::from_toml("[keys]\nnew_round = \"j\"\n").is_err());
    }

    #[test]
    fn test_unknown_undo_policy_rejected() {
        assert!(AppConfig::from_toml("undo = \"forever\"\n").is_err());
    }

    #[test]
    fn test_setters_override() {
        let config = AppConfig::default().with_scores_dir(PathBuf::from("elsewhere"));
        assert_eq!(config.scores_dir(), &PathBuf::from("elsewhere"));
    }
}
