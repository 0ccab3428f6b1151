//! Application configuration loaded from TOML.

use countdown_tictactoe::{ConfigError, EngineConfig, Mode};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "countdown_tictactoe.toml";

/// Everything the host needs to run a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Mode of the first game.
    mode: Mode,

    /// Tick period in milliseconds (one countdown unit).
    tick_ms: u64,

    /// File receiving tracing output while the TUI owns the terminal.
    log_file: PathBuf,

    /// Engine tunables.
    engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::PlayerVsPlayer,
            tick_ms: 1000,
            log_file: PathBuf::from("countdown_tictactoe.log"),
            engine: EngineConfig::default().with_ai_thinking_ms(600),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, tick_ms = config.tick_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Tick period as a [`Duration`].
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
