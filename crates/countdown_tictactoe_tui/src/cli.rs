//! Command-line interface for countdown tic-tac-toe.

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use clap::{Args, Parser, Subcommand, ValueEnum};
use countdown_tictactoe::{ConfigError, Mode};
use std::path::PathBuf;
use tracing::instrument;

/// Countdown Tic-Tac-Toe - two players, one clock, optional AI opponent
#[derive(Parser, Debug)]
#[command(name = "countdown_tictactoe")]
#[command(about = "Tic-tac-toe in the terminal with a per-turn countdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(Settings),

    /// Print the effective configuration as TOML
    Config(Settings),
}

/// Game mode as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans on one keyboard
    Pvp,
    /// Human against the heuristic AI
    Ai,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Ai => Mode::PlayerVsAi,
        }
    }
}

/// Config file location plus per-run overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct Settings {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Mode of the first game
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seconds per turn
    #[arg(long)]
    pub turn_seconds: Option<u32>,

    /// Seed for the AI's tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// AI thinking delay in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Tick period in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Loads the config file and applies command-line overrides.
    #[instrument(skip(self), fields(config = %self.config.display()))]
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load_or_default(&self.config)?;
        if let Some(mode) = self.mode {
            config = config.with_mode(mode.into());
        }
        if let Some(tick_ms) = self.tick_ms {
            config = config.with_tick_ms(tick_ms);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }

        let mut engine = config.engine().clone();
        if let Some(seconds) = self.turn_seconds {
            engine = engine.with_turn_duration(seconds);
        }
        if let Some(seed) = self.seed {
            engine = engine.with_ai_seed(seed);
        }
        if let Some(delay) = self.ai_delay_ms {
            engine = engine.with_ai_thinking_ms(delay);
        }
        Ok(config.with_engine(engine))
    }
}
