//! Host side of countdown tic-tac-toe: configuration, command line and the
//! serialized event driver used by the terminal UI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod driver;

pub use cli::{Cli, Command as CliCommand, ModeArg, Settings};
pub use config::{AppConfig, DEFAULT_CONFIG_PATH};
pub use driver::{Command, DriverEvent, DriverHandle, GameDriver, spawn_ticker};
