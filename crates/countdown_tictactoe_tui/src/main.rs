//! Countdown Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

mod tui;

use anyhow::Result;
use clap::Parser;
use countdown_tictactoe_tui::{Cli, CliCommand};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        CliCommand::Play(settings) => tui::run_tui(settings.resolve()?).await,
        CliCommand::Config(settings) => {
            println!("{}", settings.resolve()?.to_toml()?);
            Ok(())
        }
    }
}
