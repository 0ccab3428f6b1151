//! Terminal UI for countdown tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::App;
use countdown_tictactoe_tui::{AppConfig, DriverEvent, DriverHandle, GameDriver, spawn_ticker};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Run the TUI until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(mode = %config.mode(), "Starting Countdown Tic-Tac-Toe TUI");

    let (driver, mut events) = GameDriver::spawn(config.engine(), *config.mode())?;
    let ticker = spawn_ticker(driver.sender(), config.tick_period());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.engine().turn_duration());
    let res = run_app(&mut terminal, &mut app, &driver, &mut events).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    ticker.abort();
    driver.shutdown()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    driver: &DriverHandle,
    events: &mut mpsc::UnboundedReceiver<DriverEvent>,
) -> Result<()> {
    loop {
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(input) = input::map_key(key.code, app.cursor()) {
                        if let Some(command) = app.handle_input(input) {
                            driver.send(command)?;
                        }
                    }
                }
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
