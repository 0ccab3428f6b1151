//! Serialized event driver.
//!
//! The driver thread is the single owner of the [`GameEngine`]. Human
//! input, AI turns and clock ticks all arrive as [`Command`]s on one
//! channel and run to completion one at a time, so a tick can never race
//! a move or an undo.
//!
//! The AI's thinking delay is waited out on the tokio runtime, not on the
//! driver thread. Ticks that arrive meanwhile count down the AI's clock.

use anyhow::{Context, Result};
use countdown_tictactoe::{
    EngineConfig, GameEngine, GameView, Mode, MoveError, NoPause, Notification, Notifier,
    Player, UndoError,
};
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Commands accepted by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Human move for the player to move.
    Submit {
        /// Grid row.
        row: usize,
        /// Grid column.
        col: usize,
    },
    /// Take back the last snapshot.
    Undo,
    /// Start a new game.
    Reset(Mode),
    /// One countdown unit elapsed.
    Tick,
    /// The thinking delay of AI turn `turn` has elapsed.
    ///
    /// Queued by the driver itself; a stale turn number is ignored.
    AiMove {
        /// Sequence number of the AI turn.
        turn: u64,
    },
    /// Stop the driver thread.
    Shutdown,
}

/// Messages sent from the driver to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    /// Engine state after a command.
    View(GameView),
    /// A notifier callback fired.
    Notice(Notification),
}

/// Forwards notifier callbacks onto the UI event channel.
struct ChannelNotifier {
    events: mpsc::UnboundedSender<DriverEvent>,
}

impl ChannelNotifier {
    fn forward(&self, notification: Notification) {
        if self.events.send(DriverEvent::Notice(notification)).is_err() {
            debug!(%notification, "UI gone, dropping notification");
        }
    }
}

impl Notifier for ChannelNotifier {
    fn on_win(&mut self, winner: Player) {
        self.forward(Notification::Win(winner));
    }

    fn on_draw(&mut self) {
        self.forward(Notification::Draw);
    }

    fn on_timeout(&mut self, loser: Player) {
        self.forward(Notification::Timeout(loser));
    }

    fn on_move_rejected(&mut self, reason: MoveError) {
        self.forward(Notification::MoveRejected(reason));
    }

    fn on_undo_rejected(&mut self, reason: UndoError) {
        self.forward(Notification::UndoRejected(reason));
    }
}

/// Sending side of a running driver.
#[derive(Debug)]
pub struct DriverHandle {
    commands: mpsc::UnboundedSender<Command>,
    thread: Option<JoinHandle<()>>,
}

impl DriverHandle {
    /// Queues a command.
    pub fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .context("Game driver has stopped")
    }

    /// A clone of the command sender, e.g. for a tick source.
    pub fn sender(&self) -> mpsc::UnboundedSender<Command> {
        self.commands.clone()
    }

    /// Stops the driver and waits for its thread to exit.
    #[instrument(skip(self))]
    pub fn shutdown(mut self) -> Result<()> {
        // A closed channel means the thread is already on its way out.
        let _ = self.commands.send(Command::Shutdown);
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| anyhow::anyhow!("Game driver thread panicked"))?;
        }
        info!("Game driver stopped");
        Ok(())
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        // The driver holds its own sender for AI turns, so closing ours is
        // not enough to end its receive loop.
        let _ = self.commands.send(Command::Shutdown);
    }
}

/// Owner of the engine and consumer of the command queue.
pub struct GameDriver {
    engine: GameEngine,
    commands: mpsc::UnboundedReceiver<Command>,
    requeue: mpsc::UnboundedSender<Command>,
    events: mpsc::UnboundedSender<DriverEvent>,
    runtime: Handle,
    thinking: Duration,
    ai_turns: u64,
    thinking_turn: Option<u64>,
}

impl GameDriver {
    /// Starts a driver thread running a fresh game in `mode`.
    ///
    /// Returns the command handle and the UI event stream. The first
    /// event is always the initial [`DriverEvent::View`].
    ///
    /// Must be called from within a tokio runtime, which times the AI's
    /// thinking delay.
    #[instrument(skip(config))]
    pub fn spawn(
        config: &EngineConfig,
        mode: Mode,
    ) -> Result<(DriverHandle, mpsc::UnboundedReceiver<DriverEvent>)> {
        let runtime = Handle::try_current().context("Game driver needs a tokio runtime")?;
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut engine = GameEngine::new(
            config,
            ChannelNotifier {
                events: event_tx.clone(),
            },
        )
        .with_pause(NoPause);
        engine.reset(mode);

        let driver = Self {
            engine,
            commands: command_rx,
            requeue: command_tx.clone(),
            events: event_tx,
            runtime,
            thinking: config.ai_thinking_delay(),
            ai_turns: 0,
            thinking_turn: None,
        };

        let thread = std::thread::Builder::new()
            .name("game-driver".to_string())
            .spawn(move || driver.run())
            .context("Failed to spawn game driver thread")?;

        info!(%mode, "Game driver started");
        Ok((
            DriverHandle {
                commands: command_tx,
                thread: Some(thread),
            },
            event_rx,
        ))
    }

    fn run(mut self) {
        self.publish();
        while let Some(command) = self.commands.blocking_recv() {
            if command == Command::Shutdown {
                debug!("Shutdown requested");
                break;
            }
            self.handle(command);
            self.schedule_ai();
            self.publish();
        }
    }

    #[instrument(skip(self))]
    fn handle(&mut self, command: Command) {
        match command {
            Command::Submit { row, col } => {
                // Rejections already reached the UI through the notifier.
                let _ = self.engine.submit_move(row, col);
            }
            Command::Undo => {
                let _ = self.engine.undo();
            }
            Command::Reset(mode) => {
                self.thinking_turn = None;
                self.engine.reset(mode);
            }
            Command::Tick => {
                self.engine.tick();
            }
            Command::AiMove { turn } => {
                if self.thinking_turn != Some(turn) {
                    debug!(turn, "Ignoring stale AI move");
                    return;
                }
                self.thinking_turn = None;
                // The clock may have run out during the delay.
                if self.engine.is_ai_turn() {
                    let _ = self.engine.complete_ai_move();
                }
            }
            Command::Shutdown => {}
        }
    }

    /// Opens the AI's turn and queues its move for after the thinking delay.
    fn schedule_ai(&mut self) {
        if self.thinking_turn.is_some() || !self.engine.is_ai_turn() {
            return;
        }
        if self.engine.begin_ai_turn().is_err() {
            return;
        }
        self.ai_turns += 1;
        let turn = self.ai_turns;
        self.thinking_turn = Some(turn);

        let requeue = self.requeue.clone();
        if self.thinking.is_zero() {
            if requeue.send(Command::AiMove { turn }).is_err() {
                warn!("Command queue closed, AI move not scheduled");
            }
            return;
        }
        let delay = self.thinking;
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if requeue.send(Command::AiMove { turn }).is_err() {
                debug!(turn, "Driver stopped before AI move");
            }
        });
    }

    fn publish(&self) {
        if self
            .events
            .send(DriverEvent::View(self.engine.view()))
            .is_err()
        {
            debug!("UI gone, dropping view");
        }
    }
}

/// Sends [`Command::Tick`] every `period` until the driver stops.
#[instrument(skip(commands))]
pub fn spawn_ticker(
    commands: mpsc::UnboundedSender<Command>,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            if commands.send(Command::Tick).is_err() {
                debug!("Driver stopped, ticker exiting");
                break;
            }
        }
    })
}
