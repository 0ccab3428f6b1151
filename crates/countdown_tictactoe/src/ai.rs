//! Rule-based computer opponent.
//!
//! A fixed priority policy, no search: win, block, center, corner, edge.
//! Randomness only breaks ties among corners or edges, and the RNG is
//! seedable so games can be replayed exactly.

use super::board::Board;
use super::position::Position;
use super::rules::LINES;
use super::timer::TimerState;
use super::types::{Cell, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Which priority rule produced a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Rule {
    /// Completes one of our own lines.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes a random free edge.
    Edge,
}

/// A cell chosen by the AI and the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiChoice {
    /// Cell to play.
    pub position: Position,
    /// Rule that fired.
    pub rule: Rule,
}

/// Heuristic move selector holding its own RNG.
#[derive(Debug, Clone)]
pub struct HeuristicAi {
    rng: StdRng,
}

impl HeuristicAi {
    /// Creates an AI seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an AI whose tie-breaks are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, OS-random otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Chooses a cell for `me` on `board`.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[instrument(skip(self, board), fields(board = %board.display()))]
    pub fn choose(&mut self, board: &Board, me: Player) -> Option<AiChoice> {
        let choice = completing_cell(board, me.mark())
            .map(|position| AiChoice {
                position,
                rule: Rule::Win,
            })
            .or_else(|| {
                completing_cell(board, me.opponent().mark()).map(|position| AiChoice {
                    position,
                    rule: Rule::Block,
                })
            })
            .or_else(|| {
                board.is_empty(Position::CENTER).then_some(AiChoice {
                    position: Position::CENTER,
                    rule: Rule::Center,
                })
            })
            .or_else(|| {
                self.random_empty(board, &Position::CORNERS)
                    .map(|position| AiChoice {
                        position,
                        rule: Rule::Corner,
                    })
            })
            .or_else(|| {
                self.random_empty(board, &Position::EDGES)
                    .map(|position| AiChoice {
                        position,
                        rule: Rule::Edge,
                    })
            });

        if let Some(choice) = &choice {
            debug!(position = %choice.position, rule = %choice.rule, "AI chose position");
        }
        choice
    }

    fn random_empty(&mut self, board: &Board, candidates: &[Position]) -> Option<Position> {
        let free: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the empty cell of the first line holding two `mark`s and one gap.
pub fn completing_cell(board: &Board, mark: Cell) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let marks = line.iter().filter(|pos| board.get(**pos) == mark).count();
        let gap = line.iter().copied().find(|pos| board.is_empty(*pos));
        match (marks, gap) {
            (2, Some(gap)) => Some(gap),
            _ => None,
        }
    })
}

/// Hook run between the clock restart and the AI's decision.
pub trait ThinkingPause: Send {
    /// Blocks for the cosmetic thinking delay.
    ///
    /// `clock` is the AI's freshly restarted turn clock.
    fn pause(&mut self, clock: TimerState);
}

/// No delay at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl ThinkingPause for NoPause {
    fn pause(&mut self, _clock: TimerState) {}
}

/// Sleeps the current thread for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct SleepPause(pub Duration);

impl ThinkingPause for SleepPause {
    fn pause(&mut self, _clock: TimerState) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}
