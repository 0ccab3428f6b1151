//! First-class invariants over the engine's observable state.
//!
//! Invariants are logical properties that must hold after every accepted
//! move and every undo. The engine checks them in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_covers_moves;
pub mod mark_balance;
pub mod turn_parity;

pub use history_covers_moves::HistoryCoversMovesInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use turn_parity::TurnParityInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    HistoryCoversMovesInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineConfig, GameEngine, NullNotifier};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let engine = GameEngine::new(&EngineConfig::default(), NullNotifier);
        assert!(EngineInvariants::check_all(&engine.view()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let engine = GameEngine::new(&EngineConfig::default(), NullNotifier);
        let mut view = engine.view();
        // Two marks for Player Two and none for One breaks balance and parity.
        view.board.place(0, 0, crate::Player::Two).unwrap();
        view.board.place(0, 1, crate::Player::Two).unwrap();

        let violations = EngineInvariants::check_all(&view).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
