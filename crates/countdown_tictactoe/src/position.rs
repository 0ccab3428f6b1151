//! Named cell positions on the 3x3 grid.

use super::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board, addressed row-major (index 0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in scan order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners, in scan order.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The four edge midpoints, in scan order.
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// The center cell.
    pub const CENTER: Position = Position::Center;

    /// Converts grid coordinates into a position.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if either index is outside `0..3`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= 3 || col >= 3 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Self::from_index(row * 3 + col).ok_or(MoveError::OutOfRange { row, col })
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Ok(pos));
        }
    }

    #[test]
    fn test_out_of_range_coordinates() {
        assert_eq!(
            Position::from_row_col(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            Position::from_row_col(1, 7),
            Err(MoveError::OutOfRange { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_index_matches_scan_order() {
        assert_eq!(Position::TopLeft.index(), 0);
        assert_eq!(Position::Center.index(), 4);
        assert_eq!(Position::BottomRight.index(), 8);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_iteration_follows_all() {
        use strum::IntoEnumIterator;
        assert!(Position::iter().eq(Position::ALL));
    }
}
