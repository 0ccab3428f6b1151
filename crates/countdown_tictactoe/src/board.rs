//! 3x3 board storage.

use super::error::MoveError;
use super::position::Position;
use super::rules::{self, WinningLine};
use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 board of cells.
///
/// A cell only ever moves from `Empty` to a mark through [`Board::place`].
/// Earlier positions come back by swapping in a cloned board from history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Gets the cell at grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` for coordinates outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places `player`'s mark at grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` for coordinates outside the grid and
    /// `MoveError::CellOccupied` if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<Position, MoveError> {
        let pos = Position::from_row_col(row, col)?;
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[pos.index()] = player.mark();
        Ok(pos)
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the first completed line in scan order.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self)
    }

    /// Counts cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Number of cells holding any mark.
    pub fn occupied(&self) -> usize {
        9 - self.count(Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as rows of symbols, e.g. `"O.X\n.O.\n..X"`.
    pub fn display(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
