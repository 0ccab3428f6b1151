//! The eight lines of the grid, in fixed scan order.

use super::super::Position;

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// Rows top to bottom, columns left to right, then the two diagonals.
///
/// Every scan (win detection, AI threats) walks lines in this order, so ties
/// always resolve the same way.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];
