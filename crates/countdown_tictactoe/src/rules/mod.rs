//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated from
//! board storage so the engine, the AI and the invariants share one scan order.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{LINES, Line};
pub use win::{WinningLine, winning_line};
