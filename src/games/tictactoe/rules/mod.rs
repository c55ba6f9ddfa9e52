//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here knows
//! about history or turns, which keeps the rules trivially testable.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Win, evaluate};
