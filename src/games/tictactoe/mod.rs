//! Tic-tac-toe with a navigable move history.

mod controller;
mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use controller::{GameController, HistoryError};
pub use history::{MoveEntry, MoveRecord, SortOrder};
pub use position::{Coordinate, Position};
pub use rules::Win;
pub use types::{Board, Player, Square};
pub use view::{BoardView, FINAL_MOVE, Status};
