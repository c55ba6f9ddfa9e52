//! Tic-tac-toe with a navigable move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **View**: [`BoardView`] derives the status line, highlighted cells and
//!   whether a click becomes a move
//! - **Controller**: [`GameController`] owns the history of board snapshots,
//!   the current pointer and the move-list order
//! - **TUI**: ratatui front end translating keys and mouse clicks into
//!   controller operations
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameController, Position, Status, Player};
//!
//! let mut game = GameController::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::MiddleLeft, Position::TopRight] {
//!     game.click(pos);
//! }
//! assert_eq!(game.board_view().status(), Status::Winner(Player::X));
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.board_view().status(), Status::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardView, Coordinate, FINAL_MOVE, GameController, HistoryError, MoveEntry,
    MoveRecord, Player, Position, SortOrder, Square, Status, Win, rules,
};

// Crate-level exports - Terminal front end
pub use tui::{App, Focus, HitMap, draw, move_cursor, run_app, run_tui};
