//! Presentation logic for a single board snapshot.
//!
//! [`BoardView`] is what the terminal layer draws from: the status line,
//! which cells to highlight, and whether a click on a cell should become a
//! move. It holds no history; the [`GameController`](super::GameController)
//! builds one for the current pointer.

use tracing::{debug, instrument};

use super::rules::{self, Win};
use super::{Board, Player, Position};

/// Number of the move that fills the last free square.
pub const FINAL_MOVE: usize = 9;

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// A line has been completed.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Every square is filled and nobody won.
    #[display("Draw: No one wins")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// Read-only view of one board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct BoardView {
    board: Board,
    next: Player,
    move_number: usize,
}

impl BoardView {
    /// Returns the board being presented.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next click places.
    pub fn next_player(&self) -> Player {
        self.next
    }

    /// Returns the completed line, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::evaluate(&self.board)
    }

    /// Derives the status line.
    ///
    /// A winner always takes precedence over the draw message, even when
    /// the winning mark was the ninth one placed.
    #[instrument(level = "trace", skip(self), fields(move_number = self.move_number))]
    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.player())
        } else if self.move_number == FINAL_MOVE {
            Status::Draw
        } else {
            Status::NextPlayer(self.next)
        }
    }

    /// Checks whether `pos` is part of the winning triple.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winner().is_some_and(|win| win.contains(pos))
    }

    /// Resolves a click on `pos` into the board that would follow it.
    ///
    /// Returns `None` when the square is taken or the game is already won.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn click(&self, pos: Position) -> Option<Board> {
        if self.winner().is_some() {
            debug!("Click ignored: game already won");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!("Click ignored: square occupied");
            return None;
        }
        Some(self.board.with_mark(pos, self.next))
    }
}
