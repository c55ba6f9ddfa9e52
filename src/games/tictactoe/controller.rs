//! Game controller owning the move history.

use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

use super::history::{MoveEntry, MoveRecord, SortOrder};
use super::view::BoardView;
use super::{Board, Player, Position};

/// Errors raised by history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested move does not exist.
    #[display("Move {requested} is out of range (history has {len} records)")]
    OutOfRange {
        /// Requested move number.
        requested: usize,
        /// Current history length.
        len: usize,
    },
}

/// Authoritative game state: history, pointer and list order.
///
/// `history` is never empty and `current < history.len()` holds after
/// every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    history: Vec<MoveRecord>,
    current: usize,
    sort: SortOrder,
}

impl GameController {
    /// Creates a controller at the empty board, listing moves ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort(SortOrder::default())
    }

    /// Creates a controller with the given initial list order.
    #[instrument]
    pub fn with_sort(sort: SortOrder) -> Self {
        Self {
            history: vec![MoveRecord::opening()],
            current: 0,
            sort,
        }
    }

    /// Returns every recorded move, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the move number currently shown.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Returns the list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Returns the board at the current pointer.
    pub fn current_board(&self) -> &Board {
        self.history[self.current].board()
    }

    /// Checks whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.current % 2 == 0
    }

    /// Returns the player to move at the current pointer.
    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// Builds the presentation view of the current board.
    pub fn board_view(&self) -> BoardView {
        BoardView::new(*self.current_board(), self.next_player(), self.current)
    }

    /// Records `next_board` as the move played at `clicked`.
    ///
    /// Everything after the current pointer is discarded first, so playing
    /// from an earlier move abandons the later branch.
    #[instrument(skip(self, next_board), fields(current = self.current, len = self.history.len()))]
    pub fn play(&mut self, next_board: Board, clicked: Position) {
        let discarded = self.history.len() - (self.current + 1);
        self.history.truncate(self.current + 1);
        self.history
            .push(MoveRecord::new(next_board, Some(clicked.coordinate())));
        self.current = self.history.len() - 1;
        info!(
            move_number = self.current,
            discarded,
            coordinate = %clicked.coordinate(),
            "Move recorded"
        );
    }

    /// Plays `pos` for the player to move, if the board allows it.
    ///
    /// Returns `true` when a move was recorded.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> bool {
        match self.board_view().click(pos) {
            Some(next_board) => {
                self.play(next_board, pos);
                true
            }
            None => false,
        }
    }

    /// Moves the pointer to `move_number` without touching the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        if move_number >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }
        self.current = move_number;
        debug!("Pointer moved");
        Ok(())
    }

    /// Flips the list order.
    #[instrument(skip(self), fields(from = %self.sort))]
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
    }

    /// Returns the caption for the sort control.
    pub fn sort_label(&self) -> &'static str {
        self.sort.toggle_label()
    }

    /// Returns the navigation list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(move_number, record)| MoveEntry {
                move_number,
                coordinate: record.coordinate(),
                is_current: move_number == self.current,
            });
        match self.sort {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
