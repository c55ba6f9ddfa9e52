//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the player who owns it and the three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Win {
    player: Player,
    line: [Position; 3],
}

impl Win {
    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the winning triple.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Checks whether `pos` belongs to the winning triple.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates the board for a completed line.
///
/// Returns the first line in [`LINES`] order whose three squares hold the
/// same mark, or `None` if no line qualifies.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected_with_its_triple() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let win = evaluate(&board_with(player, &line)).expect("line should win");
                assert_eq!(win.player(), player);
                assert_eq!(win.line(), line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter])
            .with_mark(Position::TopRight, Player::O);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_tie_break() {
        // Top row and left column both complete; the row is checked first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        let win = evaluate(&board).expect("winner");
        assert_eq!(win.line(), LINES[0]);
        assert!(win.contains(Position::TopRight));
        assert!(!win.contains(Position::BottomLeft));
    }
}
