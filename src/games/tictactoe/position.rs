//! Board positions and their row/column coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// One-based row and column of a board cell, as shown in the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coordinate {
    /// Row, 1-3 from the top.
    pub row: u8,
    /// Column, 1-3 from the left.
    pub col: u8,
}

impl Position {
    /// All 9 positions in row-major order.
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

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a 1-9 keypad digit, as typed by the player.
    pub fn from_digit(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }

    /// Returns the one-based (row, column) of this position.
    pub fn coordinate(self) -> Coordinate {
        let index = self.to_index();
        Coordinate {
            row: (index / 3 + 1) as u8,
            col: (index % 3 + 1) as u8,
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
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trips_for_every_position() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_coordinate_is_one_based() {
        assert_eq!(Position::TopLeft.coordinate(), Coordinate { row: 1, col: 1 });
        assert_eq!(Position::MiddleRight.coordinate(), Coordinate { row: 2, col: 3 });
        assert_eq!(Position::BottomCenter.coordinate(), Coordinate { row: 3, col: 2 });
        assert_eq!(Position::BottomRight.coordinate().to_string(), "(3, 3)");
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(Position::from_digit('1'), Some(Position::TopLeft));
        assert_eq!(Position::from_digit('9'), Some(Position::BottomRight));
        assert_eq!(Position::from_digit('0'), None);
        assert_eq!(Position::from_digit('x'), None);
    }
}
