//! Move records and the navigation list built from them.

use serde::{Deserialize, Serialize};

use super::{Board, Coordinate};

/// A board snapshot and the coordinate of the move that produced it.
///
/// The opening record (move 0) has no coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct MoveRecord {
    board: Board,
    coordinate: Option<Coordinate>,
}

impl MoveRecord {
    /// Creates the empty-board record that starts every history.
    pub fn opening() -> Self {
        Self::new(Board::new(), None)
    }

    /// Returns the board after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns where the move was played.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

/// Presentation order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Latest move first.
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the caption of the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One line of the move navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    /// Index into the history.
    pub move_number: usize,
    /// Coordinate of the move, absent for the opening record.
    pub coordinate: Option<Coordinate>,
    /// Whether this is the move currently shown on the board.
    pub is_current: bool,
}

impl MoveEntry {
    /// Text shown for this entry.
    pub fn label(&self) -> String {
        if self.is_current {
            return format!("You are at move #{}", self.move_number);
        }
        match self.coordinate {
            Some(coordinate) if self.move_number > 0 => format!("Go to move {coordinate}"),
            _ => "Go to game start".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_labels() {
        let coordinate = Some(Coordinate { row: 2, col: 3 });
        let current = MoveEntry {
            move_number: 4,
            coordinate,
            is_current: true,
        };
        let other = MoveEntry {
            is_current: false,
            ..current
        };
        let start = MoveEntry {
            move_number: 0,
            coordinate: None,
            is_current: false,
        };
        assert_eq!(current.label(), "You are at move #4");
        assert_eq!(other.label(), "Go to move (2, 3)");
        assert_eq!(start.label(), "Go to game start");
    }

    #[test]
    fn test_sort_toggle_label() {
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Descending");
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle_label(), "Sort Ascending");
    }
}
