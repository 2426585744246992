//! Move rejection errors shared by the board games.
//!
//! An invalid move is ordinary game flow, not a failure: callers match on
//! the variant and keep the previous board. "No legal move" is reported
//! separately by the bots as `None`.
//!
//! `ParseBoardError` covers the textual board fixtures used by front ends
//! and tests.

use thiserror::Error;

/// Why a requested move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum MoveError {
    /// A grid write outside the board.
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// A tic-tac-toe cell index outside `0..9`.
    #[error("cell index {index} is out of range")]
    CellOutOfRange { index: usize },

    /// A tic-tac-toe cell that already holds a mark.
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// A connect-four column outside `0..7`.
    #[error("column {column} is out of range")]
    ColumnOutOfRange { column: usize },

    /// A connect-four column whose top cell is taken.
    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Why a board string could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected {expected} cells, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("unexpected cell character {0:?}")]
    InvalidCell(char),

    /// Connect-four boards must respect gravity.
    #[error("floating token in column {column}")]
    FloatingToken { column: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(
            MoveError::OutOfBounds { row: 7, col: 1 }.to_string(),
            "cell (7, 1) is outside the board"
        );
        assert_eq!(
            ParseBoardError::WrongLength { expected: 9, found: 8 }.to_string(),
            "expected 9 cells, found 8"
        );
    }
}
