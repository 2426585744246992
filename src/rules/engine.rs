//! Rules trait for two-player placement games.
//!
//! Tic-tac-toe and connect four share a shape: two sides alternate placing
//! a piece, nothing is ever removed, and the result is a pure function of
//! the board. `Rules` captures that shape so the search routines can be
//! written once.
//!
//! ## Implementation Notes
//!
//! - `legal_moves`: ascending order; search tie-breaking depends on it
//! - `apply`: only called with a move from `legal_moves`
//! - `winner` / `is_full`: pure functions of the board

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Legal moves of a position, inline up to a full tic-tac-toe board.
pub type MoveList<M> = SmallVec<[M; 9]>;

/// Result of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<S> {
    /// Nobody has won and moves remain.
    InProgress,
    /// `S` completed a line.
    Winner(S),
    /// Board full with no line.
    Draw,
}

impl<S: PartialEq> Outcome<S> {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: S) -> bool {
        matches!(self, Outcome::Winner(s) if *s == side)
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&S> {
        match self {
            Outcome::Winner(s) => Some(s),
            _ => None,
        }
    }
}

/// Rules of a two-player game where each move adds one piece.
pub trait Rules {
    /// Board snapshot. Cheap to copy for the small boards used here.
    type Board: Clone + Debug;

    /// A move, e.g. a cell index or column.
    type Move: Copy + Eq + Debug;

    /// A player's piece.
    type Side: Copy + Eq + Debug;

    /// Legal moves in ascending order. Empty when the board is full.
    fn legal_moves(&self, board: &Self::Board) -> MoveList<Self::Move>;

    /// Board after `side` plays `mv`. `mv` must be legal.
    fn apply(&self, board: &Self::Board, mv: Self::Move, side: Self::Side) -> Self::Board;

    /// Side owning a completed line, if any.
    fn winner(&self, board: &Self::Board) -> Option<Self::Side>;

    /// Whether no further move is possible.
    fn is_full(&self, board: &Self::Board) -> bool;

    /// The other side.
    fn opponent(&self, side: Self::Side) -> Self::Side;

    // === Convenience Methods ===

    /// Derive the outcome from the board alone.
    fn outcome(&self, board: &Self::Board) -> Outcome<Self::Side> {
        if let Some(side) = self.winner(board) {
            Outcome::Winner(side)
        } else if self.is_full(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// First legal move after which `side` has won, in ascending order.
    fn winning_move(&self, board: &Self::Board, side: Self::Side) -> Option<Self::Move> {
        self.legal_moves(board)
            .into_iter()
            .find(|&mv| self.winner(&self.apply(board, mv, side)) == Some(side))
    }
}
