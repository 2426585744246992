//! Tic-tac-toe engine.
//!
//! Pure functions over a 3x3 [`Board`]:
//! - [`winner`], [`is_full`] and [`outcome`] for the caller's turn loop
//! - [`bot_move`] for the automated opponent, backed by full-depth minimax
//!
//! ```
//! use rust_arcade::core::{Difficulty, GameRng};
//! use rust_arcade::games::tictactoe::{self, Board, Mark};
//!
//! let board = Board::new().place(4, Mark::X).unwrap();
//! let mut rng = GameRng::new(7);
//!
//! let reply = tictactoe::bot_move(&board, Mark::O, Difficulty::Hard, &mut rng).unwrap();
//! let board = board.place(reply, Mark::O).unwrap();
//! assert!(!tictactoe::outcome(&board).is_terminal());
//! ```

mod board;
mod bot;

pub use board::{Board, Mark, LINES};
pub use bot::{best_move, bot_move, bot_move_with_profile, WIN_SCORE};

use crate::rules::{MoveList, Outcome, Rules};

/// Tic-tac-toe rules for the generic searches.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl Rules for TicTacToe {
    type Board = Board;
    type Move = usize;
    type Side = Mark;

    fn legal_moves(&self, board: &Board) -> MoveList<usize> {
        board.empty_cells().collect()
    }

    fn apply(&self, board: &Board, mv: usize, side: Mark) -> Board {
        board.place(mv, side).unwrap_or(*board)
    }

    fn winner(&self, board: &Board) -> Option<Mark> {
        board.winner()
    }

    fn is_full(&self, board: &Board) -> bool {
        board.is_full()
    }

    fn opponent(&self, side: Mark) -> Mark {
        side.opponent()
    }
}

/// Mark owning one of the eight lines, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    board.winner()
}

/// True iff no cell is empty.
#[must_use]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[must_use]
pub fn outcome(board: &Board) -> Outcome<Mark> {
    board.outcome()
}

/// Empty cell indices, ascending.
#[must_use]
pub fn available_moves(board: &Board) -> MoveList<usize> {
    board.empty_cells().collect()
}
