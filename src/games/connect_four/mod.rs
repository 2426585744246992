//! Connect-four engine.
//!
//! Pure functions over a 6x7 [`Board`] (row 0 at the top):
//! - [`drop_token`] applies gravity and rejects full or out-of-range columns
//! - [`winner`], [`is_full`] and [`outcome`] for the caller's turn loop
//! - [`bot_move`] for the automated opponent
//!
//! ```
//! use rust_arcade::core::{Difficulty, GameRng};
//! use rust_arcade::games::connect_four::{self, Token};
//!
//! let board = connect_four::new_board();
//! let board = connect_four::drop_token(&board, 3, Token::Red).unwrap();
//!
//! let mut rng = GameRng::new(1);
//! let column = connect_four::bot_move(&board, Token::Yellow, Difficulty::Medium, &mut rng);
//! assert!(column.is_some());
//! ```

mod board;
mod bot;
mod heuristic;

pub use board::{Board, Token, Window, CENTER_COLUMN, COLUMNS, ROWS, WINDOWS};
pub use bot::{bot_move, bot_move_with_profile, WIN_SCORE};
pub use heuristic::evaluate;

use crate::core::MoveError;
use crate::rules::{MoveList, Outcome, Rules};
use crate::search::Heuristic;

/// Connect-four rules for the generic searches.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFour;

impl Rules for ConnectFour {
    type Board = Board;
    type Move = usize;
    type Side = Token;

    fn legal_moves(&self, board: &Board) -> MoveList<usize> {
        board.legal_columns().collect()
    }

    fn apply(&self, board: &Board, mv: usize, side: Token) -> Board {
        board.drop_token(mv, side).unwrap_or(*board)
    }

    fn winner(&self, board: &Board) -> Option<Token> {
        board.winner()
    }

    fn is_full(&self, board: &Board) -> bool {
        board.is_full()
    }

    fn opponent(&self, side: Token) -> Token {
        side.opponent()
    }
}

impl Heuristic for ConnectFour {
    fn evaluate(&self, board: &Board, side: Token) -> i32 {
        heuristic::evaluate(board, side)
    }
}

/// An empty board.
#[must_use]
pub fn new_board() -> Board {
    Board::new()
}

/// Board with `token` dropped into `column`; the input is never mutated.
pub fn drop_token(board: &Board, column: usize, token: Token) -> Result<Board, MoveError> {
    board.drop_token(column, token)
}

/// Token owning a line of four, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Token> {
    board.winner()
}

/// True iff the top row has no empty cell.
#[must_use]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[must_use]
pub fn outcome(board: &Board) -> Outcome<Token> {
    board.outcome()
}

/// Columns that can still take a token, ascending.
#[must_use]
pub fn legal_columns(board: &Board) -> MoveList<usize> {
    board.legal_columns().collect()
}
