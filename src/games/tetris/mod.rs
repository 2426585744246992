//! Tetris engine.
//!
//! A 10x20 well, the seven standard tetrominoes and a session state machine
//! that the caller drives with gravity ticks and player input:
//!
//! ```
//! use rust_arcade::games::tetris::{self, Status};
//!
//! let game = tetris::new_game(42);
//! let game = tetris::move_piece(&game, -1, 0);
//! let game = tetris::rotate(&game);
//! let game = tetris::hard_drop(&game);
//! assert_eq!(game.status(), Status::Active);
//!
//! // Schedule the next tick after this long.
//! assert_eq!(game.drop_interval_ms(), 1000);
//! ```
//!
//! ## Rules
//!
//! - Rotation is 90 degrees clockwise with no wall kicks.
//! - A full row clears; rows above shift down.
//! - Clears score `[0, 40, 100, 300, 1200] * (level + 1)`, hard drops add
//!   two points per row fallen.
//! - The level rises every ten lines and shortens the drop interval.

mod board;
mod game;
mod piece;
mod scoring;

pub use board::{Board, HEIGHT, WIDTH};
pub use game::{Status, TetrisGame};
pub use piece::{Piece, PieceKind, Position, Shape, MASK_SIZE, SPAWN_X, SPAWN_Y};
pub use scoring::{
    drop_interval, drop_interval_ms, level_for_lines, line_score, HARD_DROP_BONUS,
    LINES_PER_LEVEL, LINE_SCORES,
};

/// A fresh session whose pieces are drawn from `seed`.
#[must_use]
pub fn new_game(seed: u64) -> TetrisGame {
    TetrisGame::new(seed)
}

#[must_use]
pub fn tick(game: &TetrisGame) -> TetrisGame {
    game.tick()
}

#[must_use]
pub fn soft_drop(game: &TetrisGame) -> TetrisGame {
    game.soft_drop()
}

#[must_use]
pub fn hard_drop(game: &TetrisGame) -> TetrisGame {
    game.hard_drop()
}

#[must_use]
pub fn move_piece(game: &TetrisGame, dx: i32, dy: i32) -> TetrisGame {
    game.move_piece(dx, dy)
}

#[must_use]
pub fn rotate(game: &TetrisGame) -> TetrisGame {
    game.rotate()
}

#[must_use]
pub fn toggle_pause(game: &TetrisGame) -> TetrisGame {
    game.toggle_pause()
}

/// A fresh session continuing `game`'s random stream.
#[must_use]
pub fn reset(game: &TetrisGame) -> TetrisGame {
    game.reset()
}
