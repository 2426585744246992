//! # rust-arcade
//!
//! Deterministic engines for a small game arcade: tic-tac-toe, connect four
//! and tetris.
//!
//! ## Design Principles
//!
//! 1. **Pure Engines**: Every operation takes a board or session by
//!    reference and returns a new value or a decision. Nothing is retained
//!    between calls.
//!
//! 2. **Injectable Randomness**: Bots and piece spawning draw from a
//!    `RandomSource`, so tests script exact branches and seeds replay games.
//!
//! 3. **Rejection Is Not Failure**: Invalid moves come back as `MoveError`,
//!    "no move available" as `None`. Nothing panics on bad input.
//!
//! ## Modules
//!
//! - `core`: Grids, RNG, difficulty profiles, errors
//! - `rules`: `Rules` trait for two-player placement games
//! - `search`: Minimax and alpha-beta over any `Rules`
//! - `games`: The three engines
//!
//! Rendering, input handling and tick scheduling belong to the caller.

pub mod core;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    ConnectFourProfile, Difficulty, GameRng, GameRngState, Grid, MoveError, ParseBoardError,
    RandomSource, TicTacToeProfile,
};

pub use crate::rules::{MoveList, Outcome, Rules};

pub use crate::search::{AlphaBeta, Heuristic, Minimax, SearchStats};

pub use crate::games::connect_four::{ConnectFour, Token};
pub use crate::games::tetris::{TetrisGame, Status as TetrisStatus};
pub use crate::games::tictactoe::{Mark, TicTacToe};
