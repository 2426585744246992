//! Core building blocks shared by every game: grids, randomness,
//! configuration and move errors.
//!
//! Nothing here knows about a particular game. The games pick grid
//! dimensions and cell types, and map `Difficulty` onto their own profiles.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{ConnectFourProfile, Difficulty, TicTacToeProfile};
pub use error::{MoveError, ParseBoardError};
pub use grid::Grid;
pub use rng::{GameRng, GameRngState, RandomSource};
