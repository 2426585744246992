//! The arcade's game engines.
//!
//! - `tictactoe`: 3x3 board with a minimax opponent
//! - `connect_four`: 6x7 board with an alpha-beta opponent
//! - `tetris`: single-player falling-block session

pub mod connect_four;
pub mod tetris;
pub mod tictactoe;
