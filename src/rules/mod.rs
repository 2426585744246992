//! Rules trait for the two-player board games.
//!
//! Games implement `Rules` to define:
//! - Legal moves for a board
//! - How a move changes the board
//! - Win and draw conditions
//!
//! The search routines call into `Rules` but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{MoveList, Outcome, Rules};
