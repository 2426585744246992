//! Adversarial search for the bot opponents.
//!
//! ## Overview
//!
//! Both searches are generic over [`Rules`](crate::rules::Rules) and run to
//! completion within one call; depth is bounded by the game (nine plies for
//! tic-tac-toe) or by the caller's profile (at most seven for connect four).
//!
//! - [`Minimax`]: exhaustive, with a per-search transposition cache
//! - [`AlphaBeta`]: depth-limited with a static [`Heuristic`] at the leaves
//!
//! ## Usage
//!
//! ```rust
//! use rust_arcade::games::connect_four::{Board, ConnectFour, Token};
//! use rust_arcade::search::AlphaBeta;
//!
//! let board = Board::new();
//! let mut search = AlphaBeta::new(&ConnectFour, Token::Red, 5, 1000);
//!
//! if let Some((column, score)) = search.best_move(&board) {
//!     println!("drop into {column} (score {score})");
//! }
//! println!("{} nodes", search.stats().nodes_visited);
//! ```

pub mod alphabeta;
pub mod minimax;
pub mod stats;

pub use alphabeta::{AlphaBeta, Heuristic};
pub use minimax::Minimax;
pub use stats::SearchStats;
