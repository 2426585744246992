//! Connect-four opponent.
//!
//! Decision order for one move:
//! 1. Easy only: occasionally drop into a random column.
//! 2. Win now if any column allows it.
//! 3. Block the opponent's immediate win.
//! 4. Otherwise run alpha-beta to the profile's depth.

use tracing::debug;

use crate::core::{ConnectFourProfile, Difficulty, RandomSource};
use crate::rules::{MoveList, Rules};
use crate::search::AlphaBeta;

use super::board::{Board, Token};
use super::ConnectFour;

/// Base score of a win found by the search.
pub const WIN_SCORE: i32 = 1000;

/// Column the bot plays for `token` at the given difficulty.
///
/// Returns `None` if every column is full. Callers check the outcome
/// first: on a board that already has a winner this still returns a
/// droppable column.
pub fn bot_move(
    board: &Board,
    token: Token,
    difficulty: Difficulty,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    bot_move_with_profile(
        board,
        token,
        &ConnectFourProfile::for_difficulty(difficulty),
        rng,
    )
}

/// [`bot_move`] with explicit knobs.
pub fn bot_move_with_profile(
    board: &Board,
    token: Token,
    profile: &ConnectFourProfile,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    let columns: MoveList<usize> = board.legal_columns().collect();
    if columns.is_empty() {
        return None;
    }

    if rng.gen_bool(profile.random_move_probability) {
        let column = columns[rng.gen_index(columns.len())];
        debug!(%token, column, "connect-four random move");
        return Some(column);
    }

    if let Some(column) = ConnectFour.winning_move(board, token) {
        debug!(%token, column, "connect-four winning drop");
        return Some(column);
    }

    if let Some(column) = ConnectFour.winning_move(board, token.opponent()) {
        debug!(%token, column, "connect-four block");
        return Some(column);
    }

    let mut search = AlphaBeta::new(&ConnectFour, token, profile.search_depth, WIN_SCORE);
    let (column, score) = search.best_move(board)?;
    let stats = search.stats();
    debug!(
        %token,
        column,
        score,
        depth = profile.search_depth,
        nodes = stats.nodes_visited,
        cutoffs = stats.cutoffs,
        time_us = stats.time_us,
        "connect-four search move"
    );
    Some(column)
}
