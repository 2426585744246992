//! Tic-tac-toe opponent.

use tracing::debug;

use crate::core::{Difficulty, RandomSource, TicTacToeProfile};
use crate::rules::MoveList;
use crate::search::Minimax;

use super::board::{Board, Mark};
use super::TicTacToe;

/// Base score of a win; larger than the nine-ply game length.
pub const WIN_SCORE: i32 = 10;

/// Minimax-optimal cell for `mark`, first in index order among equals.
///
/// Returns `None` if the board is full.
#[must_use]
pub fn best_move(board: &Board, mark: Mark) -> Option<usize> {
    let mut search = Minimax::new(&TicTacToe, mark, WIN_SCORE);
    let (index, score) = search.best_move(board)?;

    debug!(
        %mark,
        index,
        score,
        nodes = search.stats().nodes_visited,
        cache_hits = search.stats().cache_hits,
        "tic-tac-toe minimax move"
    );
    Some(index)
}

/// Cell the bot plays for `mark` at the given difficulty.
///
/// Returns `None` if the board is full. Callers check the outcome first:
/// on a board that already has a winner this still returns an empty cell.
pub fn bot_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    bot_move_with_profile(board, mark, &TicTacToeProfile::for_difficulty(difficulty), rng)
}

/// [`bot_move`] with explicit knobs.
///
/// Draws once to decide between the optimal and a random move, then, only
/// for a random move, once more to pick the cell.
pub fn bot_move_with_profile(
    board: &Board,
    mark: Mark,
    profile: &TicTacToeProfile,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    let moves: MoveList<usize> = board.empty_cells().collect();
    if moves.is_empty() {
        return None;
    }

    if rng.gen_bool(profile.optimal_probability) {
        return best_move(board, mark);
    }

    let index = moves[rng.gen_index(moves.len())];
    debug!(%mark, index, "tic-tac-toe random move");
    Some(index)
}
