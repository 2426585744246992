//! Exhaustive minimax for small game trees.
//!
//! Searches to the end of the game from the given board. A win found `d`
//! plies below the root scores `win_score - d`, a loss `d - win_score`, a
//! draw `0`, so faster wins and slower losses are preferred. Ties go to the
//! first move in `legal_moves` order.
//!
//! Transpositions are cached per search. Every move adds exactly one piece,
//! so a board reached at a given depth always has the same score within one
//! search and caching does not change any result.

use std::hash::Hash;
use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::rules::Rules;

use super::stats::SearchStats;

/// Full-depth minimax search context.
pub struct Minimax<'a, R: Rules> {
    rules: &'a R,
    side: R::Side,
    win_score: i32,
    cache: FxHashMap<(R::Board, u32), i32>,
    stats: SearchStats,
}

impl<'a, R> Minimax<'a, R>
where
    R: Rules,
    R::Board: Hash + Eq,
{
    /// Search on behalf of `side`. `win_score` must exceed the deepest
    /// possible game so every win outscores every draw.
    pub fn new(rules: &'a R, side: R::Side, win_score: i32) -> Self {
        Self {
            rules,
            side,
            win_score,
            cache: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the searching side with its score.
    ///
    /// Returns `None` if the board has no legal move.
    pub fn best_move(&mut self, board: &R::Board) -> Option<(R::Move, i32)> {
        let start = Instant::now();
        self.stats.reset();
        self.cache.clear();

        let mut best: Option<(R::Move, i32)> = None;
        for mv in self.rules.legal_moves(board) {
            let child = self.rules.apply(board, mv, self.side);
            let score = self.score(&child, 1, false);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    fn score(&mut self, board: &R::Board, depth: u32, maximizing: bool) -> i32 {
        self.stats.visit(depth);

        let key = (board.clone(), depth);
        if let Some(&cached) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return cached;
        }

        let plies = depth as i32;
        let score = if let Some(winner) = self.rules.winner(board) {
            if winner == self.side {
                self.win_score - plies
            } else {
                plies - self.win_score
            }
        } else if self.rules.is_full(board) {
            0
        } else {
            let mover = if maximizing {
                self.side
            } else {
                self.rules.opponent(self.side)
            };

            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for mv in self.rules.legal_moves(board) {
                let child = self.rules.apply(board, mv, mover);
                let value = self.score(&child, depth + 1, !maximizing);
                best = if maximizing { best.max(value) } else { best.min(value) };
            }
            best
        };

        self.cache.insert(key, score);
        score
    }
}
