//! Depth-limited minimax with alpha-beta pruning.
//!
//! Used where the full game tree is out of reach. Terminal wins score
//! `win_score + remaining_depth` (losses the negation), so a win found
//! earlier in the search outranks one found deeper. Positions at the depth
//! limit, or full boards, are scored by the game's [`Heuristic`].

use std::time::Instant;

use crate::rules::Rules;

use super::stats::SearchStats;

/// Static evaluation of a non-terminal position.
pub trait Heuristic: Rules {
    /// Score `board` from `side`'s point of view; positive favors `side`.
    fn evaluate(&self, board: &Self::Board, side: Self::Side) -> i32;
}

/// Bound larger than any reachable score.
const INFINITY: i32 = i32::MAX / 2;

/// Alpha-beta search context.
pub struct AlphaBeta<'a, R: Heuristic> {
    rules: &'a R,
    side: R::Side,
    depth: u32,
    win_score: i32,
    stats: SearchStats,
}

impl<'a, R: Heuristic> AlphaBeta<'a, R> {
    /// Search `depth` plies on behalf of `side`.
    pub fn new(rules: &'a R, side: R::Side, depth: u32, win_score: i32) -> Self {
        Self {
            rules,
            side,
            depth: depth.max(1),
            win_score,
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
    /// Ties go to the first move in `legal_moves` order. Returns `None` if
    /// the board has no legal move.
    pub fn best_move(&mut self, board: &R::Board) -> Option<(R::Move, i32)> {
        let start = Instant::now();
        self.stats.reset();

        let mut alpha = -INFINITY;
        let mut best: Option<(R::Move, i32)> = None;

        for mv in self.rules.legal_moves(board) {
            let child = self.rules.apply(board, mv, self.side);
            let score = self.search(&child, self.depth - 1, alpha, INFINITY, false);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    fn search(
        &mut self,
        board: &R::Board,
        remaining: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.visit(self.depth - remaining);

        if let Some(winner) = self.rules.winner(board) {
            let bonus = remaining as i32;
            return if winner == self.side {
                self.win_score + bonus
            } else {
                -self.win_score - bonus
            };
        }

        if remaining == 0 || self.rules.is_full(board) {
            self.stats.leaf_evaluations += 1;
            return self.rules.evaluate(board, self.side);
        }

        let mover = if maximizing {
            self.side
        } else {
            self.rules.opponent(self.side)
        };

        let mut value = if maximizing { -INFINITY } else { INFINITY };
        for mv in self.rules.legal_moves(board) {
            let child = self.rules.apply(board, mv, mover);
            let score = self.search(&child, remaining - 1, alpha, beta, !maximizing);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect_four::{Board, ConnectFour, Token};

    fn board(rows: [&str; 6]) -> Board {
        rows.concat().parse().unwrap()
    }

    #[test]
    fn test_finds_win_in_one() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRR.YY.",
        ]);
        let mut search = AlphaBeta::new(&ConnectFour, Token::Red, 3, 1000);
        let (col, score) = search.best_move(&b).unwrap();

        assert_eq!(col, 3);
        // Won one ply below the root with two plies of budget left.
        assert_eq!(score, 1000 + 2);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        fn plain(rules: &ConnectFour, b: &Board, remaining: u32, maximizing: bool) -> i32 {
            if let Some(w) = rules.winner(b) {
                let bonus = remaining as i32;
                return if w == Token::Red { 1000 + bonus } else { -1000 - bonus };
            }
            if remaining == 0 || rules.is_full(b) {
                return rules.evaluate(b, Token::Red);
            }
            let mover = if maximizing { Token::Red } else { Token::Yellow };
            let scores = rules
                .legal_moves(b)
                .into_iter()
                .map(|mv| plain(rules, &rules.apply(b, mv, mover), remaining - 1, !maximizing));
            if maximizing {
                scores.max().unwrap()
            } else {
                scores.min().unwrap()
            }
        }

        let b = board([
            ".......",
            ".......",
            ".......",
            "...Y...",
            "..RR...",
            "..YRY..",
        ]);
        let rules = ConnectFour;

        let mut expected: Option<(usize, i32)> = None;
        for mv in rules.legal_moves(&b) {
            let score = plain(&rules, &rules.apply(&b, mv, Token::Red), 3, false);
            if expected.map_or(true, |(_, s)| score > s) {
                expected = Some((mv, score));
            }
        }

        let mut search = AlphaBeta::new(&rules, Token::Red, 4, 1000);
        assert_eq!(search.best_move(&b), expected);
        assert!(search.stats().cutoffs > 0);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let b = board([
            "RYRYRYR",
            "RYRYRYR",
            "YRYRYRY",
            "YRYRYRY",
            "RYRYRYR",
            "RYRYRYR",
        ]);
        let mut search = AlphaBeta::new(&ConnectFour, Token::Red, 5, 1000);
        assert_eq!(search.best_move(&b), None);
    }
}
