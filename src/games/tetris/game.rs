//! Tetris session state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! Active <--toggle_pause--> Paused
//!    |
//!    +--settle, next piece blocked--> GameOver
//! ```
//!
//! Every operation takes the session by reference and returns the next
//! session. Rejected actions (collisions, walls, pause, game over) return
//! an identical copy. The session owns its random stream, so a given seed
//! always produces the same piece sequence.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, trace};

use crate::core::GameRng;

use super::board::Board;
use super::piece::Piece;
use super::scoring::{self, HARD_DROP_BONUS};

/// Where a session is in its lifecycle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    #[default]
    Active,
    Paused,
    GameOver,
}

/// One game of Tetris.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TetrisGame {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    score: u64,
    lines: u32,
    level: u32,
    status: Status,
    rng: GameRng,
}

impl TetrisGame {
    /// A fresh active session drawing pieces from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::start(GameRng::new(seed))
    }

    fn start(mut rng: GameRng) -> Self {
        let current = Piece::random(&mut rng);
        let next = Piece::random(&mut rng);
        Self {
            board: Board::new(),
            current: Some(current),
            next: Some(next),
            score: 0,
            lines: 0,
            level: 0,
            status: Status::Active,
            rng,
        }
    }

    /// Replace the well, e.g. to set up a puzzle position.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the falling and upcoming pieces.
    #[must_use]
    pub fn with_pieces(mut self, current: Piece, next: Piece) -> Self {
        self.current = Some(current);
        self.next = Some(next);
        self
    }

    /// Start from `lines` already cleared; the level follows.
    #[must_use]
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self.level = scoring::level_for_lines(lines);
        self
    }

    /// A fresh active session. Its piece stream is forked from this one,
    /// so consecutive resets differ but replay identically from a seed.
    #[must_use]
    pub fn reset(&self) -> Self {
        let mut rng = self.rng.clone();
        Self::start(rng.fork())
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece; `None` once the game is over.
    #[must_use]
    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// The preview piece; `None` once the game is over.
    #[must_use]
    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Total lines cleared this game.
    #[must_use]
    pub fn lines(&self) -> u32 {
        self.lines
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    /// Time the caller should wait between ticks at the current level.
    #[must_use]
    pub fn drop_interval(&self) -> Duration {
        scoring::drop_interval(self.level)
    }

    #[must_use]
    pub fn drop_interval_ms(&self) -> u64 {
        scoring::drop_interval_ms(self.level)
    }

    /// The well with the falling piece drawn in, for rendering.
    #[must_use]
    pub fn board_with_piece(&self) -> Board {
        match &self.current {
            Some(piece) => self.board.place(piece),
            None => self.board,
        }
    }

    /// Where the falling piece would land on a hard drop.
    #[must_use]
    pub fn ghost_piece(&self) -> Option<Piece> {
        self.current.map(|piece| self.board.ghost(&piece))
    }

    // === Transitions ===

    /// Gravity step: move down one row, or settle if blocked.
    #[must_use]
    pub fn tick(&self) -> Self {
        let mut next = self.clone();
        if let Some(piece) = self.falling() {
            match piece.shifted(0, 1) {
                Some(lower) if self.board.is_valid_position(&lower) => {
                    next.current = Some(lower);
                }
                _ => next.settle(piece, 0),
            }
        }
        next
    }

    /// Player-initiated [`tick`](Self::tick).
    #[must_use]
    pub fn soft_drop(&self) -> Self {
        self.tick()
    }

    /// Drop the piece to its landing row and settle at once, scoring
    /// two points per row fallen.
    #[must_use]
    pub fn hard_drop(&self) -> Self {
        let mut next = self.clone();
        if let Some(piece) = self.falling() {
            let landed = self.board.ghost(&piece);
            let distance = (landed.position.y - piece.position.y).unsigned_abs();
            next.settle(landed, u64::from(distance) * HARD_DROP_BONUS);
        }
        next
    }

    /// Shift the falling piece by `(dx, dy)` if the target fits.
    ///
    /// Unlike [`tick`](Self::tick), a blocked move never settles.
    #[must_use]
    pub fn move_piece(&self, dx: i32, dy: i32) -> Self {
        self.try_replace(|piece| piece.shifted(dx, dy))
    }

    /// Rotate the falling piece clockwise if the result fits. No wall kicks.
    #[must_use]
    pub fn rotate(&self) -> Self {
        self.try_replace(|piece| Some(piece.rotated()))
    }

    /// Switch between active and paused. A finished game stays finished.
    #[must_use]
    pub fn toggle_pause(&self) -> Self {
        let mut next = self.clone();
        next.status = match self.status {
            Status::Active => Status::Paused,
            Status::Paused => Status::Active,
            Status::GameOver => Status::GameOver,
        };
        next
    }

    /// The falling piece, if the session accepts input.
    fn falling(&self) -> Option<Piece> {
        match self.status {
            Status::Active => self.current,
            Status::Paused | Status::GameOver => None,
        }
    }

    fn try_replace(&self, f: impl FnOnce(&Piece) -> Option<Piece>) -> Self {
        let mut next = self.clone();
        if let Some(moved) = self.falling().and_then(|piece| f(&piece)) {
            if self.board.is_valid_position(&moved) {
                next.current = Some(moved);
            }
        }
        next
    }

    /// Merge `piece`, clear lines, score, then promote the preview piece.
    fn settle(&mut self, piece: Piece, bonus: u64) {
        let (board, cleared) = self.board.place(&piece).clear_lines();
        let points = scoring::line_score(cleared, self.level) + bonus;

        self.board = board;
        self.score += points;
        self.lines += cleared as u32;
        self.level = scoring::level_for_lines(self.lines);

        trace!(
            kind = %piece.kind,
            cleared,
            points,
            score = self.score,
            level = self.level,
            "tetris settle"
        );

        let upcoming = match self.next {
            Some(next) => next,
            None => Piece::random(&mut self.rng),
        };

        if self.board.is_valid_position(&upcoming) {
            self.current = Some(upcoming);
            self.next = Some(Piece::random(&mut self.rng));
        } else {
            self.current = None;
            self.next = None;
            self.status = Status::GameOver;
            debug!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                "tetris game over"
            );
        }
    }
}
