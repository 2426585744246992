//! Bot configuration.
//!
//! The presentation layer picks a [`Difficulty`]; each game turns it into a
//! profile holding the actual knobs:
//! - `TicTacToeProfile`: probability of playing the minimax move
//! - `ConnectFourProfile`: search depth and chance of an opening random move
//!
//! Profiles are plain serde values with builder setters, so a front end can
//! ship tuned presets without new difficulty levels.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Bot strength selected by the player.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

/// Tic-tac-toe bot knobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeProfile {
    /// Chance of playing the minimax-optimal move instead of a random one.
    pub optimal_probability: f64,
}

impl TicTacToeProfile {
    /// Preset for a difficulty level.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let optimal_probability = match difficulty {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.7,
            Difficulty::Hard => 1.0,
        };
        Self { optimal_probability }
    }

    /// Override the optimal-move probability (clamped to `[0, 1]`).
    #[must_use]
    pub fn with_optimal_probability(mut self, probability: f64) -> Self {
        self.optimal_probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl Default for TicTacToeProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl From<Difficulty> for TicTacToeProfile {
    fn from(difficulty: Difficulty) -> Self {
        Self::for_difficulty(difficulty)
    }
}

/// Connect-four bot knobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectFourProfile {
    /// Alpha-beta search depth in plies.
    pub search_depth: u32,

    /// Chance of skipping all analysis and dropping into a random column.
    pub random_move_probability: f64,
}

impl ConnectFourProfile {
    /// Deepest search a profile may request.
    pub const MAX_DEPTH: u32 = 7;

    /// Preset for a difficulty level.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                search_depth: 3,
                random_move_probability: 0.4,
            },
            Difficulty::Medium => Self {
                search_depth: 5,
                random_move_probability: 0.0,
            },
            Difficulty::Hard => Self {
                search_depth: 7,
                random_move_probability: 0.0,
            },
        }
    }

    /// Override the search depth (clamped to `1..=MAX_DEPTH`).
    #[must_use]
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth.clamp(1, Self::MAX_DEPTH);
        self
    }

    /// Override the random-move probability (clamped to `[0, 1]`).
    #[must_use]
    pub fn with_random_move_probability(mut self, probability: f64) -> Self {
        self.random_move_probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl Default for ConnectFourProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl From<Difficulty> for ConnectFourProfile {
    fn from(difficulty: Difficulty) -> Self {
        Self::for_difficulty(difficulty)
    }
}
