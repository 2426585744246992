//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one bot search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root children included.
    pub nodes_visited: u64,

    /// Leaves scored by a static heuristic.
    pub leaf_evaluations: u64,

    /// Sibling loops cut short by alpha-beta.
    pub cutoffs: u64,

    /// Positions answered from the transposition cache.
    pub cache_hits: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a visit at `depth` plies below the root.
    pub(crate) fn visit(&mut self, depth: u32) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
