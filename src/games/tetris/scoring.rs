//! Score table, level curve and gravity speed.

use std::time::Duration;

/// Base points for clearing 0..=4 lines in one settle.
pub const LINE_SCORES: [u64; 5] = [0, 40, 100, 300, 1200];

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Bonus per row fallen during a hard drop.
pub const HARD_DROP_BONUS: u64 = 2;

const BASE_INTERVAL_MS: u64 = 1000;
const INTERVAL_STEP_MS: u64 = 50;
const MIN_INTERVAL_MS: u64 = 50;

/// Points for clearing `lines` rows at `level` (the level before the clear).
#[must_use]
pub fn line_score(lines: usize, level: u32) -> u64 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)] * (u64::from(level) + 1)
}

/// Level reached after `total_lines` cleared lines.
#[must_use]
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Milliseconds between gravity ticks: `max(50, 1000 - level * 50)`.
#[must_use]
pub fn drop_interval_ms(level: u32) -> u64 {
    BASE_INTERVAL_MS
        .saturating_sub(u64::from(level) * INTERVAL_STEP_MS)
        .max(MIN_INTERVAL_MS)
}

#[must_use]
pub fn drop_interval(level: u32) -> Duration {
    Duration::from_millis(drop_interval_ms(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_score(0, 0), 0);
        assert_eq!(line_score(1, 0), 40);
        assert_eq!(line_score(4, 0), 1200);
        assert_eq!(line_score(2, 1), 200);
        assert_eq!(line_score(3, 9), 3000);
    }

    #[test]
    fn test_levels() {
        assert_eq!(level_for_lines(0), 0);
        assert_eq!(level_for_lines(9), 0);
        assert_eq!(level_for_lines(10), 1);
        assert_eq!(level_for_lines(125), 12);
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_ms(0), 1000);
        assert_eq!(drop_interval_ms(1), 950);
        assert_eq!(drop_interval_ms(18), 100);
        assert_eq!(drop_interval_ms(19), 50);
        assert_eq!(drop_interval_ms(25), 50);
        assert_eq!(drop_interval(u32::MAX), Duration::from_millis(50));
        assert_eq!(drop_interval(2), Duration::from_millis(900));
    }
}
