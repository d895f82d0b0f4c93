//! Scoring module - line clear points and level thresholds
//!
//! Points for a clear are the base value for the line count times the current
//! level. Counts outside 1..=4 are worth nothing.

use crate::types::{LEVEL_SCORE_STEP, LINE_SCORES};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Score at which `level` is complete and the next level begins
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_mul(LEVEL_SCORE_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_level_one() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);
        assert_eq!(calculate_line_score(5, 1), 0);
    }

    #[test]
    fn test_line_score_scales_with_level() {
        assert_eq!(calculate_line_score(1, 3), 300);
        assert_eq!(calculate_line_score(4, 7), 5600);
    }

    #[test]
    fn test_level_threshold() {
        assert_eq!(level_threshold(1), 1000);
        assert_eq!(level_threshold(12), 12000);
    }
}
