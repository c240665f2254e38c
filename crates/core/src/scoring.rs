//! Scoring module - sweep points and level/speed progression
//!
//! A sweep that clears `k` rows pays `row_points * (1 + 2 + ... + 2^(k-1))`:
//! the first row is worth `row_points` and each further row in the same sweep
//! doubles the previous one. The doubling restarts with every sweep.
//!
//! Cleared rows also feed a line counter. Once it goes past
//! `lines_per_level` the level goes up by one, gravity speeds up by
//! `level_step_ms` (never below `min_interval_ms`) and the counter restarts.

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_DROP_MS, LEVEL_STEP_MAX_MS, LEVEL_STEP_MIN_MS, LEVEL_STEP_MS, LINES_PER_LEVEL,
    MIN_DROP_MS, ROW_POINTS, START_LEVEL,
};

/// Tunable progression rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub row_points: u32,
    pub lines_per_level: u32,
    pub base_interval_ms: u32,
    pub level_step_ms: u32,
    pub min_interval_ms: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            row_points: ROW_POINTS,
            lines_per_level: LINES_PER_LEVEL,
            base_interval_ms: BASE_DROP_MS,
            level_step_ms: LEVEL_STEP_MS,
            min_interval_ms: MIN_DROP_MS,
        }
    }
}

impl Rules {
    /// Replace the level step, clamped to the accepted 10..=50ms range
    pub fn with_level_step_ms(mut self, step_ms: u32) -> Self {
        self.level_step_ms = step_ms.clamp(LEVEL_STEP_MIN_MS, LEVEL_STEP_MAX_MS);
        self
    }
}

/// Points for a sweep that removed `rows` rows
pub fn sweep_score(rows: usize, row_points: u32) -> u32 {
    let mut multiplier: u32 = 1;
    let mut total: u32 = 0;
    for _ in 0..rows {
        total = total.saturating_add(row_points.saturating_mul(multiplier));
        multiplier = multiplier.saturating_mul(2);
    }
    total
}

/// Next drop interval after a level up
pub fn next_interval_ms(interval_ms: u32, rules: &Rules) -> u32 {
    interval_ms
        .saturating_sub(rules.level_step_ms)
        .max(rules.min_interval_ms)
}

/// Result of recording one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    pub points: u32,
    pub level_up: bool,
}

/// Score, line counter, level and gravity interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    score: u32,
    /// Lines cleared since the last level up
    lines: u32,
    level: u32,
    interval_ms: u32,
}

impl Progression {
    pub fn new(rules: &Rules) -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
            interval_ms: rules.base_interval_ms,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Account for a sweep that removed `rows` rows
    pub fn record_sweep(&mut self, rows: usize, rules: &Rules) -> SweepOutcome {
        let points = sweep_score(rows, rules.row_points);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(rows as u32);

        let level_up = self.lines > rules.lines_per_level;
        if level_up {
            self.level += 1;
            self.interval_ms = next_interval_ms(self.interval_ms, rules);
            self.lines = 0;
        }

        SweepOutcome { points, level_up }
    }

    /// Back to a fresh game
    pub fn reset(&mut self, rules: &Rules) {
        *self = Self::new(rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_score_doubles_per_row() {
        assert_eq!(sweep_score(0, 10), 0);
        assert_eq!(sweep_score(1, 10), 10);
        assert_eq!(sweep_score(2, 10), 30);
        assert_eq!(sweep_score(3, 10), 70);
        assert_eq!(sweep_score(4, 10), 150);
    }

    #[test]
    fn test_sweep_score_saturates() {
        assert_eq!(sweep_score(64, 10), u32::MAX);
    }

    #[test]
    fn test_new_progression() {
        let p = Progression::new(&Rules::default());
        assert_eq!(p.score(), 0);
        assert_eq!(p.lines(), 0);
        assert_eq!(p.level(), 1);
        assert_eq!(p.interval_ms(), 1000);
    }

    #[test]
    fn test_level_up_needs_more_than_threshold() {
        let rules = Rules::default();
        let mut p = Progression::new(&rules);

        for _ in 0..10 {
            assert!(!p.record_sweep(1, &rules).level_up);
        }
        assert_eq!(p.level(), 1);
        assert_eq!(p.lines(), 10);

        let outcome = p.record_sweep(1, &rules);
        assert!(outcome.level_up);
        assert_eq!(p.level(), 2);
        assert_eq!(p.lines(), 0);
        assert_eq!(p.interval_ms(), 950);
    }

    #[test]
    fn test_multi_row_sweep_levels_up_once() {
        let rules = Rules::default();
        let mut p = Progression::new(&rules);
        p.record_sweep(4, &rules);
        p.record_sweep(4, &rules);
        let outcome = p.record_sweep(4, &rules);
        assert!(outcome.level_up);
        assert_eq!(p.level(), 2);
        assert_eq!(p.lines(), 0);
    }

    #[test]
    fn test_interval_floor() {
        let rules = Rules::default();
        let mut interval = rules.base_interval_ms;
        for _ in 0..100 {
            interval = next_interval_ms(interval, &rules);
            assert!(interval >= 100);
        }
        assert_eq!(interval, 100);
    }

    #[test]
    fn test_level_step_is_clamped() {
        assert_eq!(Rules::default().with_level_step_ms(5).level_step_ms, 10);
        assert_eq!(Rules::default().with_level_step_ms(80).level_step_ms, 50);
        assert_eq!(Rules::default().with_level_step_ms(25).level_step_ms, 25);
    }

    #[test]
    fn test_reset() {
        let rules = Rules::default();
        let mut p = Progression::new(&rules);
        for _ in 0..3 {
            p.record_sweep(4, &rules);
        }
        p.reset(&rules);
        assert_eq!(p, Progression::new(&rules));
    }
}
