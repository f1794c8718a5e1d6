//! Leveled spaced repetition scheduling.
//!
//! Six mastery levels with fixed review intervals. Each correct answer
//! moves a card up one level, each incorrect answer moves it down one,
//! clamped to [0, MAX_LEVEL].

use crate::types::ReviewOutcome;
use chrono::{DateTime, Duration, Utc};

/// Highest mastery level a card can reach.
pub const MAX_LEVEL: u8 = 5;

/// Result of scheduling a card after a review.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    pub level: u8,
    pub next_review_at: DateTime<Utc>,
}

/// Trait for review schedulers.
pub trait ReviewScheduler: Send + Sync {
    /// Scheduler identifier.
    fn name(&self) -> &'static str;

    /// Apply a review outcome to the current level.
    fn schedule(&self, level: u8, outcome: ReviewOutcome, now: DateTime<Utc>) -> ScheduleResult;
}

/// Fixed-interval leveled scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeveledScheduler;

impl LeveledScheduler {
    /// Review interval for a mastery level. Level 0 is due immediately.
    ///
    /// The interval is a strictly increasing function of the level, so
    /// `next_review_at` never moves closer for a higher level.
    pub fn interval_for(level: u8) -> Duration {
        match level {
            0 => Duration::zero(),
            1 => Duration::hours(1),
            2 => Duration::hours(6),
            3 => Duration::days(1),
            4 => Duration::days(3),
            _ => Duration::days(7),
        }
    }
}

impl ReviewScheduler for LeveledScheduler {
    fn name(&self) -> &'static str {
        "leveled"
    }

    fn schedule(&self, level: u8, outcome: ReviewOutcome, now: DateTime<Utc>) -> ScheduleResult {
        let level = match outcome {
            ReviewOutcome::Correct => (level + 1).min(MAX_LEVEL),
            ReviewOutcome::Incorrect => level.saturating_sub(1),
        };

        ScheduleResult {
            level,
            next_review_at: now + Self::interval_for(level),
        }
    }
}
