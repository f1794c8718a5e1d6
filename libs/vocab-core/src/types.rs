//! Core types for the vocabulary audio and review engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single flashcard review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Correct,
    Incorrect,
}

impl ReviewOutcome {
    /// Map a correct/incorrect flag to an outcome.
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// How a vocabulary word was resolved to playable audio.
///
/// Exactly one variant is chosen per request. A failed resolution is final
/// for that call; the caller may resolve again to retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AudioResolution {
    /// A bundled recording (or a concrete source supplied by the caller).
    PreRecorded { path: String },
    /// A previously synthesized artifact found in the audio cache.
    Cached { path: String, provider: String },
    /// Freshly synthesized audio, stored for reuse.
    Synthesized { path: String, provider: String },
    /// No real audio could be obtained; a short tone was played instead.
    SyntheticTone,
}

impl AudioResolution {
    /// Location of the playable artifact, if one exists.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::PreRecorded { path }
            | Self::Cached { path, .. }
            | Self::Synthesized { path, .. } => Some(path),
            Self::SyntheticTone => None,
        }
    }
}

/// Per-flashcard mastery state.
///
/// Keyed by flashcard identity, not word text: two cards with identical
/// front text are tracked independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardProgress {
    pub flashcard_id: String,
    /// Mastery level, always within 0..=5.
    pub level: u8,
    /// When the card is next eligible for review. Level 0 is due immediately.
    pub next_review_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl FlashcardProgress {
    /// State of a card that has never been reviewed.
    pub fn unreviewed(flashcard_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            flashcard_id: flashcard_id.into(),
            level: 0,
            next_review_at: now,
            last_reviewed_at: None,
        }
    }

    /// Whether the card is eligible for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }
}
