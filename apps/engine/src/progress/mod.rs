//! Flashcard progress tracking and persistence.

pub mod store;

pub use store::{ProgressError, ProgressStore, SqliteProgressStore};

use chrono::Utc;
use vocab_core::{FlashcardProgress, LeveledScheduler, ReviewOutcome, ReviewScheduler};

/// Records reviews and keeps per-flashcard progress persisted.
///
/// Unlike the audio path, store failures are returned to the caller:
/// silently dropping a progress write would corrupt the review schedule.
pub struct ProgressTracker {
    store: Box<dyn ProgressStore>,
    scheduler: Box<dyn ReviewScheduler>,
}

impl ProgressTracker {
    pub fn new(store: Box<dyn ProgressStore>) -> Self {
        Self {
            store,
            scheduler: Box::new(LeveledScheduler),
        }
    }

    pub fn with_scheduler(
        store: Box<dyn ProgressStore>,
        scheduler: Box<dyn ReviewScheduler>,
    ) -> Self {
        Self { store, scheduler }
    }

    /// Record a review outcome for a flashcard.
    ///
    /// A card with no prior progress starts at level 0, so the very first
    /// review already moves the level. The updated progress is persisted
    /// before returning.
    pub fn record_review(
        &self,
        flashcard_id: &str,
        outcome: ReviewOutcome,
    ) -> Result<FlashcardProgress, ProgressError> {
        let now = Utc::now();
        let prior_level = self
            .store
            .get(flashcard_id)?
            .map(|p| p.level)
            .unwrap_or(0);

        let result = self.scheduler.schedule(prior_level, outcome, now);
        let progress = FlashcardProgress {
            flashcard_id: flashcard_id.to_string(),
            level: result.level,
            next_review_at: result.next_review_at,
            last_reviewed_at: Some(now),
        };

        self.store.save(&progress)?;
        tracing::debug!(
            "Recorded review for {}: level {} -> {}",
            flashcard_id,
            prior_level,
            progress.level
        );

        Ok(progress)
    }

    /// Current progress for a card, if it has ever been reviewed.
    pub fn progress(&self, flashcard_id: &str) -> Result<Option<FlashcardProgress>, ProgressError> {
        self.store.get(flashcard_id)
    }

    /// Full progress map, for loading at session start.
    pub fn all_progress(&self) -> Result<Vec<FlashcardProgress>, ProgressError> {
        self.store.all()
    }

    /// Cards currently eligible for review.
    pub fn due_cards(&self) -> Result<Vec<FlashcardProgress>, ProgressError> {
        self.store.due(Utc::now())
    }

    /// Delete progress for the given cards, or everything when `ids` is
    /// `None`. Terminal; there is no undo.
    pub fn reset_progress(&self, ids: Option<&[&str]>) -> Result<usize, ProgressError> {
        let removed = match ids {
            Some(ids) => self.store.delete(ids)?,
            None => self.store.clear()?,
        };

        tracing::info!("Reset progress for {} flashcards", removed);
        Ok(removed)
    }
}
