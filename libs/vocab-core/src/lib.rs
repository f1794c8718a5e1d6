//! Core vocabulary library shared by the audio engine.
//!
//! Provides:
//! - Word normalization for audio lookups
//! - Leveled spaced repetition scheduling
//! - Cache key composition for generated pronunciation audio
//! - Bundled pre-recorded pronunciation catalog
//! - Shared types (AudioResolution, FlashcardProgress, etc.)

pub mod cache_key;
pub mod catalog;
pub mod schedule;
pub mod types;
pub mod word;

pub use cache_key::{CacheKey, TEXT_PREFIX_CHARS};
pub use catalog::PreRecordedCatalog;
pub use schedule::{LeveledScheduler, ReviewScheduler, ScheduleResult, MAX_LEVEL};
pub use types::{AudioResolution, FlashcardProgress, ReviewOutcome};
pub use word::normalize_word;
