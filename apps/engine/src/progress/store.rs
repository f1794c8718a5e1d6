//! SQLite-backed progress store.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use vocab_core::{FlashcardProgress, MAX_LEVEL};

type Result<T> = std::result::Result<T, ProgressError>;

/// Progress persistence errors. These surface to the caller; a lost
/// progress write is a correctness bug, not a degraded-UX case.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid stored data: {0}")]
    InvalidData(String),
}

/// Durable store for the per-flashcard progress map.
///
/// Implementations are not required to be `Sync`; callers that share a
/// tracker across threads wrap it in `Arc<Mutex<..>>`.
pub trait ProgressStore: Send {
    fn get(&self, flashcard_id: &str) -> Result<Option<FlashcardProgress>>;
    fn save(&self, progress: &FlashcardProgress) -> Result<()>;
    fn all(&self) -> Result<Vec<FlashcardProgress>>;
    fn due(&self, now: DateTime<Utc>) -> Result<Vec<FlashcardProgress>>;
    /// Delete the named entries, returning how many existed.
    fn delete(&self, ids: &[&str]) -> Result<usize>;
    /// Delete every entry, returning how many existed.
    fn clear(&self) -> Result<usize>;
}

/// Schema for the local progress database.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS flashcard_progress (
    flashcard_id TEXT PRIMARY KEY,
    level INTEGER NOT NULL DEFAULT 0,
    next_review_at TEXT NOT NULL,
    last_reviewed_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_progress_due ON flashcard_progress(next_review_at);
"#;

/// SQLite implementation of the progress store.
pub struct SqliteProgressStore {
    conn: Connection,
}

impl SqliteProgressStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn row_to_progress(row: &rusqlite::Row) -> rusqlite::Result<(String, i64, String, Option<String>)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    }

    fn parse_progress(
        (flashcard_id, level, next_review_at, last_reviewed_at): (String, i64, String, Option<String>),
    ) -> Result<FlashcardProgress> {
        if level < 0 || level > MAX_LEVEL as i64 {
            return Err(ProgressError::InvalidData(format!(
                "level {} for {} outside 0..={}",
                level, flashcard_id, MAX_LEVEL
            )));
        }

        let next_review_at = parse_timestamp(&next_review_at)?;
        let last_reviewed_at = last_reviewed_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(FlashcardProgress {
            flashcard_id,
            level: level as u8,
            next_review_at,
            last_reviewed_at,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ProgressError::InvalidData(format!("bad timestamp '{}': {}", raw, e)))
}

impl ProgressStore for SqliteProgressStore {
    fn get(&self, flashcard_id: &str) -> Result<Option<FlashcardProgress>> {
        self.conn
            .query_row(
                "SELECT flashcard_id, level, next_review_at, last_reviewed_at
                 FROM flashcard_progress WHERE flashcard_id = ?1",
                params![flashcard_id],
                Self::row_to_progress,
            )
            .optional()?
            .map(Self::parse_progress)
            .transpose()
    }

    fn save(&self, progress: &FlashcardProgress) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO flashcard_progress
             (flashcard_id, level, next_review_at, last_reviewed_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                progress.flashcard_id,
                progress.level as i64,
                progress.next_review_at.to_rfc3339(),
                progress.last_reviewed_at.map(|t| t.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    fn all(&self) -> Result<Vec<FlashcardProgress>> {
        let mut stmt = self.conn.prepare(
            "SELECT flashcard_id, level, next_review_at, last_reviewed_at
             FROM flashcard_progress",
        )?;

        let rows = stmt
            .query_map([], Self::row_to_progress)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(Self::parse_progress).collect()
    }

    fn due(&self, now: DateTime<Utc>) -> Result<Vec<FlashcardProgress>> {
        let mut stmt = self.conn.prepare(
            "SELECT flashcard_id, level, next_review_at, last_reviewed_at
             FROM flashcard_progress
             WHERE next_review_at <= ?1
             ORDER BY next_review_at",
        )?;

        let rows = stmt
            .query_map(params![now.to_rfc3339()], Self::row_to_progress)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(Self::parse_progress).collect()
    }

    fn delete(&self, ids: &[&str]) -> Result<usize> {
        let mut removed = 0;
        for id in ids {
            removed += self.conn.execute(
                "DELETE FROM flashcard_progress WHERE flashcard_id = ?1",
                params![id],
            )?;
        }
        Ok(removed)
    }

    fn clear(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM flashcard_progress", [])?;
        Ok(removed)
    }
}
