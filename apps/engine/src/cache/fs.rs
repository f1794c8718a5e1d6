//! Filesystem-backed audio cache.

use super::AudioCache;
use std::path::PathBuf;
use uuid::Uuid;
use vocab_core::CacheKey;

/// Cache directory of files named `{provider}_{voice}_{prefix}_{unique}.mp3`.
///
/// Concurrent writes for the same logical key produce distinct files; a
/// duplicate write is wasteful but never corrupting.
pub struct FsAudioCache {
    dir: PathBuf,
}

impl FsAudioCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl AudioCache for FsAudioCache {
    fn get(&self, key: &CacheKey) -> Option<String> {
        // Include the separator so "gato" never matches a "gatos" artifact.
        let prefix = format!("{}_", key.file_prefix());

        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Audio cache directory unavailable: {}", e);
                return None;
            }
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(&prefix) {
                return Some(self.dir.join(name.as_ref()).to_string_lossy().into_owned());
            }
        }

        None
    }

    fn put(&self, key: &CacheKey, bytes: &[u8]) -> Option<String> {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!("Cannot create audio cache directory: {}", e);
            return None;
        }

        let suffix = Uuid::new_v4().simple().to_string();
        let path = self
            .dir
            .join(format!("{}_{}.mp3", key.file_prefix(), &suffix[..8]));

        match std::fs::write(&path, bytes) {
            Ok(()) => {
                tracing::info!("Cached synthesized audio: {}", path.display());
                Some(path.to_string_lossy().into_owned())
            }
            Err(e) => {
                tracing::warn!("Failed to write audio cache entry: {}", e);
                None
            }
        }
    }
}
