//! In-memory audio cache.

use super::AudioCache;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use vocab_core::CacheKey;

/// Session-scoped cache used when durable storage is unavailable, and by
/// tests. Stores bytes keyed by file prefix; locations use a `mem://` scheme.
#[derive(Default)]
pub struct MemoryAudioCache {
    entries: Mutex<HashMap<String, (String, Vec<u8>)>>,
    counter: AtomicU64,
}

impl MemoryAudioCache {
    pub fn new() -> Self {
        Self::default()
    }

    // Best-effort storage must not panic callers; recover the map even if a
    // holder panicked mid-update.
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, (String, Vec<u8>)>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stored bytes for a key, if present. Test hook.
    pub fn bytes(&self, key: &CacheKey) -> Option<Vec<u8>> {
        self.entries().get(&key.file_prefix()).map(|(_, b)| b.clone())
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AudioCache for MemoryAudioCache {
    fn get(&self, key: &CacheKey) -> Option<String> {
        self.entries().get(&key.file_prefix()).map(|(loc, _)| loc.clone())
    }

    fn put(&self, key: &CacheKey, bytes: &[u8]) -> Option<String> {
        let prefix = key.file_prefix();
        let suffix = self.counter.fetch_add(1, Ordering::Relaxed);
        let location = format!("mem://{}_{}", prefix, suffix);

        self.entries()
            .insert(prefix, (location.clone(), bytes.to_vec()));
        Some(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_before_put_hit_after() {
        let cache = MemoryAudioCache::new();
        let key = CacheKey::new("azure", "es-female-1", "uno");

        assert!(cache.get(&key).is_none());
        let location = cache.put(&key, b"audio").expect("put");
        assert_eq!(cache.get(&key).as_deref(), Some(location.as_str()));
        assert_eq!(cache.bytes(&key).as_deref(), Some(b"audio".as_slice()));
    }

    #[test]
    fn survives_a_poisoned_lock() {
        let cache = std::sync::Arc::new(MemoryAudioCache::new());
        let key = CacheKey::new("azure", "es-female-1", "tres");
        cache.put(&key, b"audio").expect("put");

        let poisoner = std::sync::Arc::clone(&cache);
        std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("poison the cache lock");
        })
        .join()
        .unwrap_err();

        assert!(cache.get(&key).is_some());
        cache.put(&key, b"replacement").expect("put after poison");
    }

    #[test]
    fn locations_are_uniquely_suffixed() {
        let cache = MemoryAudioCache::new();
        let key = CacheKey::new("azure", "es-female-1", "dos");

        let first = cache.put(&key, b"a").expect("put");
        let second = cache.put(&key, b"b").expect("put");
        assert_ne!(first, second);
    }
}
