//! Best-effort cache for generated pronunciation audio.
//!
//! Lookups match on the key prefix: any artifact stored for the same
//! provider + voice + text prefix is a hit, regardless of the unique suffix
//! appended at write time. Storage failures degrade to a miss on `get` and
//! a no-op on `put`; callers never depend on the cache for correctness.

pub mod fs;
pub mod memory;

pub use fs::FsAudioCache;
pub use memory::MemoryAudioCache;

use vocab_core::CacheKey;

/// Key-value store for synthesized audio artifacts.
pub trait AudioCache: Send + Sync {
    /// Location of any one stored artifact matching the key, or miss.
    ///
    /// When several artifacts match, which one is returned is
    /// implementation-defined.
    fn get(&self, key: &CacheKey) -> Option<String>;

    /// Store audio under a uniquely-suffixed location for this key.
    ///
    /// Returns the stored location, or `None` when storage is unavailable.
    fn put(&self, key: &CacheKey, bytes: &[u8]) -> Option<String>;
}
