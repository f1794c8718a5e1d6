//! Audio source resolution for vocabulary words.

use crate::cache::AudioCache;
use crate::tone::ToneGenerator;
use crate::tts::{ProviderChain, DEFAULT_VOICE};
use uuid::Uuid;
use vocab_core::{normalize_word, AudioResolution, CacheKey, PreRecordedCatalog};

/// Decides, per word, which audio acquisition strategy to use.
///
/// Priority order: explicit caller-supplied source, bundled recording,
/// cached synthesis, live synthesis, acknowledgement tone. Every branch
/// terminates in a playable result; `resolve` never fails.
pub struct AudioResolver {
    catalog: PreRecordedCatalog,
    cache: Box<dyn AudioCache>,
    chain: ProviderChain,
    tone: Box<dyn ToneGenerator>,
}

impl AudioResolver {
    pub fn new(
        catalog: PreRecordedCatalog,
        cache: Box<dyn AudioCache>,
        chain: ProviderChain,
        tone: Box<dyn ToneGenerator>,
    ) -> Self {
        Self {
            catalog,
            cache,
            chain,
            tone,
        }
    }

    /// Resolve a word to playable audio.
    ///
    /// A failed resolution is final for this call; the caller may resolve
    /// again to retry. The resolver does not deduplicate concurrent
    /// requests for the same word; at-most-one-in-flight is the caller's
    /// concern.
    pub async fn resolve(&self, word: &str, explicit_src: Option<&str>) -> AudioResolution {
        if let Some(src) = explicit_src {
            return AudioResolution::PreRecorded {
                path: src.to_string(),
            };
        }

        let normalized = normalize_word(word);

        if let Some(path) = self.catalog.lookup(&normalized) {
            return AudioResolution::PreRecorded {
                path: path.to_string(),
            };
        }

        // Earlier sessions may have synthesized via any provider in the
        // chain, so consult each identity in priority order.
        for provider in self.chain.provider_names() {
            let key = CacheKey::new(provider, DEFAULT_VOICE, &normalized);
            if let Some(path) = self.cache.get(&key) {
                return AudioResolution::Cached {
                    path,
                    provider: provider.to_string(),
                };
            }
        }

        match self.chain.synthesize(&normalized, DEFAULT_VOICE).await {
            Ok(audio) => {
                let key = CacheKey::new(audio.provider, DEFAULT_VOICE, &normalized);
                let stored = self
                    .cache
                    .put(&key, &audio.bytes)
                    .or_else(|| spill_to_temp(&key, &audio.bytes));

                match stored {
                    Some(path) => AudioResolution::Synthesized {
                        path,
                        provider: audio.provider.to_string(),
                    },
                    None => {
                        // Nowhere to park the bytes; acknowledge audibly.
                        tracing::warn!("Synthesized audio for '{}' could not be stored", normalized);
                        self.tone.play();
                        AudioResolution::SyntheticTone
                    }
                }
            }
            Err(e) => {
                tracing::warn!("No pronunciation available for '{}': {}", normalized, e);
                self.tone.play();
                AudioResolution::SyntheticTone
            }
        }
    }
}

/// Best-effort fallback when the cache cannot store a fresh synthesis
/// result: the caller still needs a playable location for bytes we already
/// paid a provider for.
fn spill_to_temp(key: &CacheKey, bytes: &[u8]) -> Option<String> {
    let path = std::env::temp_dir().join(format!(
        "{}_{}.mp3",
        key.file_prefix(),
        Uuid::new_v4().simple()
    ));

    match std::fs::write(&path, bytes) {
        Ok(()) => Some(path.to_string_lossy().into_owned()),
        Err(e) => {
            tracing::warn!("Failed to spill synthesized audio to temp file: {}", e);
            None
        }
    }
}
