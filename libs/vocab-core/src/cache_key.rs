//! Cache key composition for generated pronunciation audio.
//!
//! Keys combine provider identity, voice identity, and a truncated prefix of
//! the normalized text. The truncation bounds key length and deliberately
//! lets near-duplicate short items share a stored artifact; distinct long
//! texts that agree on the first [`TEXT_PREFIX_CHARS`] characters collide.

use serde::{Deserialize, Serialize};

/// Number of normalized characters of the source text kept in the key.
pub const TEXT_PREFIX_CHARS: usize = 20;

/// Identity of a stored synthesis artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub provider: String,
    pub voice: String,
    pub text_prefix: String,
}

impl CacheKey {
    pub fn new(provider: &str, voice: &str, text: &str) -> Self {
        Self {
            provider: provider.to_string(),
            voice: voice.to_string(),
            text_prefix: text_prefix(text),
        }
    }

    /// Filename stem shared by every artifact stored under this key.
    ///
    /// Writers append a unique suffix to this stem; readers match on it.
    pub fn file_prefix(&self) -> String {
        format!("{}_{}_{}", self.provider, self.voice, self.text_prefix)
    }
}

/// Normalize text into a bounded, filename-safe prefix.
///
/// Lowercases, trims, maps anything that is not alphanumeric to `_`, and
/// keeps at most [`TEXT_PREFIX_CHARS`] characters. Alphanumeric includes
/// accented letters, so diacritics survive.
pub fn text_prefix(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(TEXT_PREFIX_CHARS)
        .collect()
}
