//! Word normalization for audio lookups.

/// Normalize a vocabulary word for catalog and cache lookups.
///
/// Lowercases and trims surrounding whitespace. Diacritics are preserved:
/// "adiós" and "adios" are distinct words with distinct pronunciations.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}
