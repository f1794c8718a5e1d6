//! Bundled pre-recorded pronunciation catalog.

use crate::word::normalize_word;
use std::collections::HashMap;

/// Curated recordings shipped with the application bundle.
///
/// Keys are already normalized; paths are relative to the static assets root.
const BUNDLED: &[(&str, &str)] = &[
    // Colors
    ("rojo", "/audio/colors/rojo.mp3"),
    ("azul", "/audio/colors/azul.mp3"),
    ("verde", "/audio/colors/verde.mp3"),
    ("amarillo", "/audio/colors/amarillo.mp3"),
    ("negro", "/audio/colors/negro.mp3"),
    ("blanco", "/audio/colors/blanco.mp3"),
    ("naranja", "/audio/colors/naranja.mp3"),
    // Numbers
    ("uno", "/audio/numbers/uno.mp3"),
    ("dos", "/audio/numbers/dos.mp3"),
    ("tres", "/audio/numbers/tres.mp3"),
    ("cuatro", "/audio/numbers/cuatro.mp3"),
    ("cinco", "/audio/numbers/cinco.mp3"),
    ("seis", "/audio/numbers/seis.mp3"),
    ("siete", "/audio/numbers/siete.mp3"),
    ("ocho", "/audio/numbers/ocho.mp3"),
    ("nueve", "/audio/numbers/nueve.mp3"),
    ("diez", "/audio/numbers/diez.mp3"),
    // Greetings and phrases
    ("hola", "/audio/phrases/hola.mp3"),
    ("adiós", "/audio/phrases/adios.mp3"),
    ("gracias", "/audio/phrases/gracias.mp3"),
    ("por favor", "/audio/phrases/por_favor.mp3"),
    ("buenos días", "/audio/phrases/buenos_dias.mp3"),
    ("buenas noches", "/audio/phrases/buenas_noches.mp3"),
    // Animals
    ("perro", "/audio/animals/perro.mp3"),
    ("gato", "/audio/animals/gato.mp3"),
    ("pájaro", "/audio/animals/pajaro.mp3"),
];

/// Read-only mapping of normalized word to bundled audio path.
///
/// A hit here never touches the network or the cache.
#[derive(Debug, Clone)]
pub struct PreRecordedCatalog {
    entries: HashMap<String, String>,
}

impl PreRecordedCatalog {
    /// Catalog of recordings shipped with the application.
    pub fn bundled() -> Self {
        Self::from_entries(BUNDLED.iter().map(|&(w, p)| (w.to_string(), p.to_string())))
    }

    /// Build a catalog from arbitrary entries. Keys are normalized on insert.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, path)| (normalize_word(&word), path))
                .collect(),
        }
    }

    /// An empty catalog (every lookup misses).
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Look up the bundled recording for a word, normalizing first.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(&normalize_word(word)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
