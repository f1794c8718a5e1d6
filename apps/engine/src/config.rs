//! Engine configuration from environment variables.

use std::path::PathBuf;

/// Configuration for the audio and progress engine.
///
/// Provider keys are optional: a missing key means that provider reports
/// itself unconfigured and the chain skips it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Azure Cognitive Services speech key.
    pub azure_key: Option<String>,
    /// Azure region, e.g. "eastus".
    pub azure_region: String,
    /// ElevenLabs API key.
    pub elevenlabs_key: Option<String>,
    /// Gemini API key.
    pub gemini_key: Option<String>,
    /// Directory for cached synthesis artifacts.
    pub tts_cache_dir: PathBuf,
    /// SQLite database holding flashcard progress.
    pub progress_db_path: PathBuf,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized vars: AZURE_SPEECH_KEY, AZURE_SPEECH_REGION,
    /// ELEVENLABS_API_KEY, GEMINI_API_KEY, TTS_CACHE_DIR, PROGRESS_DB_PATH.
    pub fn from_env() -> Self {
        let data_dir = default_data_dir();

        Self {
            azure_key: std::env::var("AZURE_SPEECH_KEY").ok(),
            azure_region: std::env::var("AZURE_SPEECH_REGION")
                .unwrap_or_else(|_| "eastus".to_string()),
            elevenlabs_key: std::env::var("ELEVENLABS_API_KEY").ok(),
            gemini_key: std::env::var("GEMINI_API_KEY").ok(),
            tts_cache_dir: std::env::var("TTS_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("tts-cache")),
            progress_db_path: std::env::var("PROGRESS_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("progress.db")),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            azure_key: None,
            azure_region: "eastus".to_string(),
            elevenlabs_key: None,
            gemini_key: None,
            tts_cache_dir: data_dir.join("tts-cache"),
            progress_db_path: data_dir.join("progress.db"),
        }
    }
}

fn default_data_dir() -> PathBuf {
    // App data directory for production, current dir as fallback
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("palabra")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_eastus() {
        let config = EngineConfig::default();
        assert_eq!(config.azure_region, "eastus");
        assert!(config.azure_key.is_none());
    }

    #[test]
    fn default_paths_live_under_the_data_dir() {
        let config = EngineConfig::default();
        assert!(config.tts_cache_dir.ends_with("tts-cache"));
        assert!(config.progress_db_path.ends_with("progress.db"));
    }
}
