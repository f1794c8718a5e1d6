//! Vocabulary audio resolution and spaced-repetition progress engine.
//!
//! Invoked in-process by UI event handlers; there is no command-line
//! surface. Two independent pieces share this crate:
//!
//! - the audio path: pre-recorded catalog -> cache -> TTS provider chain ->
//!   acknowledgement tone, where every failure degrades to a playable
//!   result, and
//! - the progress path: a leveled spaced-repetition tracker whose store
//!   errors surface to the caller.

pub mod cache;
pub mod config;
pub mod progress;
pub mod resolver;
pub mod tone;
pub mod tts;

pub use cache::{AudioCache, FsAudioCache, MemoryAudioCache};
pub use config::EngineConfig;
pub use progress::{ProgressError, ProgressStore, ProgressTracker, SqliteProgressStore};
pub use resolver::AudioResolver;
pub use tone::{RodioTone, ToneGenerator};
pub use tts::{ProviderChain, SynthesizedAudio, TtsError, TtsProvider, DEFAULT_VOICE};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::PreRecordedCatalog;

/// Shared engine state handed to UI event handlers.
pub struct Engine {
    pub resolver: AudioResolver,
    pub progress: ProgressTracker,
}

impl Engine {
    /// Build the production engine from configuration.
    pub fn new(config: &EngineConfig) -> anyhow::Result<Self> {
        if let Some(parent) = config.progress_db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let chain = ProviderChain::from_config(config);
        tracing::info!("Configured TTS providers: {:?}", chain.configured());

        let resolver = AudioResolver::new(
            PreRecordedCatalog::bundled(),
            Box::new(FsAudioCache::new(&config.tts_cache_dir)),
            chain,
            Box::new(RodioTone),
        );

        let store = SqliteProgressStore::open(&config.progress_db_path)?;
        let progress = ProgressTracker::new(Box::new(store));

        Ok(Self { resolver, progress })
    }

    /// Load `.env`, install tracing, and build the engine from the
    /// environment. Composition root for the embedding application.
    pub fn init() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        init_tracing();
        Self::new(&EngineConfig::from_env())
    }
}

/// Install the global tracing subscriber, honoring RUST_LOG.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
