//! Text-to-speech provider chain.
//!
//! An ordered list of interchangeable synthesis backends tried in sequence
//! until one succeeds. Unconfigured providers are skipped; failures are
//! logged and the next provider attempted. A single pass per invocation,
//! no retries.

pub mod azure;
pub mod elevenlabs;
pub mod gemini;

pub use azure::AzureProvider;
pub use elevenlabs::ElevenLabsProvider;
pub use gemini::GeminiProvider;

use crate::config::EngineConfig;
use async_trait::async_trait;

/// Logical voice used when the caller gives no hint. Each provider maps
/// this to its own default Spanish voice.
pub const DEFAULT_VOICE: &str = "es-female-1";

/// Synthesis errors.
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("provider {0} is not configured")]
    NotConfigured(&'static str),

    #[error("network error: {0}")]
    Network(String),

    #[error("provider error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("all providers failed: {last_error}")]
    Exhausted { last_error: String },
}

/// Synthesized audio normalized to a common shape.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub provider: &'static str,
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
}

/// A speech synthesis backend.
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Provider identifier, also used in cache keys.
    fn name(&self) -> &'static str;

    /// Whether the credential this provider needs is present.
    fn is_configured(&self) -> bool;

    /// Synthesize `text` with the given voice hint.
    async fn synthesize(&self, text: &str, voice: &str) -> Result<SynthesizedAudio, TtsError>;
}

/// Ordered chain of providers.
pub struct ProviderChain {
    providers: Vec<Box<dyn TtsProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Box<dyn TtsProvider>>) -> Self {
        Self { providers }
    }

    /// The fixed production chain: Azure, then ElevenLabs, then Gemini.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(vec![
            Box::new(AzureProvider::new(
                config.azure_key.clone(),
                config.azure_region.clone(),
            )),
            Box::new(ElevenLabsProvider::new(config.elevenlabs_key.clone())),
            Box::new(GeminiProvider::new(config.gemini_key.clone())),
        ])
    }

    /// Provider identities in priority order.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Names of the providers that currently have credentials.
    pub fn configured(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .filter(|p| p.is_configured())
            .map(|p| p.name())
            .collect()
    }

    /// Try each provider in order, returning the first success.
    ///
    /// Exhaustion returns the last error observed, not an aggregation.
    pub async fn synthesize(
        &self,
        text: &str,
        voice: &str,
    ) -> Result<SynthesizedAudio, TtsError> {
        let mut last_error = "no providers configured".to_string();

        for provider in &self.providers {
            if !provider.is_configured() {
                tracing::debug!("Skipping unconfigured TTS provider: {}", provider.name());
                continue;
            }

            match provider.synthesize(text, voice).await {
                Ok(audio) => {
                    tracing::info!("Synthesized '{}' via {}", text, provider.name());
                    return Ok(audio);
                }
                Err(e) => {
                    tracing::warn!("TTS provider {} failed: {}", provider.name(), e);
                    last_error = e.to_string();
                }
            }
        }

        Err(TtsError::Exhausted { last_error })
    }
}
