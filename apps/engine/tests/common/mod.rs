//! Common test doubles for engine integration tests.
//!
//! Provides scripted TTS providers and a silent tone generator so the
//! resolver can be exercised without network access or an audio device.

#![allow(dead_code)]

use async_trait::async_trait;
use palabra_engine::{SynthesizedAudio, ToneGenerator, TtsError, TtsProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scripted TTS provider that counts its invocations.
pub struct MockProvider {
    name: &'static str,
    configured: bool,
    succeeds: bool,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn succeeding(name: &'static str) -> Self {
        Self {
            name,
            configured: true,
            succeeds: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            succeeds: false,
            ..Self::succeeding(name)
        }
    }

    pub fn unconfigured(name: &'static str) -> Self {
        Self {
            configured: false,
            ..Self::succeeding(name)
        }
    }

    /// Handle to the call counter, valid after the provider is boxed.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TtsProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn synthesize(&self, text: &str, _voice: &str) -> Result<SynthesizedAudio, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.succeeds {
            Ok(SynthesizedAudio {
                provider: self.name,
                bytes: format!("audio:{}", text).into_bytes(),
                media_type: "audio/mpeg",
            })
        } else {
            Err(TtsError::Provider {
                status: 503,
                message: format!("{} unavailable", self.name),
            })
        }
    }
}

/// Tone generator that records plays instead of making sound.
#[derive(Default)]
pub struct RecordingTone {
    plays: Arc<AtomicUsize>,
}

impl RecordingTone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the play counter, valid after the generator is boxed.
    pub fn plays(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.plays)
    }
}

impl ToneGenerator for RecordingTone {
    fn play(&self) {
        self.plays.fetch_add(1, Ordering::SeqCst);
    }
}
