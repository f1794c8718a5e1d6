//! ElevenLabs neural voice synthesis.

use super::{SynthesizedAudio, TtsError, TtsProvider, DEFAULT_VOICE};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

const MODEL_ID: &str = "eleven_multilingual_v2";

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

/// Neural voice service. JSON request keyed by voice id, MP3 bytes back.
pub struct ElevenLabsProvider {
    client: Client,
    key: Option<String>,
}

impl ElevenLabsProvider {
    pub fn new(key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            key,
        }
    }

    fn voice_id(voice: &str) -> &str {
        match voice {
            // "Sarah", multilingual, handles Spanish well
            DEFAULT_VOICE => "EXAVITQu4vr4xnSDxMaL",
            other => other,
        }
    }
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    fn name(&self) -> &'static str {
        "elevenlabs"
    }

    fn is_configured(&self) -> bool {
        self.key.is_some()
    }

    async fn synthesize(&self, text: &str, voice: &str) -> Result<SynthesizedAudio, TtsError> {
        let key = self
            .key
            .as_deref()
            .ok_or(TtsError::NotConfigured("elevenlabs"))?;

        let url = format!(
            "https://api.elevenlabs.io/v1/text-to-speech/{}",
            Self::voice_id(voice)
        );
        let request = SynthesisRequest {
            text,
            model_id: MODEL_ID,
        };

        let resp = self
            .client
            .post(&url)
            .header("xi-api-key", key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TtsError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TtsError::Provider { status, message });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| TtsError::Network(e.to_string()))?
            .to_vec();

        if bytes.is_empty() {
            return Err(TtsError::Malformed("empty audio body".to_string()));
        }

        Ok(SynthesizedAudio {
            provider: "elevenlabs",
            bytes,
            media_type: "audio/mpeg",
        })
    }
}
