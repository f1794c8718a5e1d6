//! Azure Cognitive Services speech synthesis.

use super::{SynthesizedAudio, TtsError, TtsProvider, DEFAULT_VOICE};
use async_trait::async_trait;
use reqwest::Client;

const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Managed cloud TTS. Takes SSML, returns MP3 bytes inline.
pub struct AzureProvider {
    client: Client,
    key: Option<String>,
    region: String,
}

impl AzureProvider {
    pub fn new(key: Option<String>, region: String) -> Self {
        Self {
            client: Client::new(),
            key,
            region,
        }
    }

    fn voice_name(voice: &str) -> &str {
        match voice {
            DEFAULT_VOICE => "es-ES-ElviraNeural",
            other => other,
        }
    }
}

#[async_trait]
impl TtsProvider for AzureProvider {
    fn name(&self) -> &'static str {
        "azure"
    }

    fn is_configured(&self) -> bool {
        self.key.is_some()
    }

    async fn synthesize(&self, text: &str, voice: &str) -> Result<SynthesizedAudio, TtsError> {
        let key = self
            .key
            .as_deref()
            .ok_or(TtsError::NotConfigured("azure"))?;

        let url = format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.region
        );
        let ssml = format!(
            "<speak version='1.0' xml:lang='es-ES'><voice name='{}'>{}</voice></speak>",
            Self::voice_name(voice),
            xml_escape(text)
        );

        let resp = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .body(ssml)
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
            provider: "azure",
            bytes,
            media_type: "audio/mpeg",
        })
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
