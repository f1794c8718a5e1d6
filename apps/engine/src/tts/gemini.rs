//! Gemini speech generation.
//!
//! The generative-language API returns base64 PCM samples inline; they are
//! decoded and wrapped in a WAV container so the artifact is playable as-is.

use super::{SynthesizedAudio, TtsError, TtsProvider, DEFAULT_VOICE};
use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;

const MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Sample rate of the PCM audio Gemini returns.
const PCM_SAMPLE_RATE: u32 = 24_000;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

/// Speech capability of a generative language model.
pub struct GeminiProvider {
    client: Client,
    key: Option<String>,
}

impl GeminiProvider {
    pub fn new(key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            key,
        }
    }

    fn voice_name(voice: &str) -> &str {
        match voice {
            DEFAULT_VOICE => "Kore",
            other => other,
        }
    }
}

#[async_trait]
impl TtsProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.key.is_some()
    }

    async fn synthesize(&self, text: &str, voice: &str) -> Result<SynthesizedAudio, TtsError> {
        let key = self
            .key
            .as_deref()
            .ok_or(TtsError::NotConfigured("gemini"))?;

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            MODEL
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": text }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": Self::voice_name(voice) }
                    }
                }
            }
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TtsError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TtsError::Provider { status, message });
        }

        let response: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| TtsError::Malformed(e.to_string()))?;

        let encoded = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.inline_data.as_ref())
            .map(|d| d.data.as_str())
            .ok_or_else(|| TtsError::Malformed("no inline audio in response".to_string()))?;

        let pcm = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| TtsError::Malformed(format!("invalid base64 audio: {}", e)))?;

        if pcm.is_empty() {
            return Err(TtsError::Malformed("empty audio body".to_string()));
        }

        Ok(SynthesizedAudio {
            provider: "gemini",
            bytes: wrap_pcm_in_wav(&pcm, PCM_SAMPLE_RATE)?,
            media_type: "audio/wav",
        })
    }
}

/// Wrap raw 16-bit little-endian mono PCM in a WAV container.
fn wrap_pcm_in_wav(pcm: &[u8], sample_rate: u32) -> Result<Vec<u8>, TtsError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(44 + pcm.len()));
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| TtsError::Malformed(format!("wav container: {}", e)))?;
        for sample in pcm.chunks_exact(2) {
            writer
                .write_sample(i16::from_le_bytes([sample[0], sample[1]]))
                .map_err(|e| TtsError::Malformed(format!("wav sample: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| TtsError::Malformed(format!("wav finalize: {}", e)))?;
    }
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unconfigured_without_key() {
        assert!(!GeminiProvider::new(None).is_configured());
    }

    #[test]
    fn wav_header_describes_the_pcm_payload() {
        let pcm = vec![0u8; 480];
        let wav = wrap_pcm_in_wav(&pcm, PCM_SAMPLE_RATE).unwrap();

        assert_eq!(wav.len(), 44 + pcm.len());
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(
            u32::from_le_bytes(wav[24..28].try_into().unwrap()),
            PCM_SAMPLE_RATE
        );
        assert_eq!(
            u32::from_le_bytes(wav[40..44].try_into().unwrap()),
            pcm.len() as u32
        );
    }

    #[test]
    fn wav_round_trips_the_samples() {
        let samples: Vec<i16> = vec![0, 1000, -1000, i16::MAX, i16::MIN];
        let pcm: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

        let wav = wrap_pcm_in_wav(&pcm, PCM_SAMPLE_RATE).unwrap();
        let reader = hound::WavReader::new(Cursor::new(wav)).unwrap();

        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, PCM_SAMPLE_RATE);
        let decoded: Vec<i16> = reader.into_samples().map(Result::unwrap).collect();
        assert_eq!(decoded, samples);
    }
}
