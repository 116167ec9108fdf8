use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::ports::{HttpTransport, TransportRequest};

use super::api_call::{ApiCallError, parse_json, send_checked};

pub const TEXT_TO_SPEECH_PATH: &str = "/text-to-speech";
pub const DEFAULT_SPEAKER: &str = "manisha";
const UNKNOWN_REQUEST_ID: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesizedSpeech {
    pub request_id: String,
    pub audio_base64: String,
    pub target_language_code: String,
    pub speaker: String,
}

#[derive(Debug, Deserialize)]
pub struct TextToSpeechResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub audios: Vec<String>,
}

pub struct TextToSpeechService {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl TextToSpeechService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Synthesizes `text` as WAV audio, returned base64-encoded.
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn synthesize(
        &self,
        text: &str,
        target_language_code: &str,
        speaker: Option<&str>,
    ) -> Result<SynthesizedSpeech, ApiCallError> {
        let speaker = speaker
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_SPEAKER);

        let request = TransportRequest::post(format!("{}{}", self.base_url, TEXT_TO_SPEECH_PATH))
            .json(json!({
                "text": text,
                "target_language_code": target_language_code,
                "speaker": speaker,
            }));
        let response = send_checked(self.transport.as_ref(), request).await?;
        let parsed: TextToSpeechResponse = parse_json(&response)?;

        let audio_base64 = parsed
            .audios
            .into_iter()
            .next()
            .ok_or_else(|| ApiCallError::Upstream {
                status: response.status,
                message: "No audio returned by Sarvam API".to_string(),
            })?;

        tracing::info!(audio_chars = audio_base64.len(), "Speech synthesized");

        Ok(SynthesizedSpeech {
            request_id: parsed
                .request_id
                .unwrap_or_else(|| UNKNOWN_REQUEST_ID.to_string()),
            audio_base64,
            target_language_code: target_language_code.to_string(),
            speaker: speaker.to_string(),
        })
    }
}
