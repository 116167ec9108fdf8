use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::{FormPart, HttpTransport, TransportRequest};
use crate::domain::UploadedBinary;

use super::api_call::{ApiCallError, parse_json, send_checked};

pub const SPEECH_TO_TEXT_PATH: &str = "/speech-to-text";
pub const UNKNOWN_LANGUAGE: &str = "unknown";
const UNKNOWN_REQUEST_ID: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub request_id: String,
    pub transcript: String,
    pub language_code: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeechToTextResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

pub struct SpeechToTextService {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl SpeechToTextService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[tracing::instrument(skip(self, audio), fields(file_name = %audio.file_name(), bytes = audio.len()))]
    pub async fn transcribe(
        &self,
        audio: &UploadedBinary,
        language_code: Option<&str>,
    ) -> Result<Transcript, ApiCallError> {
        if audio.is_empty() {
            return Err(ApiCallError::InvalidInput(
                "No audio input provided. Upload audio or pass audio_data_base64.".to_string(),
            ));
        }

        let language_code = language_code
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(UNKNOWN_LANGUAGE);

        let form = vec![
            FormPart::File {
                name: "file".to_string(),
                file_name: audio.file_name().to_string(),
                mime_type: audio.content_type().to_string(),
                data: audio.bytes().clone(),
            },
            FormPart::Text {
                name: "language_code".to_string(),
                value: language_code.to_string(),
            },
        ];

        tracing::debug!(language_code, "Sending audio for transcription");

        let request = TransportRequest::post(format!("{}{}", self.base_url, SPEECH_TO_TEXT_PATH))
            .multipart(form);
        let response = send_checked(self.transport.as_ref(), request).await?;
        let parsed: SpeechToTextResponse = parse_json(&response)?;

        let transcript = parsed.transcript.unwrap_or_default();
        tracing::info!(chars = transcript.chars().count(), "Transcription completed");

        Ok(Transcript {
            request_id: parsed
                .request_id
                .unwrap_or_else(|| UNKNOWN_REQUEST_ID.to_string()),
            transcript,
            language_code: parsed
                .language_code
                .unwrap_or_else(|| language_code.to_string()),
        })
    }
}
