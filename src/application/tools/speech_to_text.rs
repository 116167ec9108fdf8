use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::{SpeechToTextService, ToolResponse, resolve_audio};

use super::tool::{Tool, ToolContext, parse_params};

pub const SPEECH_TO_TEXT_TOOL: &str = "sarvam_speech_to_text";
pub const SPEECH_TO_TEXT_FAILED: &str = "speech_to_text_failed";

#[derive(Debug, Default, Deserialize)]
pub struct SpeechToTextArgs {
    #[serde(default)]
    pub audio_data_base64: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

pub struct SpeechToTextTool {
    service: Arc<SpeechToTextService>,
}

impl SpeechToTextTool {
    pub fn new(service: Arc<SpeechToTextService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for SpeechToTextTool {
    fn name(&self) -> &str {
        SPEECH_TO_TEXT_TOOL
    }

    fn description(&self) -> &str {
        "Converts speech to text using Sarvam API. Uses uploaded audio if present, otherwise \
         reads base64 audio input."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "audio_data_base64": {
                    "type": "string",
                    "description": "Optional base64-encoded audio data (wav/mp3/ogg/webm/flac)."
                },
                "language_code": {
                    "type": "string",
                    "description": "Optional language code. Default: unknown"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, params: serde_json::Value, ctx: &ToolContext) -> ToolResponse {
        let args: SpeechToTextArgs = match parse_params(params, SPEECH_TO_TEXT_FAILED) {
            Ok(args) => args,
            Err(response) => return response,
        };

        let audio = match resolve_audio(args.audio_data_base64.as_deref(), &ctx.attachments) {
            Ok(Some(audio)) if !audio.is_empty() => audio,
            Ok(_) => {
                return ToolResponse::error(
                    SPEECH_TO_TEXT_FAILED,
                    400,
                    "No audio input provided. Upload audio or pass audio_data_base64.",
                );
            }
            Err(e) => return ToolResponse::error(SPEECH_TO_TEXT_FAILED, 400, e.to_string()),
        };

        match self
            .service
            .transcribe(&audio, args.language_code.as_deref())
            .await
        {
            Ok(transcript) => ToolResponse::success(transcript),
            Err(e) => ToolResponse::error(SPEECH_TO_TEXT_FAILED, e.http_status(), e.to_string()),
        }
    }
}
