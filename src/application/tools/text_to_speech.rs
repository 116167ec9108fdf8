use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::{TextToSpeechService, ToolResponse};

use super::tool::{Tool, ToolContext, parse_params};

pub const TEXT_TO_SPEECH_TOOL: &str = "sarvam_text_to_speech";
pub const TEXT_TO_SPEECH_FAILED: &str = "text_to_speech_failed";

#[derive(Debug, Deserialize)]
pub struct TextToSpeechArgs {
    pub text: String,
    pub target_language_code: String,
    #[serde(default)]
    pub speaker: Option<String>,
}

pub struct TextToSpeechTool {
    service: Arc<TextToSpeechService>,
}

impl TextToSpeechTool {
    pub fn new(service: Arc<TextToSpeechService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for TextToSpeechTool {
    fn name(&self) -> &str {
        TEXT_TO_SPEECH_TOOL
    }

    fn description(&self) -> &str {
        "Converts text to speech using Sarvam API. Returns base64 WAV audio in the response."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to synthesize"
                },
                "target_language_code": {
                    "type": "string",
                    "description": "Target language code, e.g. hi-IN, en-IN, ta-IN"
                },
                "speaker": {
                    "type": "string",
                    "description": "Voice name to use for synthesis. Default: manisha"
                }
            },
            "required": ["text", "target_language_code"]
        })
    }

    async fn execute(&self, params: serde_json::Value, _ctx: &ToolContext) -> ToolResponse {
        let args: TextToSpeechArgs = match parse_params(params, TEXT_TO_SPEECH_FAILED) {
            Ok(args) => args,
            Err(response) => return response,
        };

        match self
            .service
            .synthesize(
                &args.text,
                &args.target_language_code,
                args.speaker.as_deref(),
            )
            .await
        {
            Ok(speech) => ToolResponse::success(speech),
            Err(e) => ToolResponse::error(TEXT_TO_SPEECH_FAILED, e.http_status(), e.to_string()),
        }
    }
}
