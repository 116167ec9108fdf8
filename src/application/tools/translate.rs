use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::{ToolResponse, TranslationService};

use super::tool::{Tool, ToolContext, parse_params};

pub const TRANSLATE_TOOL: &str = "sarvam_translate";
pub const TRANSLATE_FAILED: &str = "translate_failed";

#[derive(Debug, Deserialize)]
pub struct TranslateArgs {
    pub input: String,
    pub target_language_code: String,
    #[serde(default)]
    pub source_language_code: Option<String>,
}

pub struct TranslateTool {
    service: Arc<TranslationService>,
}

impl TranslateTool {
    pub fn new(service: Arc<TranslationService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for TranslateTool {
    fn name(&self) -> &str {
        TRANSLATE_TOOL
    }

    fn description(&self) -> &str {
        "Translates text using Sarvam API. Source language defaults to auto."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "input": {
                    "type": "string",
                    "description": "Text to translate"
                },
                "target_language_code": {
                    "type": "string",
                    "description": "Target language code"
                },
                "source_language_code": {
                    "type": "string",
                    "description": "Source language code. Default: auto"
                }
            },
            "required": ["input", "target_language_code"]
        })
    }

    async fn execute(&self, params: serde_json::Value, _ctx: &ToolContext) -> ToolResponse {
        let args: TranslateArgs = match parse_params(params, TRANSLATE_FAILED) {
            Ok(args) => args,
            Err(response) => return response,
        };

        match self
            .service
            .translate(
                &args.input,
                &args.target_language_code,
                args.source_language_code.as_deref(),
            )
            .await
        {
            Ok(translation) => ToolResponse::success(translation),
            Err(e) => ToolResponse::error(TRANSLATE_FAILED, e.http_status(), e.to_string()),
        }
    }
}
