use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use bytes::Bytes;

use crate::application::services::{
    DEFAULT_DOCUMENT_MIME, DigitizationError, DigitizationFailure, DigitizationOrchestrator,
    ToolResponse, format_digitization, resolve_document,
};
use crate::domain::{LanguageHint, OutputFormat, UploadedBinary, file_name_for_mime};

use super::tool::{Tool, ToolContext, parse_args};

pub const DIGITIZE_DOCUMENT_TOOL: &str = "sarvam_digitize_document";

#[derive(Debug, Default, Deserialize)]
pub struct DigitizeDocumentArgs {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub output_format: Option<String>,
    #[serde(default)]
    pub file_data_base64: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Extracts text from a PDF or image through an asynchronous digitization job.
pub struct DigitizeDocumentTool {
    orchestrator: Arc<DigitizationOrchestrator>,
}

impl DigitizeDocumentTool {
    pub fn new(orchestrator: Arc<DigitizationOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl Tool for DigitizeDocumentTool {
    fn name(&self) -> &str {
        DIGITIZE_DOCUMENT_TOOL
    }

    fn description(&self) -> &str {
        "Digitizes an uploaded document (PDF/image) using Sarvam API and returns extracted text."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "language": {
                    "type": "string",
                    "description": "Document language code. Default: auto"
                },
                "output_format": {
                    "type": "string",
                    "description": "Output format: md or html. Default: md"
                },
                "file_data_base64": {
                    "type": "string",
                    "description": "Optional base64-encoded file bytes (PDF/image)."
                },
                "file_name": {
                    "type": "string",
                    "description": "Optional filename to use for upload."
                },
                "mime_type": {
                    "type": "string",
                    "description": "Optional MIME type."
                }
            },
            "required": []
        })
    }

    fn is_long_running(&self) -> bool {
        true
    }

    #[tracing::instrument(skip_all, fields(tool = DIGITIZE_DOCUMENT_TOOL))]
    async fn execute(&self, params: serde_json::Value, ctx: &ToolContext) -> ToolResponse {
        let args: DigitizeDocumentArgs = match parse_args(params) {
            Ok(args) => args,
            Err(e) => return validation_failure(format!("Invalid parameters: {}", e)),
        };

        let payload = match resolve_document(
            args.file_data_base64.as_deref(),
            args.file_name.as_deref(),
            args.mime_type.as_deref(),
            &ctx.attachments,
        ) {
            Ok(Some(payload)) => payload,
            // The orchestrator rejects an empty payload before any remote call.
            Ok(None) => UploadedBinary::new(
                Bytes::new(),
                file_name_for_mime(DEFAULT_DOCUMENT_MIME),
                None,
            ),
            Err(e) => return validation_failure(e.to_string()),
        };

        let outcome = self
            .orchestrator
            .digitize(
                payload,
                LanguageHint::from_hint(args.language.as_deref()),
                OutputFormat::from_hint(args.output_format.as_deref()),
            )
            .await;

        format_digitization(outcome)
    }
}

/// Input rejected before a job exists, reported with the same shape as pipeline failures.
fn validation_failure(message: String) -> ToolResponse {
    format_digitization(Err(DigitizationFailure::before_job(
        DigitizationError::Validation(message),
    )))
}
