use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::DigitizedDocument;

use super::digitization_error::DigitizationFailure;

pub const MAX_CONTENT_CHARS: usize = 5000;
pub const TRUNCATION_MARKER: &str = "\n\n... [truncated]";
pub const DIGITIZE_DOCUMENT_FAILED: &str = "digitize_document_failed";

/// Uniform payload every tool hands back to the agent.
///
/// Serializes as `{"status": "success", ...fields}` or
/// `{"status": "error", "error_code", "http_status", "message", ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResponse {
    Success(Map<String, Value>),
    Error(ToolErrorPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolErrorPayload {
    pub error_code: String,
    pub http_status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

impl ToolResponse {
    pub fn success<T: Serialize>(output: T) -> Self {
        match serde_json::to_value(output) {
            Ok(Value::Object(fields)) => ToolResponse::Success(fields),
            Ok(other) => {
                let mut fields = Map::new();
                fields.insert("result".to_string(), other);
                ToolResponse::Success(fields)
            }
            Err(e) => ToolResponse::error("response_serialization_failed", 500, e.to_string()),
        }
    }

    pub fn error(error_code: &str, http_status: u16, message: impl Into<String>) -> Self {
        ToolResponse::Error(ToolErrorPayload {
            error_code: error_code.to_string(),
            http_status,
            message: message.into(),
            error_kind: None,
            job_id: None,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolResponse::Success(_))
    }

    pub fn status(&self) -> &'static str {
        match self {
            ToolResponse::Success(_) => "success",
            ToolResponse::Error(_) => "error",
        }
    }

    /// Field lookup on the serialized form, `status` included.
    pub fn field(&self, name: &str) -> Option<Value> {
        match self.to_value() {
            Value::Object(mut fields) => fields.remove(name),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut fields = match self {
            ToolResponse::Success(fields) => fields.clone(),
            ToolResponse::Error(payload) => match serde_json::to_value(payload) {
                Ok(Value::Object(fields)) => fields,
                _ => Map::new(),
            },
        };
        fields.insert("status".to_string(), Value::from(self.status()));
        Value::Object(fields)
    }
}

impl Serialize for ToolResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Caps content at [`MAX_CONTENT_CHARS`] characters, appending [`TRUNCATION_MARKER`] when cut.
pub fn truncate_content(content: &str) -> String {
    match content.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], TRUNCATION_MARKER),
        None => content.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct DigitizeDocumentOutput {
    pub job_id: String,
    pub job_state: String,
    pub content: String,
    pub content_length: usize,
    pub output_format: String,
}

impl From<&DigitizedDocument> for DigitizeDocumentOutput {
    fn from(document: &DigitizedDocument) -> Self {
        Self {
            job_id: document.job_id.to_string(),
            job_state: document.job_state.clone(),
            content: truncate_content(&document.content),
            content_length: document.content_length(),
            output_format: document.output_format.to_string(),
        }
    }
}

pub fn format_digitization(outcome: Result<DigitizedDocument, DigitizationFailure>) -> ToolResponse {
    match outcome {
        Ok(document) => ToolResponse::success(DigitizeDocumentOutput::from(&document)),
        Err(failure) => ToolResponse::Error(ToolErrorPayload {
            error_code: DIGITIZE_DOCUMENT_FAILED.to_string(),
            http_status: failure.http_status(),
            message: failure.error.to_string(),
            error_kind: Some(failure.kind().as_str().to_string()),
            job_id: failure.job_id.map(|id| id.to_string()),
        }),
    }
}
