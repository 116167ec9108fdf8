use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::ports::{HttpTransport, TransportRequest};

use super::api_call::{ApiCallError, parse_json, send_checked};

pub const TRANSLATE_PATH: &str = "/translate";
pub const AUTO_SOURCE_LANGUAGE: &str = "auto";
const UNKNOWN_REQUEST_ID: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub request_id: String,
    pub translated_text: String,
    pub source_language_code: String,
    pub target_language_code: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub source_language_code: Option<String>,
}

pub struct TranslationService {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl TranslationService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Translates `input`; a blank source language lets the provider detect it.
    pub async fn translate(
        &self,
        input: &str,
        target_language_code: &str,
        source_language_code: Option<&str>,
    ) -> Result<Translation, ApiCallError> {
        let source = source_language_code
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(AUTO_SOURCE_LANGUAGE);

        tracing::debug!(
            chars = input.chars().count(),
            source,
            target = target_language_code,
            "Translating text"
        );

        let request = TransportRequest::post(format!("{}{}", self.base_url, TRANSLATE_PATH))
            .json(json!({
                "input": input,
                "source_language_code": source,
                "target_language_code": target_language_code,
            }));
        let response = send_checked(self.transport.as_ref(), request).await?;
        let parsed: TranslateResponse = parse_json(&response)?;

        Ok(Translation {
            request_id: parsed
                .request_id
                .unwrap_or_else(|| UNKNOWN_REQUEST_ID.to_string()),
            translated_text: parsed.translated_text.unwrap_or_default(),
            source_language_code: parsed
                .source_language_code
                .unwrap_or_else(|| source.to_string()),
            target_language_code: target_language_code.to_string(),
        })
    }
}
