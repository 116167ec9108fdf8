use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::services::{InlineAttachment, ToolResponse};

/// Per-invocation context handed to a tool by the agent runtime.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    pub attachments: Vec<InlineAttachment>,
}

impl ToolContext {
    pub fn with_attachments(attachments: Vec<InlineAttachment>) -> Self {
        Self { attachments }
    }
}

/// What the agent sees when choosing a tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
    pub long_running: bool,
}

/// A capability the agent can call.
///
/// `execute` never fails outright: every outcome, including bad parameters, is reported through
/// the uniform [`ToolResponse`].
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the accepted parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Long-running tools may hold the call for minutes.
    fn is_long_running(&self) -> bool {
        false
    }

    async fn execute(&self, params: serde_json::Value, ctx: &ToolContext) -> ToolResponse;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
            long_running: self.is_long_running(),
        }
    }
}

/// Deserializes tool parameters, treating `null` as an empty object.
pub(crate) fn parse_args<T: DeserializeOwned>(
    params: serde_json::Value,
) -> Result<T, serde_json::Error> {
    let params = if params.is_null() {
        serde_json::Value::Object(Default::default())
    } else {
        params
    };
    serde_json::from_value(params)
}

/// [`parse_args`] with a mismatch mapped to a 400 error payload.
pub(crate) fn parse_params<T: DeserializeOwned>(
    params: serde_json::Value,
    error_code: &str,
) -> Result<T, ToolResponse> {
    parse_args(params).map_err(|e| {
        ToolResponse::error(error_code, 400, format!("Invalid parameters: {}", e))
    })
}
