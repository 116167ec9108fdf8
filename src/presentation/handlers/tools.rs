use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::{InlineAttachment, ToolResponse, decode_base64};
use crate::application::tools::{ToolContext, ToolDefinition};
use crate::infrastructure::observability::text_preview;
use crate::presentation::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct InvokeToolRequest {
    #[serde(default)]
    pub arguments: serde_json::Value,
    #[serde(default)]
    pub attachments: Vec<AttachmentPayload>,
}

#[derive(Debug, Deserialize)]
pub struct AttachmentPayload {
    pub mime_type: String,
    pub data_base64: String,
}

#[derive(Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDefinition>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn list_tools_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ToolListResponse {
            tools: state.toolset.definitions(),
        }),
    )
}

#[tracing::instrument(skip(state, request), fields(attachments = request.attachments.len()))]
pub async fn invoke_tool_handler(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    Json(request): Json<InvokeToolRequest>,
) -> impl IntoResponse {
    let Some(tool) = state.toolset.get(&tool_name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Unknown tool: {}", tool_name),
            }),
        )
            .into_response();
    };

    let mut attachments = Vec::with_capacity(request.attachments.len());
    for attachment in request.attachments {
        match decode_base64(&attachment.data_base64) {
            Ok(data) => attachments.push(InlineAttachment::new(attachment.mime_type, data)),
            Err(e) => {
                tracing::warn!(error = %e, mime_type = %attachment.mime_type, "Rejected attachment");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Invalid attachment: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    tracing::info!(
        arguments = %text_preview(&request.arguments.to_string()),
        "Invoking tool"
    );

    let response = tool
        .execute(request.arguments, &ToolContext::with_attachments(attachments))
        .await;

    if let ToolResponse::Error(payload) = &response {
        tracing::warn!(
            error_code = %payload.error_code,
            http_status = payload.http_status,
            "Tool returned an error payload"
        );
    }

    (StatusCode::OK, Json(response)).into_response()
}
