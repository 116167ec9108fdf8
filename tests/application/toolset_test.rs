use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;

use sarvam_tools::application::ports::{HttpTransport, RequestBody};
use sarvam_tools::application::services::{InlineAttachment, PollPolicy};
use sarvam_tools::application::tools::{
    DIGITIZE_DOCUMENT_TOOL, SPEECH_TO_TEXT_TOOL, SarvamToolset, TEXT_TO_SPEECH_TOOL,
    TRANSLATE_TOOL, ToolContext, ToolsetConfig, ToolsetError,
};

use crate::support::{ScriptedTransport, completed_job_script, toolset};

#[test]
fn given_default_config_when_built_then_exposes_four_tools() {
    let transport = Arc::new(ScriptedTransport::new());

    let toolset = toolset(&transport);

    let names: Vec<String> = toolset
        .definitions()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(
        names,
        vec![
            TEXT_TO_SPEECH_TOOL,
            SPEECH_TO_TEXT_TOOL,
            TRANSLATE_TOOL,
            DIGITIZE_DOCUMENT_TOOL
        ]
    );
    assert_eq!(toolset.all_tools().len(), 4);
}

#[test]
fn given_tools_when_listing_then_only_digitize_is_long_running() {
    let transport = Arc::new(ScriptedTransport::new());

    let toolset = toolset(&transport);

    for definition in toolset.definitions() {
        assert_eq!(
            definition.long_running,
            definition.name == DIGITIZE_DOCUMENT_TOOL,
            "{}",
            definition.name
        );
        assert_eq!(definition.parameters["type"], "object");
    }
}

#[test]
fn given_blank_base_url_when_building_toolset_then_rejected() {
    let transport: Arc<dyn HttpTransport> = Arc::new(ScriptedTransport::new());

    let result = SarvamToolset::new(
        transport,
        ToolsetConfig {
            base_url: "  ".to_string(),
            poll_policy: PollPolicy::default(),
        },
    );

    assert!(matches!(result, Err(ToolsetError::MissingSetting("base_url"))));
}

#[tokio::test]
async fn given_unknown_tool_when_invoking_then_none() {
    let transport = Arc::new(ScriptedTransport::new());
    let toolset = toolset(&transport);

    let response = toolset
        .invoke("sarvam_unknown", json!({}), &ToolContext::default())
        .await;

    assert!(response.is_none());
}

#[tokio::test]
async fn given_no_document_when_digitizing_then_validation_error_without_calls() {
    let transport = Arc::new(ScriptedTransport::new());
    let toolset = toolset(&transport);

    let response = toolset
        .invoke(DIGITIZE_DOCUMENT_TOOL, json!({}), &ToolContext::default())
        .await
        .unwrap();

    assert_eq!(response.field("status"), Some(json!("error")));
    assert_eq!(
        response.field("error_code"),
        Some(json!("digitize_document_failed"))
    );
    assert_eq!(response.field("http_status"), Some(json!(400)));
    assert_eq!(response.field("error_kind"), Some(json!("validation_error")));
    assert_eq!(
        response.field("message"),
        Some(json!(
            "No document input provided. Upload a PDF/image or pass file_data_base64."
        ))
    );
    assert_eq!(response.field("job_id"), None);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn given_empty_pdf_attachment_when_digitizing_then_validation_error_kind() {
    let transport = Arc::new(ScriptedTransport::new());
    let toolset = toolset(&transport);
    let ctx = ToolContext::with_attachments(vec![InlineAttachment::new(
        "application/pdf",
        Vec::new(),
    )]);

    let response = toolset
        .invoke(DIGITIZE_DOCUMENT_TOOL, json!({}), &ctx)
        .await
        .unwrap();

    assert_eq!(response.field("http_status"), Some(json!(400)));
    assert_eq!(response.field("error_kind"), Some(json!("validation_error")));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn given_invalid_base64_when_digitizing_then_validation_error_kind() {
    let transport = Arc::new(ScriptedTransport::new());
    let toolset = toolset(&transport);

    let response = toolset
        .invoke(
            DIGITIZE_DOCUMENT_TOOL,
            json!({ "file_data_base64": "!!!" }),
            &ToolContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.field("error_code"),
        Some(json!("digitize_document_failed"))
    );
    assert_eq!(response.field("http_status"), Some(json!(400)));
    assert_eq!(response.field("error_kind"), Some(json!("validation_error")));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn given_inline_document_when_digitizing_then_returns_merged_content() {
    let transport = Arc::new(completed_job_script());
    let toolset = toolset(&transport);
    let params = json!({
        "file_data_base64": STANDARD.encode(b"%PDF-1.7"),
        "output_format": "markdown"
    });

    let response = toolset
        .invoke(DIGITIZE_DOCUMENT_TOOL, params, &ToolContext::default())
        .await
        .unwrap();

    assert_eq!(
        response.to_value(),
        json!({
            "status": "success",
            "job_id": "job-1",
            "job_state": "Completed",
            "content": "Hello\n\n---\n\nWorld",
            "content_length": 17,
            "output_format": "md"
        })
    );
}

#[tokio::test]
async fn given_pdf_attachment_when_digitizing_then_uploads_attachment() {
    let transport = Arc::new(completed_job_script());
    let toolset = toolset(&transport);
    let ctx = ToolContext::with_attachments(vec![InlineAttachment::new(
        "application/pdf",
        b"%PDF attached".to_vec(),
    )]);

    let response = toolset
        .invoke(DIGITIZE_DOCUMENT_TOOL, json!({}), &ctx)
        .await
        .unwrap();

    assert!(response.is_success());
    match &transport.requests()[2].body {
        RequestBody::Binary { data, content_type } => {
            assert_eq!(&data[..], b"%PDF attached");
            assert_eq!(content_type, "application/pdf");
        }
        other => panic!("expected binary upload, got {:?}", other),
    }
}

#[tokio::test]
async fn given_wrongly_typed_parameter_when_digitizing_then_bad_request() {
    let transport = Arc::new(ScriptedTransport::new());
    let toolset = toolset(&transport);

    let response = toolset
        .invoke(
            DIGITIZE_DOCUMENT_TOOL,
            json!({ "language": 42 }),
            &ToolContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(response.field("http_status"), Some(json!(400)));
    assert_eq!(response.field("error_kind"), Some(json!("validation_error")));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn given_missing_required_input_when_translating_then_bad_request() {
    let transport = Arc::new(ScriptedTransport::new());
    let toolset = toolset(&transport);

    let response = toolset
        .invoke(
            TRANSLATE_TOOL,
            json!({ "target_language_code": "hi-IN" }),
            &ToolContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(response.field("error_code"), Some(json!("translate_failed")));
    assert_eq!(response.field("http_status"), Some(json!(400)));
}

#[tokio::test]
async fn given_upstream_failure_when_synthesizing_then_error_payload_keeps_status() {
    let transport = Arc::new(ScriptedTransport::new().respond(503, "overloaded"));
    let toolset = toolset(&transport);

    let response = toolset
        .invoke(
            TEXT_TO_SPEECH_TOOL,
            json!({ "text": "Namaste", "target_language_code": "hi-IN" }),
            &ToolContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.to_value(),
        json!({
            "status": "error",
            "error_code": "text_to_speech_failed",
            "http_status": 503,
            "message": "overloaded"
        })
    );
}

#[tokio::test]
async fn given_no_audio_when_transcribing_then_bad_request_without_calls() {
    let transport = Arc::new(ScriptedTransport::new());
    let toolset = toolset(&transport);

    let response = toolset
        .invoke(SPEECH_TO_TEXT_TOOL, json!({}), &ToolContext::default())
        .await
        .unwrap();

    assert_eq!(
        response.field("error_code"),
        Some(json!("speech_to_text_failed"))
    );
    assert_eq!(response.field("http_status"), Some(json!(400)));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn given_audio_attachment_when_transcribing_then_returns_transcript() {
    let transport = Arc::new(ScriptedTransport::new().respond_json(
        200,
        json!({ "request_id": "req-7", "transcript": "hi", "language_code": "en-IN" }),
    ));
    let toolset = toolset(&transport);
    let ctx = ToolContext::with_attachments(vec![InlineAttachment::new(
        "audio/webm",
        b"webm".to_vec(),
    )]);

    let response = toolset
        .invoke(SPEECH_TO_TEXT_TOOL, json!({}), &ctx)
        .await
        .unwrap();

    assert_eq!(
        response.to_value(),
        json!({
            "status": "success",
            "request_id": "req-7",
            "transcript": "hi",
            "language_code": "en-IN"
        })
    );
}
