use sarvam_tools::infrastructure::observability::{redact_url, text_preview};

#[test]
fn given_short_text_when_previewing_then_returns_trimmed_text() {
    assert_eq!(text_preview("  translate this  "), "translate this");
}

#[test]
fn given_blank_text_when_previewing_then_marks_empty() {
    assert_eq!(text_preview("   "), "[EMPTY]");
}

#[test]
fn given_long_text_when_previewing_then_truncates_and_reports_total() {
    let text = "a".repeat(250);

    let preview = text_preview(&text);

    assert_eq!(preview, format!("{}... (250 chars total)", "a".repeat(100)));
}

#[test]
fn given_credential_in_text_when_previewing_then_redacts_value() {
    let preview = text_preview("call with api_key=sk-secret-123 please");

    assert_eq!(preview, "call with api_key=[REDACTED] please");
    assert!(!preview.contains("sk-secret-123"));
}

#[test]
fn given_signed_url_when_redacting_then_drops_query() {
    assert_eq!(
        redact_url("https://blob.test/upload/doc.pdf?sv=2024&sig=abc"),
        "https://blob.test/upload/doc.pdf?[REDACTED]"
    );
}

#[test]
fn given_plain_url_when_redacting_then_unchanged() {
    assert_eq!(
        redact_url("https://api.sarvam.ai/translate"),
        "https://api.sarvam.ai/translate"
    );
}
