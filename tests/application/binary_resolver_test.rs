use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use sarvam_tools::application::services::{
    BinaryResolverError, DEFAULT_AUDIO_FILE_NAME, InlineAttachment, resolve_audio,
    resolve_document,
};

#[test]
fn given_inline_base64_when_resolving_document_then_defaults_to_pdf() {
    let encoded = STANDARD.encode(b"%PDF-1.4");

    let binary = resolve_document(Some(&encoded), None, None, &[])
        .unwrap()
        .unwrap();

    assert_eq!(&binary.bytes()[..], b"%PDF-1.4");
    assert_eq!(binary.file_name(), "document.pdf");
    assert_eq!(binary.content_type(), "application/pdf");
}

#[test]
fn given_inline_base64_with_mime_when_resolving_document_then_guesses_file_name() {
    let encoded = STANDARD.encode(b"png bytes");

    let binary = resolve_document(Some(&encoded), None, Some("image/png"), &[])
        .unwrap()
        .unwrap();

    assert_eq!(binary.file_name(), "document.png");
    assert_eq!(binary.content_type(), "image/png");
}

#[test]
fn given_explicit_file_name_when_resolving_document_then_keeps_it() {
    let encoded = STANDARD.encode(b"%PDF-1.4");

    let binary = resolve_document(Some(&encoded), Some("invoice.pdf"), None, &[])
        .unwrap()
        .unwrap();

    assert_eq!(binary.file_name(), "invoice.pdf");
}

#[test]
fn given_inline_and_attachment_when_resolving_document_then_inline_wins() {
    let encoded = STANDARD.encode(b"inline");
    let attachments = vec![InlineAttachment::new("application/pdf", b"attached".to_vec())];

    let binary = resolve_document(Some(&encoded), None, None, &attachments)
        .unwrap()
        .unwrap();

    assert_eq!(&binary.bytes()[..], b"inline");
}

#[test]
fn given_image_and_pdf_attachments_when_resolving_document_then_prefers_pdf() {
    let attachments = vec![
        InlineAttachment::new("image/jpeg", b"jpeg".to_vec()),
        InlineAttachment::new("application/pdf", b"pdf".to_vec()),
    ];

    let binary = resolve_document(None, None, None, &attachments)
        .unwrap()
        .unwrap();

    assert_eq!(&binary.bytes()[..], b"pdf");
    assert_eq!(binary.file_name(), "document.pdf");
}

#[test]
fn given_only_image_attachment_when_resolving_document_then_uses_image() {
    let attachments = vec![
        InlineAttachment::new("application/pdf", Vec::new()),
        InlineAttachment::new("image/jpeg", b"jpeg".to_vec()),
    ];

    let binary = resolve_document(None, None, None, &attachments)
        .unwrap()
        .unwrap();

    assert_eq!(binary.file_name(), "document.jpg");
    assert_eq!(binary.content_type(), "image/jpeg");
}

#[test]
fn given_no_input_when_resolving_document_then_none() {
    let attachments = vec![InlineAttachment::new("audio/wav", b"wav".to_vec())];

    assert!(
        resolve_document(Some("  "), None, None, &attachments)
            .unwrap()
            .is_none()
    );
}

#[test]
fn given_invalid_base64_when_resolving_document_then_error() {
    let result = resolve_document(Some("not base64!!"), None, None, &[]);

    assert!(matches!(result, Err(BinaryResolverError::InvalidBase64(_))));
}

#[test]
fn given_inline_audio_when_resolving_audio_then_defaults_to_wav() {
    let encoded = STANDARD.encode(b"RIFF");

    let binary = resolve_audio(Some(&encoded), &[]).unwrap().unwrap();

    assert_eq!(binary.file_name(), DEFAULT_AUDIO_FILE_NAME);
    assert_eq!(binary.content_type(), "audio/wav");
}

#[test]
fn given_audio_attachment_when_resolving_audio_then_uses_attachment() {
    let attachments = vec![
        InlineAttachment::new("application/pdf", b"pdf".to_vec()),
        InlineAttachment::new("audio/ogg", b"ogg".to_vec()),
    ];

    let binary = resolve_audio(None, &attachments).unwrap().unwrap();

    assert_eq!(binary.file_name(), "audio.ogg");
    assert_eq!(&binary.bytes()[..], b"ogg");
}
