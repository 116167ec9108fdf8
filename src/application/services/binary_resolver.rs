use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;

use crate::domain::{UploadedBinary, file_name_for_mime};

pub const DEFAULT_DOCUMENT_MIME: &str = "application/pdf";
pub const DEFAULT_AUDIO_FILE_NAME: &str = "uploaded_audio.wav";
pub const DEFAULT_AUDIO_MIME: &str = "audio/wav";

/// A blob the agent attached to the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAttachment {
    pub mime_type: String,
    pub data: Bytes,
}

impl InlineAttachment {
    pub fn new(mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BinaryResolverError {
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// Resolves the document to digitize.
///
/// Inline base64 wins. Otherwise the first non-empty PDF attachment is used, then the first
/// non-empty image attachment.
pub fn resolve_document(
    file_data_base64: Option<&str>,
    file_name: Option<&str>,
    mime_type: Option<&str>,
    attachments: &[InlineAttachment],
) -> Result<Option<UploadedBinary>, BinaryResolverError> {
    if let Some(encoded) = non_blank(file_data_base64) {
        let mime = non_blank(mime_type).unwrap_or(DEFAULT_DOCUMENT_MIME);
        let name = non_blank(file_name).unwrap_or_else(|| file_name_for_mime(mime));
        let bytes = decode_base64(encoded)?;
        return Ok(Some(UploadedBinary::new(bytes, name, Some(mime.to_string()))));
    }

    Ok(find_attachment(attachments, DEFAULT_DOCUMENT_MIME)
        .or_else(|| find_attachment(attachments, "image/")))
}

/// Resolves the audio to transcribe: inline base64 first, then the first audio attachment.
pub fn resolve_audio(
    audio_data_base64: Option<&str>,
    attachments: &[InlineAttachment],
) -> Result<Option<UploadedBinary>, BinaryResolverError> {
    if let Some(encoded) = non_blank(audio_data_base64) {
        let bytes = decode_base64(encoded)?;
        return Ok(Some(UploadedBinary::new(
            bytes,
            DEFAULT_AUDIO_FILE_NAME,
            Some(DEFAULT_AUDIO_MIME.to_string()),
        )));
    }

    Ok(find_attachment(attachments, "audio/"))
}

pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, BinaryResolverError> {
    general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| BinaryResolverError::InvalidBase64(e.to_string()))
}

fn find_attachment(attachments: &[InlineAttachment], mime_prefix: &str) -> Option<UploadedBinary> {
    attachments
        .iter()
        .find(|a| a.mime_type.starts_with(mime_prefix) && !a.data.is_empty())
        .map(|a| {
            UploadedBinary::new(
                a.data.clone(),
                file_name_for_mime(&a.mime_type),
                Some(a.mime_type.clone()),
            )
        })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
