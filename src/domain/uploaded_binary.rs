use bytes::Bytes;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// A binary payload held fully in memory for the duration of one tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedBinary {
    bytes: Bytes,
    file_name: String,
    mime_type: Option<String>,
}

impl UploadedBinary {
    pub fn new(
        bytes: impl Into<Bytes>,
        file_name: impl Into<String>,
        mime_type: Option<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: file_name.into(),
            mime_type: mime_type.filter(|m| !m.trim().is_empty()),
        }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// MIME type to declare on upload, falling back to a generic binary type.
    pub fn content_type(&self) -> &str {
        self.mime_type().unwrap_or(OCTET_STREAM)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Picks a file name for a payload that arrived without one.
pub fn file_name_for_mime(mime_type: &str) -> &'static str {
    let mime = mime_type.to_lowercase();
    if mime.contains("pdf") {
        "document.pdf"
    } else if mime.contains("png") {
        "document.png"
    } else if mime.contains("jpeg") || mime.contains("jpg") {
        "document.jpg"
    } else if mime.contains("tiff") {
        "document.tiff"
    } else if mime.contains("bmp") {
        "document.bmp"
    } else if mime.contains("webm") {
        "audio.webm"
    } else if mime.contains("ogg") {
        "audio.ogg"
    } else if mime.contains("mp3") || mime.contains("mpeg") {
        "audio.mp3"
    } else {
        "document.bin"
    }
}
