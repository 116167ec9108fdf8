mod api_call;
mod binary_resolver;
mod digitization_error;
mod digitization_orchestrator;
mod poll_policy;
mod result_formatter;
mod speech_to_text;
mod text_to_speech;
mod translation;

pub use api_call::ApiCallError;
pub use binary_resolver::{
    BinaryResolverError, DEFAULT_AUDIO_FILE_NAME, DEFAULT_AUDIO_MIME, DEFAULT_DOCUMENT_MIME,
    InlineAttachment, decode_base64, resolve_audio, resolve_document,
};
pub use digitization_error::{
    DigitizationError, DigitizationErrorKind, DigitizationFailure, StepFailure,
};
pub use digitization_orchestrator::{
    BLOB_TYPE_HEADER, BLOCK_BLOB, CreateJobResponse, DigitizationOrchestrator,
    DownloadFilesResponse, JOB_PATH, JobStatusResponse, RemoteUrl, UploadFilesResponse,
};
pub use poll_policy::{DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL, PollPolicy};
pub use result_formatter::{
    DIGITIZE_DOCUMENT_FAILED, DigitizeDocumentOutput, MAX_CONTENT_CHARS, TRUNCATION_MARKER,
    ToolErrorPayload, ToolResponse, format_digitization, truncate_content,
};
pub use speech_to_text::{
    SPEECH_TO_TEXT_PATH, SpeechToTextResponse, SpeechToTextService, Transcript, UNKNOWN_LANGUAGE,
};
pub use text_to_speech::{
    DEFAULT_SPEAKER, SynthesizedSpeech, TEXT_TO_SPEECH_PATH, TextToSpeechResponse,
    TextToSpeechService,
};
pub use translation::{
    AUTO_SOURCE_LANGUAGE, TRANSLATE_PATH, TranslateResponse, Translation, TranslationService,
};
