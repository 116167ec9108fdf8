mod digitize_document;
mod speech_to_text;
mod text_to_speech;
mod tool;
mod toolset;
mod translate;

pub use digitize_document::{DIGITIZE_DOCUMENT_TOOL, DigitizeDocumentArgs, DigitizeDocumentTool};
pub use speech_to_text::{
    SPEECH_TO_TEXT_FAILED, SPEECH_TO_TEXT_TOOL, SpeechToTextArgs, SpeechToTextTool,
};
pub use text_to_speech::{
    TEXT_TO_SPEECH_FAILED, TEXT_TO_SPEECH_TOOL, TextToSpeechArgs, TextToSpeechTool,
};
pub use tool::{Tool, ToolContext, ToolDefinition};
pub use toolset::{DEFAULT_API_BASE_URL, SarvamToolset, ToolsetConfig, ToolsetError};
pub use translate::{TRANSLATE_FAILED, TRANSLATE_TOOL, TranslateArgs, TranslateTool};
