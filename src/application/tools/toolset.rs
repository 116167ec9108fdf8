use std::sync::Arc;

use crate::application::ports::HttpTransport;
use crate::application::services::{
    DigitizationOrchestrator, PollPolicy, SpeechToTextService, TextToSpeechService, ToolResponse,
    TranslationService,
};

use super::digitize_document::DigitizeDocumentTool;
use super::speech_to_text::SpeechToTextTool;
use super::text_to_speech::TextToSpeechTool;
use super::tool::{Tool, ToolContext, ToolDefinition};
use super::translate::TranslateTool;

pub const DEFAULT_API_BASE_URL: &str = "https://api.sarvam.ai";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsetConfig {
    pub base_url: String,
    pub poll_policy: PollPolicy,
}

impl Default for ToolsetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_policy: PollPolicy::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ToolsetError {
    #[error("{0} must not be empty")]
    MissingSetting(&'static str),
}

/// The Sarvam tools, all sharing one transport and therefore one API key.
pub struct SarvamToolset {
    tools: Vec<Arc<dyn Tool>>,
}

impl SarvamToolset {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        config: ToolsetConfig,
    ) -> Result<Self, ToolsetError> {
        let base_url = config.base_url.trim();
        if base_url.is_empty() {
            return Err(ToolsetError::MissingSetting("base_url"));
        }

        let tools: Vec<Arc<dyn Tool>> = vec![
            Arc::new(TextToSpeechTool::new(Arc::new(TextToSpeechService::new(
                Arc::clone(&transport),
                base_url,
            )))),
            Arc::new(SpeechToTextTool::new(Arc::new(SpeechToTextService::new(
                Arc::clone(&transport),
                base_url,
            )))),
            Arc::new(TranslateTool::new(Arc::new(TranslationService::new(
                Arc::clone(&transport),
                base_url,
            )))),
            Arc::new(DigitizeDocumentTool::new(Arc::new(
                DigitizationOrchestrator::new(transport, base_url, config.poll_policy),
            ))),
        ];

        tracing::debug!(tools = tools.len(), base_url, "Sarvam toolset ready");
        Ok(Self { tools })
    }

    pub fn all_tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Runs the named tool; `None` when no tool has that name.
    pub async fn invoke(
        &self,
        name: &str,
        params: serde_json::Value,
        ctx: &ToolContext,
    ) -> Option<ToolResponse> {
        let tool = self.get(name)?;
        Some(tool.execute(params, ctx).await)
    }
}
