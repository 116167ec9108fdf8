use super::{DigitizationJobId, OutputFormat};

/// Separator placed between consecutive assets of one job.
pub const ASSET_DELIMITER: &str = "\n\n---\n\n";

/// Text extracted by a completed digitization job, untruncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitizedDocument {
    pub job_id: DigitizationJobId,
    pub job_state: String,
    pub output_format: OutputFormat,
    pub content: String,
}

impl DigitizedDocument {
    /// Length in characters, not bytes.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }
}

/// Joins asset bodies in the order given.
pub fn merge_assets<S: AsRef<str>>(bodies: &[S]) -> String {
    bodies
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(ASSET_DELIMITER)
}
