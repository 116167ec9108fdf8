use chrono::{DateTime, Utc};

use super::{DigitizationJobId, DigitizationJobState, LanguageHint, OutputFormat};

/// One-time URL the service issued for uploading a named file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub file_name: String,
    pub url: String,
}

/// One-time URL for one output unit (page, section) of a completed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadAsset {
    pub key: String,
    pub url: String,
}

/// Raw status the provider reported on the latest poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStatus {
    pub job_state: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobTransitionError {
    #[error("invalid job transition from {from} to {to}")]
    InvalidTransition {
        from: DigitizationJobState,
        to: DigitizationJobState,
    },
    #[error("job is already terminal ({0})")]
    AlreadyTerminal(DigitizationJobState),
    #[error("upload targets were already assigned")]
    UploadTargetsAlreadyAssigned,
    #[error("no unclaimed upload target left")]
    NoUploadTarget,
    #[error("download assets were already attached")]
    DownloadAssetsAlreadyAttached,
    #[error("download assets require a completed job, job is {0}")]
    NotCompleted(DigitizationJobState),
}

/// In-memory record of one digitization job, owned by a single tool invocation.
///
/// The state only moves forward. Upload targets and download assets are each populated once and
/// never replaced; every upload target can be claimed at most once.
#[derive(Debug, Clone)]
pub struct DigitizationJob {
    id: DigitizationJobId,
    state: DigitizationJobState,
    language: LanguageHint,
    output_format: OutputFormat,
    upload_targets: Option<Vec<UploadTarget>>,
    claimed_uploads: usize,
    download_assets: Option<Vec<DownloadAsset>>,
    last_status: Option<RemoteStatus>,
    error_message: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DigitizationJob {
    pub fn new(id: DigitizationJobId, language: LanguageHint, output_format: OutputFormat) -> Self {
        let now = Utc::now();
        Self {
            id,
            state: DigitizationJobState::Created,
            language,
            output_format,
            upload_targets: None,
            claimed_uploads: 0,
            download_assets: None,
            last_status: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &DigitizationJobId {
        &self.id
    }

    pub fn state(&self) -> DigitizationJobState {
        self.state
    }

    pub fn language(&self) -> &LanguageHint {
        &self.language
    }

    pub fn output_format(&self) -> &OutputFormat {
        &self.output_format
    }

    pub fn upload_targets(&self) -> &[UploadTarget] {
        self.upload_targets.as_deref().unwrap_or_default()
    }

    pub fn download_assets(&self) -> &[DownloadAsset] {
        self.download_assets.as_deref().unwrap_or_default()
    }

    pub fn last_status(&self) -> Option<&RemoteStatus> {
        self.last_status.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// State string as the provider last reported it, or the local state before any poll.
    pub fn remote_state_label(&self) -> &str {
        self.last_status
            .as_ref()
            .map(|s| s.job_state.as_str())
            .unwrap_or_else(|| self.state.as_str())
    }

    pub fn assign_upload_targets(
        &mut self,
        targets: Vec<UploadTarget>,
    ) -> Result<(), JobTransitionError> {
        if self.upload_targets.is_some() {
            return Err(JobTransitionError::UploadTargetsAlreadyAssigned);
        }
        self.advance(DigitizationJobState::FileTargetsAssigned)?;
        self.upload_targets = Some(targets);
        Ok(())
    }

    /// Hands out the next unclaimed upload target, in the order the service listed them.
    pub fn claim_upload_target(&mut self) -> Result<UploadTarget, JobTransitionError> {
        let target = self
            .upload_targets()
            .get(self.claimed_uploads)
            .cloned()
            .ok_or(JobTransitionError::NoUploadTarget)?;
        self.claimed_uploads += 1;
        Ok(target)
    }

    pub fn mark_uploaded(&mut self) -> Result<(), JobTransitionError> {
        self.advance(DigitizationJobState::Uploaded)
    }

    pub fn mark_started(&mut self) -> Result<(), JobTransitionError> {
        self.advance(DigitizationJobState::Started)
    }

    /// Applies one poll observation and returns the resulting local state.
    pub fn record_status(
        &mut self,
        job_state: &str,
        error_message: Option<String>,
    ) -> Result<DigitizationJobState, JobTransitionError> {
        let next = DigitizationJobState::from_remote(job_state);
        self.advance(next)?;
        if next == DigitizationJobState::Failed {
            self.error_message = Some(error_message.clone().unwrap_or_default());
        }
        self.last_status = Some(RemoteStatus {
            job_state: job_state.to_string(),
            error_message,
        });
        Ok(next)
    }

    pub fn mark_timed_out(&mut self) -> Result<(), JobTransitionError> {
        self.advance(DigitizationJobState::TimedOut)
    }

    pub fn attach_download_assets(
        &mut self,
        assets: Vec<DownloadAsset>,
    ) -> Result<(), JobTransitionError> {
        if self.state != DigitizationJobState::Completed {
            return Err(JobTransitionError::NotCompleted(self.state));
        }
        if self.download_assets.is_some() {
            return Err(JobTransitionError::DownloadAssetsAlreadyAttached);
        }
        self.download_assets = Some(assets);
        self.updated_at = Utc::now();
        Ok(())
    }

    fn advance(&mut self, to: DigitizationJobState) -> Result<(), JobTransitionError> {
        use DigitizationJobState::*;

        let from = self.state;
        if from.is_terminal() {
            return Err(JobTransitionError::AlreadyTerminal(from));
        }

        let allowed = match (from, to) {
            (Created, FileTargetsAssigned) => true,
            (FileTargetsAssigned, Uploaded) => true,
            (Uploaded, Started) => true,
            (Started | Running, Running | Completed | Failed | TimedOut) => true,
            _ => false,
        };
        if !allowed {
            return Err(JobTransitionError::InvalidTransition { from, to });
        }

        self.state = to;
        self.updated_at = Utc::now();
        Ok(())
    }
}
