use std::fmt;

use crate::application::ports::{TransportError, TransportResponse};
use crate::domain::{DigitizationJob, DigitizationJobId, DigitizationJobState, JobTransitionError};

/// Stable, snake-cased failure categories surfaced to callers as `error_kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitizationErrorKind {
    Validation,
    Protocol,
    JobCreation,
    UploadTarget,
    Upload,
    Start,
    Poll,
    TimedOut,
    JobFailed,
    Download,
    InvalidTransition,
}

impl DigitizationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitizationErrorKind::Validation => "validation_error",
            DigitizationErrorKind::Protocol => "protocol_error",
            DigitizationErrorKind::JobCreation => "job_creation_error",
            DigitizationErrorKind::UploadTarget => "upload_target_error",
            DigitizationErrorKind::Upload => "upload_error",
            DigitizationErrorKind::Start => "start_error",
            DigitizationErrorKind::Poll => "poll_error",
            DigitizationErrorKind::TimedOut => "timed_out",
            DigitizationErrorKind::JobFailed => "job_failed",
            DigitizationErrorKind::Download => "download_error",
            DigitizationErrorKind::InvalidTransition => "invalid_transition",
        }
    }
}

impl fmt::Display for DigitizationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why one remote step did not succeed: an HTTP status with its body, or a transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub status: Option<u16>,
    pub detail: String,
}

impl StepFailure {
    pub fn from_response(response: &TransportResponse) -> Self {
        Self {
            status: Some(response.status),
            detail: response.text(),
        }
    }

    pub fn from_transport(error: &TransportError) -> Self {
        Self {
            status: None,
            detail: error.to_string(),
        }
    }
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) if self.detail.trim().is_empty() => write!(f, "HTTP {}", status),
            Some(status) => write!(f, "HTTP {}: {}", status, self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DigitizationError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Protocol(String),
    #[error("Failed to create digitization job. {0}")]
    JobCreation(StepFailure),
    #[error("Failed to get upload URL. {0}")]
    UploadTarget(StepFailure),
    #[error("Failed to upload document bytes. {0}")]
    Upload(StepFailure),
    #[error("Failed to start digitization job. {0}")]
    Start(StepFailure),
    #[error("Failed polling digitization status. {0}")]
    Poll(StepFailure),
    #[error("Failed to fetch digitization download URLs. {0}")]
    DownloadList(StepFailure),
    #[error("Failed to download digitized content. {0}")]
    DownloadAsset(StepFailure),
    #[error("Job did not complete. State: {state}, error: {message}")]
    JobFailed { state: String, message: String },
    #[error("Job did not complete. State: {state}, error: {message}")]
    TimedOut { state: String, message: String },
    #[error(transparent)]
    InvalidTransition(#[from] JobTransitionError),
}

impl DigitizationError {
    pub fn kind(&self) -> DigitizationErrorKind {
        match self {
            DigitizationError::Validation(_) => DigitizationErrorKind::Validation,
            DigitizationError::Protocol(_) => DigitizationErrorKind::Protocol,
            DigitizationError::JobCreation(_) => DigitizationErrorKind::JobCreation,
            DigitizationError::UploadTarget(_) => DigitizationErrorKind::UploadTarget,
            DigitizationError::Upload(_) => DigitizationErrorKind::Upload,
            DigitizationError::Start(_) => DigitizationErrorKind::Start,
            DigitizationError::Poll(_) => DigitizationErrorKind::Poll,
            DigitizationError::DownloadList(_) | DigitizationError::DownloadAsset(_) => {
                DigitizationErrorKind::Download
            }
            DigitizationError::JobFailed { .. } => DigitizationErrorKind::JobFailed,
            DigitizationError::TimedOut { .. } => DigitizationErrorKind::TimedOut,
            DigitizationError::InvalidTransition(_) => DigitizationErrorKind::InvalidTransition,
        }
    }

    /// Status reported to the caller: the upstream status for step failures that got one,
    /// 400 for unusable input, 500 otherwise.
    pub fn http_status(&self) -> u16 {
        match self {
            DigitizationError::Validation(_) => 400,
            DigitizationError::JobCreation(step)
            | DigitizationError::UploadTarget(step)
            | DigitizationError::Upload(step)
            | DigitizationError::Start(step)
            | DigitizationError::Poll(step)
            | DigitizationError::DownloadList(step)
            | DigitizationError::DownloadAsset(step) => step.status.unwrap_or(500),
            _ => 500,
        }
    }
}

/// A digitization that ended without content, with whatever progress was made.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct DigitizationFailure {
    pub job_id: Option<DigitizationJobId>,
    pub job_state: Option<DigitizationJobState>,
    #[source]
    pub error: DigitizationError,
}

impl DigitizationFailure {
    /// Failure before the service assigned a job id.
    pub fn before_job(error: DigitizationError) -> Self {
        Self {
            job_id: None,
            job_state: None,
            error,
        }
    }

    pub fn for_job(job: &DigitizationJob, error: DigitizationError) -> Self {
        Self {
            job_id: Some(job.id().clone()),
            job_state: Some(job.state()),
            error,
        }
    }

    pub fn kind(&self) -> DigitizationErrorKind {
        self.error.kind()
    }

    pub fn http_status(&self) -> u16 {
        self.error.http_status()
    }
}
