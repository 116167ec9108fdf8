use std::fmt;
use std::str::FromStr;

/// Lifecycle of a digitization job, in pipeline order.
///
/// `Completed`, `Failed` and `TimedOut` are terminal. `TimedOut` is declared locally when the
/// poll ceiling is exhausted; the provider never reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitizationJobState {
    Created,
    FileTargetsAssigned,
    Uploaded,
    Started,
    Running,
    Completed,
    Failed,
    TimedOut,
}

impl DigitizationJobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitizationJobState::Created => "Created",
            DigitizationJobState::FileTargetsAssigned => "FileTargetsAssigned",
            DigitizationJobState::Uploaded => "Uploaded",
            DigitizationJobState::Started => "Started",
            DigitizationJobState::Running => "Running",
            DigitizationJobState::Completed => "Completed",
            DigitizationJobState::Failed => "Failed",
            DigitizationJobState::TimedOut => "TimedOut",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DigitizationJobState::Completed
                | DigitizationJobState::Failed
                | DigitizationJobState::TimedOut
        )
    }

    /// Maps a provider `job_state` string onto the local lifecycle.
    ///
    /// Only `Completed` and `Failed` (any casing) are terminal; every other value the provider
    /// reports (`Accepted`, `Pending`, `Running`, ...) means the job is still in flight.
    pub fn from_remote(job_state: &str) -> Self {
        if job_state.eq_ignore_ascii_case("completed") {
            DigitizationJobState::Completed
        } else if job_state.eq_ignore_ascii_case("failed") {
            DigitizationJobState::Failed
        } else {
            DigitizationJobState::Running
        }
    }
}

impl FromStr for DigitizationJobState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(DigitizationJobState::Created),
            "FileTargetsAssigned" => Ok(DigitizationJobState::FileTargetsAssigned),
            "Uploaded" => Ok(DigitizationJobState::Uploaded),
            "Started" => Ok(DigitizationJobState::Started),
            "Running" => Ok(DigitizationJobState::Running),
            "Completed" => Ok(DigitizationJobState::Completed),
            "Failed" => Ok(DigitizationJobState::Failed),
            "TimedOut" => Ok(DigitizationJobState::TimedOut),
            _ => Err(format!("Invalid digitization job state: {}", s)),
        }
    }
}

impl fmt::Display for DigitizationJobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
