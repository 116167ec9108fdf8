use std::time::Duration;

pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 60;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How long to wait for a started job to reach a terminal state.
///
/// The loop sleeps `interval` before each of at most `max_attempts` status checks. `deadline`
/// optionally caps the whole wait in wall-clock time on top of the attempt ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
    pub deadline: Option<Duration>,
}

impl PollPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Upper bound of time spent sleeping between polls.
    pub fn total_wait(&self) -> Duration {
        let by_attempts = self.interval.saturating_mul(self.max_attempts);
        match self.deadline {
            Some(deadline) => by_attempts.min(deadline),
            None => by_attempts,
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL)
    }
}
