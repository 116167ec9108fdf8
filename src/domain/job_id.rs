use std::fmt;

/// Opaque job handle assigned by the digitization service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitizationJobId(String);

impl DigitizationJobId {
    /// Returns `None` for a blank identifier; the service never assigns one.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitizationJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
