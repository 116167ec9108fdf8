use std::fmt;

pub const AUTO_LANGUAGE: &str = "auto";

/// Document language, or `Auto` to let the provider detect it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LanguageHint {
    #[default]
    Auto,
    Code(String),
}

impl LanguageHint {
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint.map(str::trim) {
            Some(value) if !value.is_empty() && value != AUTO_LANGUAGE => {
                LanguageHint::Code(value.to_string())
            }
            _ => LanguageHint::Auto,
        }
    }

    /// The language code to send upstream. `None` signals auto-detection.
    pub fn code(&self) -> Option<&str> {
        match self {
            LanguageHint::Auto => None,
            LanguageHint::Code(code) => Some(code),
        }
    }

    pub fn as_str(&self) -> &str {
        self.code().unwrap_or(AUTO_LANGUAGE)
    }
}

impl fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
