use std::fmt;

/// Encoding requested for digitized output.
///
/// The provider understands `md` and `html`. Anything else is forwarded lower-cased and left
/// for the provider to reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Other(String),
}

impl OutputFormat {
    /// Canonicalizes a caller hint. Blank means markdown; `markdown` is a synonym of `md`.
    pub fn from_hint(hint: Option<&str>) -> Self {
        let normalized = match hint.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_lowercase(),
            _ => return OutputFormat::Markdown,
        };

        match normalized.as_str() {
            "md" | "markdown" => OutputFormat::Markdown,
            "html" => OutputFormat::Html,
            _ => OutputFormat::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
            OutputFormat::Other(value) => value,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
