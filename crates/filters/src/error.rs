use std::fmt;

/// Error produced when a mask cannot be compiled into a matcher.
#[derive(Debug)]
pub struct MaskError {
    pattern: String,
    source: globset::Error,
}

impl MaskError {
    pub(crate) fn new(pattern: String, source: globset::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to compile mask '{}': {}",
            self.pattern, self.source
        )
    }
}

impl std::error::Error for MaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
