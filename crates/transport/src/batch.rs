/// Result of one file inside a batch get/put.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileAttempt {
    name: String,
    error: Option<String>,
}

impl FileAttempt {
    /// Records a successful attempt for `name`.
    #[must_use]
    pub fn succeeded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: None,
        }
    }

    /// Records a failed attempt for `name` with the provider's error detail.
    #[must_use]
    pub fn failed(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: Some(detail.into()),
        }
    }

    /// Leaf name of the attempted file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Error detail, present iff the attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` when the file transferred successfully.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-file record of what a batch get/put actually did.
///
/// The provider appends one [`FileAttempt`] per file it tried to move, in
/// attempt order. An empty result means the source selected no files.
#[derive(Clone, Debug, Default)]
pub struct BatchResult {
    attempts: Vec<FileAttempt>,
}

impl BatchResult {
    /// Creates a result from recorded attempts.
    #[must_use]
    pub fn new(attempts: Vec<FileAttempt>) -> Self {
        Self { attempts }
    }

    /// All attempts in order.
    #[must_use]
    pub fn attempts(&self) -> &[FileAttempt] {
        &self.attempts
    }

    /// Consumes the result, yielding the attempts.
    #[must_use]
    pub fn into_attempts(self) -> Vec<FileAttempt> {
        self.attempts
    }

    /// Number of files attempted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    /// Returns `true` when no files were attempted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}
