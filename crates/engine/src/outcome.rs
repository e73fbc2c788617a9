use serde::Serialize;

/// Result of one file actually attempted within a batch.
///
/// The set of outcomes returned by one request execution matches the set of
/// files the provider attempted exactly. `error` is present iff the file
/// failed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransferOutcome {
    file_name: String,
    destination: String,
    error: Option<String>,
}

impl TransferOutcome {
    pub(crate) fn new(
        file_name: impl Into<String>,
        destination: impl Into<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            destination: destination.into(),
            error,
        }
    }

    /// Leaf name of the transferred file.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Resolved destination the file was delivered to (or would have been).
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Error detail reported by the provider, present iff the file failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` when the file transferred successfully.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}
