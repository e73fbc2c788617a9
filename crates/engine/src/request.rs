use filters::MaskSet;
use transport::Direction;

use crate::TransferError;

/// One logical batch operation: a source, a destination, and the knobs that
/// shape how files are selected and delivered.
///
/// All transfers are binary; there is no text-mode flag to set.
#[derive(Clone, Debug)]
pub struct TransferRequest {
    direction: Direction,
    source: String,
    destination: String,
    remove_source: bool,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TransferRequest {
    /// A download of `source` (remote, may carry a wildcard leaf) into
    /// `destination` (local file or directory).
    #[must_use]
    pub fn download(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(Direction::Download, source, destination)
    }

    /// An upload of `source` (local file, directory, or wildcard) to
    /// `destination` (remote path; a trailing `/` makes it a container).
    #[must_use]
    pub fn upload(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(Direction::Upload, source, destination)
    }

    fn new(
        direction: Direction,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            source: source.into(),
            destination: destination.into(),
            remove_source: false,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Deletes each source file after it transfers successfully.
    #[must_use]
    pub const fn remove_source(mut self, remove: bool) -> Self {
        self.remove_source = remove;
        self
    }

    /// Adds include masks. See the crate docs for where each direction
    /// applies them.
    #[must_use]
    pub fn include<I>(mut self, masks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.include.extend(masks.into_iter().map(Into::into));
        self
    }

    /// Adds exclude masks; a match here always wins over inclusion.
    #[must_use]
    pub fn exclude<I>(mut self, masks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.exclude.extend(masks.into_iter().map(Into::into));
        self
    }

    /// Transfer direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Source path as supplied.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Destination path as supplied.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Whether sources are removed after success.
    #[must_use]
    pub const fn removes_source(&self) -> bool {
        self.remove_source
    }

    /// Compiles the include/exclude lists into a matcher.
    pub(crate) fn masks(&self) -> Result<MaskSet, TransferError> {
        Ok(MaskSet::new(&self.include, &self.exclude)?)
    }
}
