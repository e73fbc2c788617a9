use filters::MaskSet;
use session::Session;

use crate::walker::Listing;

/// Configures a remote directory traversal.
#[derive(Clone, Debug)]
pub struct ListBuilder {
    path: String,
    masks: MaskSet,
    recursive: bool,
    files_only: bool,
    directories_only: bool,
}

impl ListBuilder {
    /// Creates a builder for listing the remote directory at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            masks: MaskSet::empty(),
            recursive: false,
            files_only: false,
            directories_only: false,
        }
    }

    /// Applies include/exclude masks to yielded entries.
    ///
    /// Masks match leaf names only, case-insensitively; see
    /// [`MaskSet`](filters::MaskSet) for the exact semantics.
    #[must_use]
    pub fn masks(mut self, masks: MaskSet) -> Self {
        self.masks = masks;
        self
    }

    /// Descends into subdirectories, yielding their contents directly after
    /// the parent entry (pre-order).
    ///
    /// Descent is independent of the mask and kind filters; a `files_only`
    /// listing still surfaces files from subdirectories. Hidden
    /// (dot-prefixed) directories are never entered.
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Restricts output to file entries.
    ///
    /// Setting both `files_only` and `directories_only` yields all kinds,
    /// same as setting neither.
    #[must_use]
    pub const fn files_only(mut self, files_only: bool) -> Self {
        self.files_only = files_only;
        self
    }

    /// Restricts output to directory entries.
    #[must_use]
    pub const fn directories_only(mut self, directories_only: bool) -> Self {
        self.directories_only = directories_only;
        self
    }

    /// Starts the traversal against `session`.
    ///
    /// The session is borrowed for the whole life of the returned
    /// [`Listing`]; no listing call is made until the iterator is first
    /// advanced. The sequence is not restartable; list again to re-walk.
    #[must_use]
    pub fn list(self, session: &mut Session) -> Listing<'_> {
        Listing::new(
            session,
            self.path,
            self.masks,
            self.recursive,
            self.files_only,
            self.directories_only,
        )
    }
}
