use std::error::Error;
use std::fmt;

use transport::TransportError;

/// Error terminating a remote listing sequence.
#[derive(Debug)]
pub struct ListingError {
    kind: ListingErrorKind,
}

impl ListingError {
    pub(crate) fn not_open() -> Self {
        Self {
            kind: ListingErrorKind::SessionNotOpen,
        }
    }

    pub(crate) fn listing(path: String, source: TransportError) -> Self {
        Self {
            kind: ListingErrorKind::Listing { path, source },
        }
    }

    /// Returns the specific failure that terminated the listing.
    #[must_use]
    pub fn kind(&self) -> &ListingErrorKind {
        &self.kind
    }

    /// Returns the remote directory that failed to list, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            ListingErrorKind::Listing { path, .. } => Some(path),
            ListingErrorKind::SessionNotOpen => None,
        }
    }
}

/// The ways a listing can fail.
#[derive(Debug)]
#[non_exhaustive]
pub enum ListingErrorKind {
    /// The session was closed when the walker tried to list a directory.
    SessionNotOpen,
    /// The provider could not list a directory at some level of the tree.
    Listing {
        /// Remote directory that failed to list.
        path: String,
        /// Underlying transport failure.
        source: TransportError,
    },
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListingErrorKind::SessionNotOpen => {
                write!(f, "cannot list remote directory: session is not open")
            }
            ListingErrorKind::Listing { path, source } => {
                write!(f, "failed to list remote directory '{path}': {source}")
            }
        }
    }
}

impl Error for ListingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ListingErrorKind::Listing { source, .. } => Some(source),
            ListingErrorKind::SessionNotOpen => None,
        }
    }
}
