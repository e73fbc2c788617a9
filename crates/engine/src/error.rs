use thiserror::Error;

use transport::TransportError;

/// Failure preventing a transfer batch from running at all.
///
/// Per-file problems are not errors at this level; they are reported as
/// unsuccessful [`TransferOutcome`](crate::TransferOutcome) values so the
/// rest of the batch can proceed.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The session handle is closed.
    #[error("session is not open")]
    SessionNotOpen,

    /// A local source or destination is not an addressable filesystem path.
    #[error("invalid local path '{path}': {detail}")]
    InvalidLocalPath {
        /// The path as supplied by the caller.
        path: String,
        /// Why it cannot be used.
        detail: String,
    },

    /// An include/exclude mask failed to compile.
    #[error("invalid transfer mask: {0}")]
    Mask(#[from] filters::MaskError),

    /// The provider could not run the batch at all.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
