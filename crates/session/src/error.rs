use thiserror::Error;

use transport::TransportError;

/// Failure surfaced by the session layer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The supplied configuration cannot describe a connection.
    #[error("invalid session configuration: {detail}")]
    InvalidConfig {
        /// What was wrong with the config.
        detail: String,
    },

    /// Connect or authenticate failed; the partial session was torn down.
    #[error("failed to open session: {source}")]
    Connection {
        /// The transport failure that aborted the open.
        #[source]
        source: TransportError,
    },

    /// A default session is already open; the existing one is untouched.
    #[error("a session is already open; close it before opening another")]
    AlreadyOpen,

    /// An operation required an open session, but the handle is closed.
    #[error("session is not open")]
    NotOpen,

    /// Close was requested with no session to close. A warning, not fatal.
    #[error("no active session to close")]
    NoActiveSession,
}

impl SessionError {
    /// Returns `true` for conditions reported as warnings rather than hard
    /// errors: the operation was refused but nothing is broken.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::NoActiveSession)
    }
}
