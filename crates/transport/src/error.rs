use thiserror::Error;

/// Failure surfaced by a transport provider.
///
/// Per-file transfer problems are not reported here; those travel inside
/// [`BatchResult`](crate::BatchResult) so a single bad file cannot abort a
/// batch. `TransportError` covers the cases where an operation could not run
/// at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// TCP connect or protocol handshake failed.
    #[error("failed to connect to {host}:{port}: {detail}")]
    Connect {
        /// Remote host name or address.
        host: String,
        /// Remote port.
        port: u16,
        /// Provider-supplied failure description.
        detail: String,
    },

    /// The server rejected the supplied credentials or host trust failed.
    #[error("authentication failed for user '{username}': {detail}")]
    Authentication {
        /// Username presented to the server.
        username: String,
        /// Provider-supplied failure description.
        detail: String,
    },

    /// A directory listing could not be retrieved.
    #[error("failed to list remote directory '{path}': {detail}")]
    Listing {
        /// Remote directory that failed to list.
        path: String,
        /// Provider-supplied failure description.
        detail: String,
    },

    /// A batch get/put could not start at all.
    #[error("transfer of '{source_path}' failed: {detail}")]
    Transfer {
        /// Source path of the failed batch.
        source_path: String,
        /// Provider-supplied failure description.
        detail: String,
    },

    /// The connection dropped mid-operation.
    #[error("connection to {host} lost: {detail}")]
    ConnectionLost {
        /// Remote host name or address.
        host: String,
        /// Provider-supplied failure description.
        detail: String,
    },
}
