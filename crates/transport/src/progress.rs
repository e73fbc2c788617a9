use serde::{Deserialize, Serialize};

/// Direction of a transfer as seen from the client.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    /// Local to remote.
    Upload,
    /// Remote to local.
    Download,
}

/// Progress update emitted by a provider while moving one file.
#[derive(Clone, Debug)]
pub struct ProgressEvent {
    file_name: String,
    direction: Direction,
    bytes_transferred: u64,
    total_bytes: Option<u64>,
}

impl ProgressEvent {
    /// Creates an event for `file_name`.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        direction: Direction,
        bytes_transferred: u64,
        total_bytes: Option<u64>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            direction,
            bytes_transferred,
            total_bytes,
        }
    }

    /// Leaf name of the file being moved.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Transfer direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Bytes moved so far for this file.
    #[must_use]
    pub const fn bytes_transferred(&self) -> u64 {
        self.bytes_transferred
    }

    /// Expected file size, when the provider knows it up front.
    #[must_use]
    pub const fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }
}

/// Receives progress events during transfers.
///
/// Events are delivered synchronously from inside the provider's transfer
/// call, on the thread that initiated the transfer. Implementations must
/// return promptly; blocking here stalls the transfer itself.
pub trait ProgressObserver: Send + Sync {
    /// Called for each progress update.
    fn on_progress(&self, event: &ProgressEvent);
}

/// Observer that discards every event.
///
/// Used when the caller did not ask for progress reporting, so providers can
/// always assume an observer is present.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
