use transport::Direction;

/// One concrete transfer the engine is about to perform, offered to the
/// gate before any bytes move.
#[derive(Clone, Debug)]
pub struct TransferAction {
    direction: Direction,
    source: String,
    destination: String,
}

impl TransferAction {
    pub(crate) fn new(
        direction: Direction,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Transfer direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Source of the action (remote path for downloads, local for uploads).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Resolved destination of the action.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// Confirmation gate consulted before each transfer action.
///
/// Returning `false` vetoes the action: the engine skips it with no outcome
/// emitted and no side effect. The granularity follows how each direction
/// enumerates its sources: one action per request for downloads (the remote
/// set is not expanded locally), one action per resolved file for uploads.
pub trait TransferGate {
    /// Decides whether `action` may proceed.
    fn confirm(&self, action: &TransferAction) -> bool;
}

/// Gate that lets every action through; the default for non-interactive use.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysConfirm;

impl TransferGate for AlwaysConfirm {
    fn confirm(&self, _action: &TransferAction) -> bool {
        true
    }
}
