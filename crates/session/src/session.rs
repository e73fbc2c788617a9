use std::sync::Arc;

use tracing::{debug, warn};
use transport::{Connector, NullObserver, ProgressObserver, Transport};

use crate::{SessionConfig, SessionError};

/// Lifecycle states a session passes through.
///
/// Callers only ever observe `Open` and `Closed`: `Opening` exists inside
/// [`Session::open`] (a failed open returns an error instead of a session)
/// and `Closing` inside [`Session::close`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    /// No live transport.
    Closed,
    /// Connect + authenticate in flight.
    Opening,
    /// Transport connected and authenticated.
    Open,
    /// Disconnect in flight.
    Closing,
}

/// One authenticated connection to a remote host.
///
/// Owns the transport for its whole lifetime. The walker and engine borrow
/// the session mutably for the duration of a single call, which is what makes
/// concurrent use of one session impossible to express safely.
pub struct Session {
    config: SessionConfig,
    transport: Option<Box<dyn Transport>>,
    state: SessionState,
}

impl Session {
    /// Opens a session without progress reporting.
    ///
    /// # Errors
    ///
    /// [`SessionError::Connection`] when the connector fails; no session
    /// value exists afterwards, so nothing is left half-open.
    pub fn open(connector: &dyn Connector, config: SessionConfig) -> Result<Self, SessionError> {
        Self::open_with_observer(connector, config, Arc::new(NullObserver))
    }

    /// Opens a session with `observer` subscribed to transfer progress.
    ///
    /// The observer is handed to the connector before any protocol exchange
    /// starts, so events emitted during the handshake are not lost.
    pub fn open_with_observer(
        connector: &dyn Connector,
        config: SessionConfig,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<Self, SessionError> {
        debug!(
            host = config.host(),
            port = config.effective_port(),
            protocol = ?config.protocol(),
            "opening session"
        );
        let params = config.connect_params();
        let transport = connector
            .connect(&params, observer)
            .map_err(|source| SessionError::Connection { source })?;
        debug!(host = config.host(), "session open");
        Ok(Self {
            config,
            transport: Some(transport),
            state: SessionState::Open,
        })
    }

    /// The configuration this session was opened with.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` while the transport is connected.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open)
    }

    /// Borrows the live transport for one operation.
    ///
    /// Used by the walker and transfer engine; the `&mut` borrow keeps the
    /// session exclusively held until the operation finishes.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotOpen`] when the session has been closed.
    pub fn transport_mut(&mut self) -> Result<&mut dyn Transport, SessionError> {
        match (&self.state, self.transport.as_deref_mut()) {
            (SessionState::Open, Some(transport)) => Ok(transport),
            _ => Err(SessionError::NotOpen),
        }
    }

    /// Disconnects and releases the transport.
    ///
    /// Closing an already-closed session is a no-op. A disconnect failure is
    /// logged and swallowed: the transport is dropped either way, and the
    /// session always ends up `Closed`.
    pub fn close(&mut self) {
        let Some(mut transport) = self.transport.take() else {
            return;
        };
        self.state = SessionState::Closing;
        debug!(host = self.config.host(), "closing session");
        if let Err(error) = transport.disconnect() {
            warn!(host = self.config.host(), %error, "disconnect failed; dropping transport");
        }
        self.state = SessionState::Closed;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // A dropped-but-open session still tears its transport down.
        self.close();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("host", &self.config.host())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
