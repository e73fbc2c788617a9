//! Process-wide default session handle.
//!
//! A thin convenience layer over the explicit [`Session`] API for callers
//! that want command-verb ergonomics: open once, run listing/transfer verbs
//! without threading a handle, close at the end. At most one default session
//! exists; independent explicit sessions are unaffected by this module.

use std::sync::{Mutex, PoisonError};

use tracing::warn;
use transport::{Connector, ProgressObserver};

use crate::{Session, SessionConfig, SessionError};

static DEFAULT_SESSION: Mutex<Option<Session>> = Mutex::new(None);

fn slot() -> std::sync::MutexGuard<'static, Option<Session>> {
    // A panic while holding the slot leaves at worst a closed or usable
    // session behind, so poisoning is recoverable.
    DEFAULT_SESSION
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Opens the process-wide default session.
///
/// # Errors
///
/// [`SessionError::AlreadyOpen`] when a default session already exists; the
/// existing session is left untouched and remains usable. Connection
/// failures propagate from [`Session::open`].
pub fn open_default(connector: &dyn Connector, config: SessionConfig) -> Result<(), SessionError> {
    let mut slot = slot();
    if slot.is_some() {
        return Err(SessionError::AlreadyOpen);
    }
    *slot = Some(Session::open(connector, config)?);
    Ok(())
}

/// Like [`open_default`], with a progress observer subscribed before the
/// transport connects.
pub fn open_default_with_observer(
    connector: &dyn Connector,
    config: SessionConfig,
    observer: std::sync::Arc<dyn ProgressObserver>,
) -> Result<(), SessionError> {
    let mut slot = slot();
    if slot.is_some() {
        return Err(SessionError::AlreadyOpen);
    }
    *slot = Some(Session::open_with_observer(connector, config, observer)?);
    Ok(())
}

/// Closes and clears the default session.
///
/// # Errors
///
/// [`SessionError::NoActiveSession`] when nothing is open. This is a
/// warning-level condition ([`SessionError::is_warning`] returns `true`);
/// callers report it and carry on.
pub fn close_default() -> Result<(), SessionError> {
    let mut slot = slot();
    match slot.take() {
        Some(mut session) => {
            session.close();
            Ok(())
        }
        None => {
            warn!("close requested with no active session");
            Err(SessionError::NoActiveSession)
        }
    }
}

/// Runs `operation` against the default session.
///
/// The slot lock is held for the duration, which is exactly the per-session
/// exclusive-access guard the transfer core requires.
///
/// # Errors
///
/// [`SessionError::NotOpen`] when no default session exists.
pub fn with_default<R>(
    operation: impl FnOnce(&mut Session) -> R,
) -> Result<R, SessionError> {
    let mut slot = slot();
    match slot.as_mut() {
        Some(session) => Ok(operation(session)),
        None => Err(SessionError::NotOpen),
    }
}
