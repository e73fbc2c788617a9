#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `transport` defines the seam between the ferry client core and whatever
//! component performs the actual wire-protocol work. The crate contains no
//! network code: it exposes the [`Transport`] and [`Connector`] traits that a
//! concrete FTP/SFTP/SCP provider implements, together with the data types
//! that cross the boundary in both directions (connection parameters, raw
//! listing entries, batch results, progress events).
//!
//! # Design
//!
//! - [`Connector`] performs connect + authenticate and hands back a live
//!   [`Transport`]. The progress observer is supplied to
//!   [`Connector::connect`] rather than registered afterwards, so a provider
//!   that starts reporting during the handshake cannot lose events.
//! - [`Transport`] exposes the four primitives the client core needs:
//!   directory listing, batched get, batched put, and disconnect. All
//!   transfers are binary; [`DataMode`] exists only to make that explicit at
//!   the call sites.
//! - Per-file failures inside a batch are reported through
//!   [`BatchResult`]/[`FileAttempt`] values, not through [`TransportError`].
//!   A provider returns `Err` only when the batch as a whole could not run.
//!
//! # Invariants
//!
//! - A [`BatchResult`] lists every file the provider attempted, in attempt
//!   order, with at most one [`FileAttempt`] per file.
//! - [`Credentials`] zeroizes the stored secret on drop and never exposes it
//!   through `Debug` output.
//! - Progress events are delivered synchronously from within the transfer
//!   call, on the calling thread. Observers must return promptly; a blocked
//!   observer stalls the transfer.

mod batch;
mod entry;
mod error;
mod params;
mod progress;

pub use batch::{BatchResult, FileAttempt};
pub use entry::{EntryKind, RawEntry};
pub use error::TransportError;
pub use params::{ConnectParams, Credentials, FtpMode, Protocol, SecurityMode, TrustOverrides};
pub use progress::{Direction, NullObserver, ProgressEvent, ProgressObserver};

use std::path::Path;
use std::sync::Arc;

/// Transfer data representation requested from the provider.
///
/// Text/ASCII transcoding is deliberately unsupported; every transfer in the
/// ferry core is binary, and the single variant keeps that decision visible
/// at each call site instead of burying it in a default argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataMode {
    /// Bytes are moved verbatim.
    Binary,
}

/// One live, authenticated connection to a remote host.
///
/// Implementations are not required to tolerate concurrent calls; the ferry
/// session layer guarantees exclusive access for the duration of each
/// operation.
pub trait Transport: Send {
    /// Lists the immediate contents of `path` on the remote host.
    ///
    /// Providers return entries exactly as the server reported them,
    /// including `.` and `..` where the protocol surfaces them; the walker is
    /// responsible for suppressing those.
    fn list_directory(&mut self, path: &str) -> Result<Vec<RawEntry>, TransportError>;

    /// Downloads the files selected by `remote_source` (which may carry a
    /// wildcard leaf) into `local_destination`.
    ///
    /// When `remove_source` is set, each successfully transferred file is
    /// deleted from the remote host. Failures of individual files are
    /// recorded in the returned [`BatchResult`]; the provider keeps going.
    fn get_files(
        &mut self,
        remote_source: &str,
        local_destination: &Path,
        remove_source: bool,
        mode: DataMode,
    ) -> Result<BatchResult, TransportError>;

    /// Uploads the local file at `local_source` to `remote_destination`.
    ///
    /// Same `remove_source` and per-file failure semantics as
    /// [`get_files`](Self::get_files).
    fn put_files(
        &mut self,
        local_source: &Path,
        remote_destination: &str,
        remove_source: bool,
        mode: DataMode,
    ) -> Result<BatchResult, TransportError>;

    /// Closes the connection and releases provider resources.
    ///
    /// Called at most once per transport; the session layer drops the
    /// transport afterwards regardless of the result.
    fn disconnect(&mut self) -> Result<(), TransportError>;
}

impl std::fmt::Debug for dyn Transport + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Transport")
    }
}

/// Factory that performs connect + authenticate for a set of parameters.
pub trait Connector {
    /// Establishes a connection described by `params`.
    ///
    /// The `observer` is wired into the provider before any protocol
    /// exchange starts, so progress events emitted during or after the
    /// handshake all reach it. On error nothing is left half-open: the
    /// provider tears down whatever it built before returning.
    fn connect(
        &self,
        params: &ConnectParams,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<Box<dyn Transport>, TransportError>;
}
