#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ferry` is a stateful remote-file-transfer client core. It manages
//! session lifecycle, walks remote directory trees lazily with
//! include/exclude filtering, and executes batched uploads/downloads with
//! per-file outcome reporting. The wire protocols themselves (FTP/SFTP/SCP
//! handshake, encryption, transfer chunking) live behind the
//! [`Transport`]/[`Connector`] seam and are supplied by the embedding
//! application.
//!
//! # Architecture
//!
//! - [`Session`] owns one authenticated connection and enforces the
//!   `Closed -> Opening -> Open -> Closing -> Closed` lifecycle. The
//!   [`open_default`]/[`close_default`]/[`with_default`] helpers layer a
//!   process-wide implicit handle on top for command-verb front-ends.
//! - [`ListBuilder`] starts a lazy, optionally recursive remote listing
//!   that yields [`DirectoryEntry`] values in depth-first pre-order.
//! - [`download`]/[`upload`] run one [`TransferRequest`] each, consult a
//!   [`TransferGate`] before moving bytes, and return one
//!   [`TransferOutcome`] per file the provider attempted.
//! - [`MaskSet`] is the single glob dialect shared by the walker and the
//!   engine: case-insensitive, leaf names only.
//!
//! # Example
//!
//! Open a session against a scripted in-memory provider, list a directory,
//! and download a batch:
//!
//! ```
//! use ferry::{ListBuilder, Session, SessionConfig, TransferRequest};
//! use ferry::{AlwaysConfirm, Credentials, download};
//! use test_support::{ScriptedConnector, file_entry};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = ScriptedConnector::new()
//!     .with_dir("/data", vec![file_entry("a.txt", 3)]);
//!
//! let config = SessionConfig::builder("example.net", Credentials::new("u", "p")).build()?;
//! let mut session = Session::open(&connector, config)?;
//!
//! let names: Vec<_> = ListBuilder::new("/data")
//!     .list(&mut session)
//!     .map(|entry| entry.map(|e| e.name().to_owned()))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(names, ["a.txt"]);
//!
//! let local = tempfile::tempdir()?;
//! let request = TransferRequest::download("/data/a.txt", local.path().display().to_string());
//! let outcomes = download(&mut session, &request, &AlwaysConfirm)?;
//! assert!(outcomes.iter().all(|outcome| outcome.succeeded()));
//!
//! session.close();
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub use engine::{
    AlwaysConfirm, TransferAction, TransferError, TransferGate, TransferOutcome, TransferRequest,
    download, upload,
};
pub use filters::{MaskError, MaskSet};
pub use session::{
    Session, SessionConfig, SessionConfigBuilder, SessionError, SessionState, close_default,
    open_default, open_default_with_observer, resolve_trust_overrides, with_default,
};
pub use transport::{
    BatchResult, ConnectParams, Connector, Credentials, DataMode, Direction, EntryKind,
    FileAttempt, FtpMode, NullObserver, ProgressEvent, ProgressObserver, Protocol, RawEntry,
    SecurityMode, Transport, TransportError, TrustOverrides,
};
pub use walk::{DirectoryEntry, ListBuilder, Listing, ListingError, ListingErrorKind};
