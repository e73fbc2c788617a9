#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` executes batched uploads and downloads against an open
//! [`Session`](session::Session), turning one [`TransferRequest`] into a
//! list of per-file [`TransferOutcome`] values. Byte movement is entirely
//! the transport provider's job; the engine resolves destinations, applies
//! include/exclude masks, offers each action to the confirmation gate, and
//! collects what the provider reports.
//!
//! # Filter asymmetry
//!
//! The two directions apply masks at different points, deliberately:
//!
//! - [`download`] filters the **literal leaf name of the source path**
//!   before any wildcard expansion or remote listing happens. A request for
//!   `/logs/*.log` is filtered on the string `*.log`, not on the files the
//!   provider ends up matching. This is a known sharp edge, preserved as
//!   documented behaviour.
//! - [`upload`] expands the local source first and filters **each resolved
//!   file**, because the local side is enumerable before the transfer.
//!
//! # Outcome semantics
//!
//! One [`TransferOutcome`] is emitted per file the provider attempted;
//! exactly, with no duplicates or omissions. A per-file failure is a
//! warning-level outcome, never an abort: a 3-file batch whose second file
//! fails still reports all three outcomes. Only conditions that prevent the
//! whole operation (closed session, unusable local path, a transport-level
//! batch failure) surface as [`TransferError`].

mod error;
mod gate;
mod outcome;
mod request;
mod transfers;

pub use error::TransferError;
pub use gate::{AlwaysConfirm, TransferAction, TransferGate};
pub use outcome::TransferOutcome;
pub use request::TransferRequest;
pub use transfers::{download, upload};
