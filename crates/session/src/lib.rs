#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `session` owns the connection lifecycle of the ferry transfer core. A
//! [`Session`] wraps one live transport obtained from a
//! [`Connector`](transport::Connector) and enforces the observable state
//! machine `Closed -> Opening -> Open -> Closing -> Closed`. Opening is a
//! constructor, so a failed open can never leak a half-built handle: either
//! the caller receives an `Open` session or no session exists at all.
//!
//! # Design
//!
//! - [`SessionConfig`] captures everything needed to connect: host, port
//!   (`0` selects the protocol default), protocol and security tags,
//!   credentials, FTP data-connection mode, timeout, and the
//!   `ignore_host_security` convenience flag. The flag is resolved into
//!   concrete [`TrustOverrides`](transport::TrustOverrides) during open so
//!   only the mechanism actually in effect is ever overridden.
//! - Exclusive access is the caller's contract (spelled `&mut self` on every
//!   listing/transfer entry point); the transport underneath is not safe to
//!   share across concurrent operations.
//! - The registry module layers the implicit process-wide default handle
//!   on top of the explicit API: at most one default session, opening a
//!   second refuses with [`SessionError::AlreadyOpen`], and closing with
//!   nothing open reports [`SessionError::NoActiveSession`].
//!
//! # Errors
//!
//! All operations surface [`SessionError`]. Connection failures carry the
//! underlying [`TransportError`](transport::TransportError) as their source.

mod config;
mod error;
mod registry;
mod session;

pub use config::{SessionConfig, SessionConfigBuilder, resolve_trust_overrides};
pub use error::SessionError;
pub use registry::{close_default, open_default, open_default_with_observer, with_default};
pub use session::{Session, SessionState};
