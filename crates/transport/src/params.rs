use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Protocol variant spoken by the provider.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Protocol {
    /// File Transfer Protocol, optionally over TLS/SSL.
    Ftp,
    /// SSH File Transfer Protocol.
    Sftp,
    /// Secure Copy over SSH.
    Scp,
}

impl Protocol {
    /// Default server port for the protocol when the caller passes port `0`.
    ///
    /// FTP over implicit TLS listens on 990; the SSH-based protocols share
    /// port 22.
    #[must_use]
    pub const fn default_port(self, security: SecurityMode) -> u16 {
        match self {
            Self::Ftp => match security {
                SecurityMode::ImplicitTls => 990,
                SecurityMode::None | SecurityMode::ExplicitTls | SecurityMode::ExplicitSsl => 21,
            },
            Self::Sftp | Self::Scp => 22,
        }
    }
}

/// Channel security negotiated for the connection.
///
/// Only meaningful for [`Protocol::Ftp`]; the SSH-based protocols carry their
/// own security and ignore this setting.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SecurityMode {
    /// Plain connection.
    #[default]
    None,
    /// TLS negotiated before any protocol exchange (FTPS on a dedicated port).
    ImplicitTls,
    /// TLS upgraded via `AUTH TLS` on the standard control channel.
    ExplicitTls,
    /// SSL upgraded via `AUTH SSL` on the standard control channel.
    ExplicitSsl,
}

/// FTP data-connection establishment mode.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum FtpMode {
    /// Server connects back to the client for data transfers.
    Active,
    /// Client opens the data connection (firewall friendly, the default).
    #[default]
    Passive,
}

/// Authentication material for one connection.
///
/// The secret is stored in a [`Zeroizing`] buffer so it is wiped from memory
/// when the credentials are dropped, and `Debug` output never contains it.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    secret: Zeroizing<String>,
    host_key_fingerprint: Option<String>,
}

impl Credentials {
    /// Creates credentials for `username` with the given secret.
    #[must_use]
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: Zeroizing::new(secret.into()),
            host_key_fingerprint: None,
        }
    }

    /// Attaches an expected SSH host key fingerprint.
    ///
    /// Providers compare the server's key against this value during the
    /// handshake when it is present.
    #[must_use]
    pub fn with_host_key_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.host_key_fingerprint = Some(fingerprint.into());
        self
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the secret for provider consumption.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns the expected host key fingerprint, if one was supplied.
    #[must_use]
    pub fn host_key_fingerprint(&self) -> Option<&str> {
        self.host_key_fingerprint.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .field("host_key_fingerprint", &self.host_key_fingerprint)
            .finish()
    }
}

/// Per-mechanism trust checks the caller has elected to skip.
///
/// Each flag suppresses verification of one concrete mechanism. The session
/// layer derives these from the protocol + security combination; providers
/// only consume them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrustOverrides {
    /// Skip SSH host key verification (SFTP/SCP).
    pub host_key: bool,
    /// Skip SSL certificate verification (FTP over SSL).
    pub ssl_certificate: bool,
    /// Skip TLS certificate verification (FTP over TLS).
    pub tls_certificate: bool,
}

/// Everything a [`Connector`](crate::Connector) needs to open a connection.
#[derive(Clone, Debug)]
pub struct ConnectParams {
    host: String,
    port: u16,
    protocol: Protocol,
    security: SecurityMode,
    credentials: Credentials,
    ftp_mode: FtpMode,
    timeout: Duration,
    trust: TrustOverrides,
}

impl ConnectParams {
    /// Bundles the supplied parameters. `port` must already be resolved; the
    /// session layer substitutes [`Protocol::default_port`] for port `0`
    /// before constructing this value.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        host: impl Into<String>,
        port: u16,
        protocol: Protocol,
        security: SecurityMode,
        credentials: Credentials,
        ftp_mode: FtpMode,
        timeout: Duration,
        trust: TrustOverrides,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            protocol,
            security,
            credentials,
            ftp_mode,
            timeout,
            trust,
        }
    }

    /// Remote host name or address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Resolved remote port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Protocol the provider must speak.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Channel security mode.
    #[must_use]
    pub const fn security(&self) -> SecurityMode {
        self.security
    }

    /// Authentication material.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// FTP data-connection mode. Ignored by SSH-based protocols.
    #[must_use]
    pub const fn ftp_mode(&self) -> FtpMode {
        self.ftp_mode
    }

    /// Timeout applied to connect and handshake.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Trust checks to skip.
    #[must_use]
    pub const fn trust(&self) -> TrustOverrides {
        self.trust
    }
}
