use std::time::Duration;

use transport::{ConnectParams, Credentials, FtpMode, Protocol, SecurityMode, TrustOverrides};

use crate::SessionError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Validated description of one connection to open.
///
/// Built through [`SessionConfigBuilder`]; direct construction is not exposed
/// so a config with an empty host cannot exist.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    host: String,
    port: u16,
    protocol: Protocol,
    security: SecurityMode,
    credentials: Credentials,
    ftp_mode: FtpMode,
    timeout: Duration,
    ignore_host_security: bool,
}

impl SessionConfig {
    /// Starts a builder for a connection to `host` as `credentials`.
    #[must_use]
    pub fn builder(host: impl Into<String>, credentials: Credentials) -> SessionConfigBuilder {
        SessionConfigBuilder::new(host, credentials)
    }

    /// Remote host name or address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Configured port; `0` means "use the protocol default".
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// The port the connection will actually use, after substituting the
    /// protocol default for `0`.
    #[must_use]
    pub const fn effective_port(&self) -> u16 {
        if self.port == 0 {
            self.protocol.default_port(self.security)
        } else {
            self.port
        }
    }

    /// Protocol variant.
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

    /// FTP data-connection mode.
    #[must_use]
    pub const fn ftp_mode(&self) -> FtpMode {
        self.ftp_mode
    }

    /// Connect/handshake timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether host security checks are to be skipped.
    #[must_use]
    pub const fn ignore_host_security(&self) -> bool {
        self.ignore_host_security
    }

    /// Resolves this config into the parameters handed to the connector.
    #[must_use]
    pub(crate) fn connect_params(&self) -> ConnectParams {
        ConnectParams::new(
            self.host.clone(),
            self.effective_port(),
            self.protocol,
            self.security,
            self.credentials.clone(),
            self.ftp_mode,
            self.timeout,
            resolve_trust_overrides(self.protocol, self.security, self.ignore_host_security),
        )
    }
}

/// Fluent builder for [`SessionConfig`].
#[derive(Clone, Debug)]
pub struct SessionConfigBuilder {
    host: String,
    port: u16,
    protocol: Protocol,
    security: SecurityMode,
    credentials: Credentials,
    ftp_mode: FtpMode,
    timeout: Duration,
    ignore_host_security: bool,
}

impl SessionConfigBuilder {
    fn new(host: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            host: host.into(),
            port: 0,
            protocol: Protocol::Sftp,
            security: SecurityMode::None,
            credentials,
            ftp_mode: FtpMode::Passive,
            timeout: DEFAULT_TIMEOUT,
            ignore_host_security: false,
        }
    }

    /// Sets an explicit port. `0` keeps the protocol default.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Selects the wire protocol. Defaults to [`Protocol::Sftp`].
    #[must_use]
    pub const fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Selects the channel security mode. Defaults to [`SecurityMode::None`].
    #[must_use]
    pub const fn security(mut self, security: SecurityMode) -> Self {
        self.security = security;
        self
    }

    /// Selects the FTP data-connection mode. Ignored by SFTP/SCP.
    #[must_use]
    pub const fn ftp_mode(mut self, mode: FtpMode) -> Self {
        self.ftp_mode = mode;
        self
    }

    /// Overrides the connect/handshake timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Skips verification of the security mechanism in effect for this
    /// protocol + security combination. See [`resolve_trust_overrides`].
    #[must_use]
    pub const fn ignore_host_security(mut self, ignore: bool) -> Self {
        self.ignore_host_security = ignore;
        self
    }

    /// Validates and produces the config.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidConfig`] when the host is empty.
    pub fn build(self) -> Result<SessionConfig, SessionError> {
        if self.host.trim().is_empty() {
            return Err(SessionError::InvalidConfig {
                detail: "host must not be empty".into(),
            });
        }
        Ok(SessionConfig {
            host: self.host,
            port: self.port,
            protocol: self.protocol,
            security: self.security,
            credentials: self.credentials,
            ftp_mode: self.ftp_mode,
            timeout: self.timeout,
            ignore_host_security: self.ignore_host_security,
        })
    }
}

/// Maps the `ignore_host_security` convenience flag onto the concrete trust
/// checks to skip.
///
/// Only the mechanism actually in effect is overridden, never one that is not
/// in use:
///
/// - SFTP/SCP: the SSH host key check.
/// - FTP with implicit TLS: both the SSL and TLS certificate checks.
/// - FTP with explicit SSL: the SSL certificate check only.
/// - FTP with explicit TLS: the TLS certificate check only.
/// - Plain FTP: nothing (there is no security mechanism to override).
#[must_use]
pub const fn resolve_trust_overrides(
    protocol: Protocol,
    security: SecurityMode,
    ignore_host_security: bool,
) -> TrustOverrides {
    let mut trust = TrustOverrides {
        host_key: false,
        ssl_certificate: false,
        tls_certificate: false,
    };
    if !ignore_host_security {
        return trust;
    }
    match protocol {
        Protocol::Sftp | Protocol::Scp => trust.host_key = true,
        Protocol::Ftp => match security {
            SecurityMode::ImplicitTls => {
                trust.ssl_certificate = true;
                trust.tls_certificate = true;
            }
            SecurityMode::ExplicitSsl => trust.ssl_certificate = true,
            SecurityMode::ExplicitTls => trust.tls_certificate = true,
            SecurityMode::None => {}
        },
    }
    trust
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("user", "pw")
    }

    #[test]
    fn builder_rejects_empty_host() {
        let error = SessionConfig::builder("  ", creds()).build().unwrap_err();
        assert!(matches!(error, SessionError::InvalidConfig { .. }));
    }

    #[test]
    fn port_zero_resolves_to_protocol_default() {
        let config = SessionConfig::builder("h", creds())
            .protocol(Protocol::Ftp)
            .security(SecurityMode::ImplicitTls)
            .build()
            .expect("valid config");
        assert_eq!(config.port(), 0);
        assert_eq!(config.effective_port(), 990);

        let explicit = SessionConfig::builder("h", creds())
            .protocol(Protocol::Ftp)
            .port(2121)
            .build()
            .expect("valid config");
        assert_eq!(explicit.effective_port(), 2121);
    }

    #[test]
    fn trust_overrides_nothing_when_not_ignoring() {
        let trust = resolve_trust_overrides(Protocol::Sftp, SecurityMode::None, false);
        assert_eq!(trust, TrustOverrides::default());
    }

    #[test]
    fn sftp_ignore_overrides_host_key_only() {
        let trust = resolve_trust_overrides(Protocol::Sftp, SecurityMode::None, true);
        assert!(trust.host_key);
        assert!(!trust.ssl_certificate);
        assert!(!trust.tls_certificate);
    }

    #[test]
    fn scp_ignore_overrides_host_key_only() {
        let trust = resolve_trust_overrides(Protocol::Scp, SecurityMode::None, true);
        assert!(trust.host_key);
        assert!(!trust.ssl_certificate);
        assert!(!trust.tls_certificate);
    }

    #[test]
    fn ftp_implicit_ignore_overrides_both_certificates() {
        let trust = resolve_trust_overrides(Protocol::Ftp, SecurityMode::ImplicitTls, true);
        assert!(!trust.host_key);
        assert!(trust.ssl_certificate);
        assert!(trust.tls_certificate);
    }

    #[test]
    fn ftp_explicit_modes_override_matching_certificate_only() {
        let ssl = resolve_trust_overrides(Protocol::Ftp, SecurityMode::ExplicitSsl, true);
        assert!(ssl.ssl_certificate);
        assert!(!ssl.tls_certificate);

        let tls = resolve_trust_overrides(Protocol::Ftp, SecurityMode::ExplicitTls, true);
        assert!(!tls.ssl_certificate);
        assert!(tls.tls_certificate);
    }

    #[test]
    fn plain_ftp_ignore_overrides_nothing() {
        let trust = resolve_trust_overrides(Protocol::Ftp, SecurityMode::None, true);
        assert_eq!(trust, TrustOverrides::default());
    }
}
