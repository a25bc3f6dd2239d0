//! Connection settings applied per request.

use std::time::Duration;

/// How server certificates are checked on `https://` requests.
///
/// The policy travels with each [`HttpRequest`](super::HttpRequest), so
/// relaxing it for one server never affects requests to another.
/// Plain `http://` requests ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsPolicy {
    /// Verify the certificate chain and host name.
    #[default]
    Verify,
    /// Accept any certificate and any host name.
    ///
    /// Reduced-security mode for internal servers with self-signed
    /// certificates. Must be enabled explicitly.
    AcceptInvalidCerts,
}

impl TlsPolicy {
    /// Maps the `accept_invalid_certs` setting to a policy.
    #[must_use]
    pub const fn from_accept_invalid_certs(accept: bool) -> Self {
        if accept {
            Self::AcceptInvalidCerts
        } else {
            Self::Verify
        }
    }

    /// Returns true if certificate checks are disabled.
    #[must_use]
    pub const fn is_permissive(self) -> bool {
        matches!(self, Self::AcceptInvalidCerts)
    }
}

/// Upper bounds for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Time allowed to establish the connection (including TLS).
    pub connect: Duration,
    /// Time allowed for the whole exchange, from connect to last body byte.
    pub request: Duration,
}

impl Timeouts {
    /// Default connect timeout (10 seconds).
    pub const DEFAULT_CONNECT: Duration = Duration::from_secs(10);

    /// Default request timeout (30 seconds).
    pub const DEFAULT_REQUEST: Duration = Duration::from_secs(30);

    /// Creates timeouts with the given bounds.
    #[must_use]
    pub const fn new(connect: Duration, request: Duration) -> Self {
        Self { connect, request }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONNECT, Self::DEFAULT_REQUEST)
    }
}
