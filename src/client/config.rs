//! Connection settings for one client instance.

use std::fmt;

use crate::transport::TlsPolicy;

use super::ExtraHeaders;

/// Server location, credentials, and static headers.
///
/// Immutable once built; the builder methods consume and return `self`.
/// The base URL is checked when a request is built, not here.
///
/// # Example
///
/// ```
/// use stash_notify::client::ClientConfig;
/// use stash_notify::transport::TlsPolicy;
///
/// let config = ClientConfig::new("https://stash.internal", "ci", "hunter2")
///     .with_header_string("X-Header-1:value-1")
///     .with_tls(TlsPolicy::AcceptInvalidCerts);
/// assert_eq!(config.extra_headers().get("X-Header-1"), Some("value-1"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    username: String,
    password: String,
    extra_headers: ExtraHeaders,
    tls: TlsPolicy,
}

impl ClientConfig {
    /// Creates a configuration with no extra headers and verified TLS.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            extra_headers: ExtraHeaders::default(),
            tls: TlsPolicy::Verify,
        }
    }

    /// Sets the extra headers.
    #[must_use]
    pub fn with_extra_headers(mut self, headers: ExtraHeaders) -> Self {
        self.extra_headers = headers;
        self
    }

    /// Parses and sets the extra headers from a `Key:Value,...` string.
    #[must_use]
    pub fn with_header_string(self, raw: &str) -> Self {
        self.with_extra_headers(ExtraHeaders::parse(raw))
    }

    /// Sets the TLS policy for `https://` servers.
    #[must_use]
    pub const fn with_tls(mut self, tls: TlsPolicy) -> Self {
        self.tls = tls;
        self
    }

    /// Returns the server base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the Basic auth user name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the Basic auth password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the extra headers.
    #[must_use]
    pub const fn extra_headers(&self) -> &ExtraHeaders {
        &self.extra_headers
    }

    /// Returns the TLS policy.
    #[must_use]
    pub const fn tls(&self) -> TlsPolicy {
        self.tls
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("extra_headers", &self.extra_headers)
            .field("tls", &self.tls)
            .finish()
    }
}
