//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::client::{ClientConfig, ExtraHeaders};
use crate::status::validate_base_url;
use crate::transport::{Timeouts, TlsPolicy};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated connection settings.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Clone)]
pub struct ValidatedConfig {
    /// Server base URL, known to start with `http://` or `https://`
    pub base_url: String,

    /// User for Basic authentication
    pub username: String,

    /// Password for Basic authentication
    pub password: String,

    /// Extra headers, known to be valid HTTP headers
    pub extra_headers: ExtraHeaders,

    /// Certificate checks for `https://` servers
    pub tls: TlsPolicy,

    /// Connect and request timeouts
    pub timeouts: Timeouts,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ base_url: {}, username: {}, headers: {}, tls: {:?}, \
             connect_timeout: {}s, timeout: {}s }}",
            self.base_url,
            self.username,
            self.extra_headers.len(),
            self.tls,
            self.timeouts.connect.as_secs(),
            self.timeouts.request.as_secs(),
        )
    }
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("extra_headers", &self.extra_headers)
            .field("tls", &self.tls)
            .field("timeouts", &self.timeouts)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`base_url`, `username`, `password`)
    /// - The base URL does not start with `http://` or `https://`
    /// - An extra header is not a valid HTTP header
    /// - A timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let base_url = Self::resolve_base_url(cli, toml)?;

        let username = Self::resolve_required(
            cli.username.as_deref(),
            toml.and_then(|t| t.server.username.as_deref()),
            field::USERNAME,
            "Use --username, STASH_USERNAME, or set server.username in config file",
        )?;

        let password = Self::resolve_required(
            cli.password.as_deref(),
            toml.and_then(|t| t.server.password.as_deref()),
            field::PASSWORD,
            "Use --password, STASH_PASSWORD, or set server.password in config file",
        )?;

        let extra_headers = Self::resolve_headers(cli, toml)?;

        // Flag only enables: true in either source wins
        let accept_invalid_certs =
            cli.insecure || toml.is_some_and(|t| t.http.accept_invalid_certs);

        let timeouts = Self::resolve_timeouts(cli, toml)?;

        Ok(Self {
            base_url,
            username,
            password,
            extra_headers,
            tls: TlsPolicy::from_accept_invalid_certs(accept_invalid_certs),
            timeouts,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns the client settings for a [`StashClient`](crate::client::StashClient).
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(
            self.base_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
        )
        .with_extra_headers(self.extra_headers.clone())
        .with_tls(self.tls)
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let base_url = Self::resolve_required(
            cli.base_url.as_deref(),
            toml.and_then(|t| t.server.base_url.as_deref()),
            field::BASE_URL,
            "Use --base-url or set server.base_url in config file",
        )?;

        validate_base_url(&base_url)?;
        Ok(base_url)
    }

    fn resolve_required(
        cli_value: Option<&str>,
        toml_value: Option<&str>,
        name: &'static str,
        hint: &'static str,
    ) -> Result<String, ConfigError> {
        // CLI takes precedence
        cli_value
            .or(toml_value)
            .map(ToString::to_string)
            .ok_or_else(|| ConfigError::missing(name, hint))
    }

    fn resolve_headers(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<ExtraHeaders, ConfigError> {
        let raw = cli
            .headers
            .as_deref()
            .or_else(|| toml.and_then(|t| t.server.headers.as_deref()))
            .unwrap_or_default();

        let headers = ExtraHeaders::parse(raw);

        // Reject headers that could never be sent
        headers.to_header_map()?;

        Ok(headers)
    }

    fn resolve_timeouts(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Timeouts, ConfigError> {
        let http = toml.map(|t| &t.http);

        // Priority: CLI explicit > TOML > default
        let connect = resolve_duration(
            cli.connect_timeout
                .or_else(|| http.and_then(|h| h.connect_timeout)),
            defaults::connect_timeout(),
            "connect_timeout",
        )?;

        let request = resolve_duration(
            cli.timeout.or_else(|| http.and_then(|h| h.timeout)),
            defaults::request_timeout(),
            "timeout",
        )?;

        Ok(Timeouts::new(connect, request))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn resolve_duration(
    seconds: Option<u64>,
    default: Duration,
    field: &'static str,
) -> Result<Duration, ConfigError> {
    match seconds {
        None => Ok(default),
        Some(0) => Err(ConfigError::InvalidDuration {
            field,
            reason: "must be greater than 0".to_string(),
        }),
        Some(secs) => Ok(Duration::from_secs(secs)),
    }
}
