//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Server connection section
    #[serde(default)]
    pub server: ServerSection,

    /// HTTP transport section
    #[serde(default)]
    pub http: HttpSection,
}

/// Server connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Server base URL
    pub base_url: Option<String>,

    /// User for Basic authentication
    pub username: Option<String>,

    /// Password for Basic authentication
    pub password: Option<String>,

    /// Extra headers as comma-separated `Key:Value` pairs
    pub headers: Option<String>,
}

/// HTTP transport section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Accept invalid or self-signed TLS certificates
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# stash-notify configuration file

[server]
# Server base URL (required)
# A single trailing slash is ignored.
# base_url = "https://stash.example.com"

# Basic authentication (required)
# Can also be set with STASH_USERNAME / STASH_PASSWORD.
# username = "build-bot"
# password = "secret"

# Extra headers sent with every request, as comma-separated Key:Value pairs.
# Pairs without a colon are ignored. An extra header replaces a built-in
# header of the same name (Content-Type, Content-Length, Authorization).
# headers = "X-Header-1:value-1,X-Header-2:value-2"

[http]
# Accept invalid or self-signed TLS certificates (default: false).
# Disables certificate and host name checks for https:// servers.
# accept_invalid_certs = false

# Connect timeout in seconds (default: 10)
# connect_timeout = 10

# Request timeout in seconds (default: 30)
# timeout = 30
"#
    .to_string()
}
