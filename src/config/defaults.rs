//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.
//! Timeout defaults are owned by [`Timeouts`]; these functions expose them
//! to the configuration layer.

use std::time::Duration;

use crate::transport::Timeouts;

/// Default configuration file name written by `init`.
pub const CONFIG_FILE: &str = "stash-notify.toml";

/// Default connect timeout.
#[must_use]
pub const fn connect_timeout() -> Duration {
    Timeouts::DEFAULT_CONNECT
}

/// Default request timeout.
#[must_use]
pub const fn request_timeout() -> Duration {
    Timeouts::DEFAULT_REQUEST
}
