//! Error types for request building.

use thiserror::Error;

/// The configured base URL does not start with a recognized scheme.
///
/// Only `http://` and `https://` are accepted, compared case-sensitively.
/// No notification can be sent for such a server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid base URL '{0}': expected it to start with http:// or https://")]
pub struct InvalidBaseUrl(pub String);
