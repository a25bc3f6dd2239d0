//! Error types for the notification client.

use thiserror::Error;

use crate::status::InvalidBaseUrl;
use crate::transport::HttpError;

/// A configured header cannot be sent over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The header name is not a valid HTTP token.
    #[error("Invalid header name '{name}': {reason}")]
    InvalidName {
        /// The rejected header name
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The header value contains characters HTTP does not allow.
    #[error("Invalid header value for '{name}': {reason}")]
    InvalidValue {
        /// The header name
        name: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Error type for sending one build status.
///
/// Nothing here is retried. Callers that must never fail because of a
/// status report use [`StatusSender::notify`](super::StatusSender::notify),
/// which logs the error instead of returning it.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The server base URL has no `http://` or `https://` scheme.
    #[error(transparent)]
    InvalidBaseUrl(#[from] InvalidBaseUrl),

    /// The assembled build-status URL could not be parsed.
    #[error("Invalid build status URL '{url}': {reason}")]
    InvalidUrl {
        /// The assembled URL
        url: String,
        /// Parser error
        reason: String,
    },

    /// A request header could not be encoded.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// The HTTP exchange failed.
    #[error("Could not send build status: {0}")]
    Http(#[from] HttpError),
}
