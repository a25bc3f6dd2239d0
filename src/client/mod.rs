//! Build-status notification client.
//!
//! Ties the request builder in [`crate::status`] to an
//! [`HttpClient`](crate::transport::HttpClient):
//! - Connection settings ([`ClientConfig`])
//! - Static extra headers ([`ExtraHeaders`])
//! - One notification's inputs ([`BuildStatus`])
//! - The sender ([`StatusSender`], [`StashClient`])

mod config;
mod error;
mod headers;
mod stash;

#[cfg(test)]
mod stash_tests;

pub use config::ClientConfig;
pub use error::{HeaderError, NotifyError};
pub use headers::ExtraHeaders;
pub use stash::{BuildStatus, StashClient, StatusSender};
