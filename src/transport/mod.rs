//! Transport layer for sending HTTP requests to the review server.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Per-request TLS trust and timeout settings ([`TlsPolicy`], [`Timeouts`])

mod client;
mod error;
mod http;
mod options;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use options::{Timeouts, TlsPolicy};
