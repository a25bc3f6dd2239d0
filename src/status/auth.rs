//! Basic authorization header value.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes `username:password` as padded standard base64.
///
/// The caller is responsible for prefixing the result with `Basic `
/// when it sets the `Authorization` header.
#[must_use]
pub fn authorization_header_value(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}
