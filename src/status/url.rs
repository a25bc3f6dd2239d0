//! Build-status endpoint URL construction.

use super::InvalidBaseUrl;

/// Path of the build-status resource, relative to the server base URL.
///
/// The commit revision is appended after the final slash.
pub const BUILD_STATUS_PATH: &str = "/rest/build-status/1.0/commits/";

/// Checks that a base URL starts with `http://` or `https://`.
///
/// The comparison is case-sensitive: `HTTP://host` is rejected.
///
/// # Errors
///
/// Returns [`InvalidBaseUrl`] when neither scheme prefix is present.
pub fn validate_base_url(base: &str) -> Result<(), InvalidBaseUrl> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(())
    } else {
        Err(InvalidBaseUrl(base.to_string()))
    }
}

/// Builds the build-status URL for a commit revision.
///
/// Exactly one trailing `/` is stripped from `base` before the fixed
/// path is appended. The revision is inserted verbatim, without any
/// percent-encoding; callers pass commit hashes, which are URL-safe.
///
/// # Errors
///
/// Returns [`InvalidBaseUrl`] if `base` does not start with
/// `http://` or `https://`.
///
/// # Example
///
/// ```
/// use stash_notify::status::build_status_url;
///
/// let url = build_status_url("https://stash.example.com/", "abc123").unwrap();
/// assert_eq!(url, "https://stash.example.com/rest/build-status/1.0/commits/abc123");
/// ```
pub fn build_status_url(base: &str, revision: &str) -> Result<String, InvalidBaseUrl> {
    validate_base_url(base)?;

    let base = base.strip_suffix('/').unwrap_or(base);
    Ok(format!("{base}{BUILD_STATUS_PATH}{revision}"))
}
