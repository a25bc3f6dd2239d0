//! Static extra headers configured by the operator.

use std::collections::BTreeMap;

use http::{HeaderMap, HeaderName, HeaderValue};

use super::HeaderError;

/// Extra headers merged into every outgoing notification.
///
/// Parsed once from a single string of comma-separated `Key:Value`
/// pairs, then read-only. Names compare case-insensitively, as HTTP
/// header names do.
///
/// # Example
///
/// ```
/// use stash_notify::client::ExtraHeaders;
///
/// let headers = ExtraHeaders::parse("X-Token: abc, X-Team:ci, garbage");
/// assert_eq!(headers.get("X-Token"), Some("abc"));
/// assert_eq!(headers.get("X-Team"), Some("ci"));
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraHeaders {
    /// Lower-cased name -> (name as last written, value)
    entries: BTreeMap<String, (String, String)>,
}

impl ExtraHeaders {
    /// Parses a `Key:Value,Key:Value` string.
    ///
    /// - Pairs are separated by `,`.
    /// - Each pair is split on its first `:`, so values may contain colons.
    /// - Pairs without a `:` are dropped.
    /// - Keys and values are trimmed.
    /// - A repeated key keeps its last value, whatever its letter case.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .filter_map(|pair| pair.split_once(':'))
            .map(|(key, value)| {
                let key = key.trim();
                (
                    key.to_ascii_lowercase(),
                    (key.to_string(), value.trim().to_string()),
                )
            })
            .collect();

        Self { entries }
    }

    /// Returns the value configured for `key`, ignoring letter case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the headers ordered by lower-cased name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the headers into an [`HeaderMap`].
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError`] for the first key that is not a valid
    /// header name, or value that is not a valid header value.
    pub fn to_header_map(&self) -> Result<HeaderMap, HeaderError> {
        let mut map = HeaderMap::with_capacity(self.entries.len());

        for (name, value) in self.iter() {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| HeaderError::InvalidName {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| HeaderError::InvalidValue {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
            map.insert(header_name, header_value);
        }

        Ok(map)
    }
}
