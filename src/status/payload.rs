//! JSON body for a build-status notification.
//!
//! The body is rendered by hand into a fixed five-field layout rather
//! than through a JSON serializer. Only backslash and double quote are
//! escaped, and only in `name` and `description`; `key` and `url` come
//! from the build host and are emitted verbatim.

use super::BuildState;

/// Maximum number of characters of `name` the server accepts.
///
/// Longer names are truncated, not rejected.
pub const MAX_NAME_CHARS: usize = 255;

/// The five fields reported for one build.
///
/// # Example
///
/// ```
/// use stash_notify::status::{BuildState, StatusPayload};
///
/// let payload = StatusPayload::new(
///     BuildState::Failed,
///     "REPO-MASTER",
///     "REPO-MASTER-7",
///     "http://ci.example.com/browse/REPO-MASTER-7",
///     "Tests failed",
/// );
/// assert!(payload.to_json_body().contains(r#""state": "FAILED""#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPayload {
    /// Build lifecycle state
    pub state: BuildState,
    /// Build plan key, identifies the status entry on the server
    pub key: String,
    /// Human-readable build name
    pub name: String,
    /// Link back to the build results
    pub url: String,
    /// Free-form description
    pub description: String,
}

impl StatusPayload {
    /// Creates a payload from its five fields.
    #[must_use]
    pub fn new(
        state: BuildState,
        key: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            state,
            key: key.into(),
            name: name.into(),
            url: url.into(),
            description: description.into(),
        }
    }

    /// Renders the request body.
    ///
    /// `name` is cut to [`MAX_NAME_CHARS`] characters before escaping.
    /// The layout is byte-for-byte stable: an opening brace, five
    /// four-space-indented `"field": "value"` lines, and a closing brace
    /// with no trailing newline.
    #[must_use]
    pub fn to_json_body(&self) -> String {
        let state = self.state;
        let key = &self.key;
        let name = escape(truncate_chars(&self.name, MAX_NAME_CHARS));
        let url = &self.url;
        let description = escape(&self.description);

        format!(
            "{{\n    \"state\": \"{state}\",\n    \"key\": \"{key}\",\n    \"name\": \"{name}\",\n    \"url\": \"{url}\",\n    \"description\": \"{description}\"\n}}"
        )
    }
}

/// Returns the text before the first line break.
///
/// Build display names can span several lines; only the first one is
/// reported. Recognizes `\n`, `\r`, NEL, and the Unicode line and
/// paragraph separators.
#[must_use]
pub fn first_line(text: &str) -> &str {
    text.find(is_line_break).map_or(text, |end| &text[..end])
}

const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn truncate_chars(text: &str, max: usize) -> &str {
    text.char_indices()
        .nth(max)
        .map_or(text, |(end, _)| &text[..end])
}

// Backslash first, so the quote escapes are not doubled.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
