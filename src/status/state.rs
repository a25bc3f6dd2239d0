//! Build lifecycle states reported to the server.

use std::fmt;

/// Lifecycle status of the build being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    /// The build has started and not finished yet.
    InProgress,
    /// The build finished successfully.
    Successful,
    /// The build finished with a failure.
    Failed,
}

impl BuildState {
    /// Returns the wire form of the state.
    ///
    /// This is the upper-case state name with underscores removed,
    /// so `IN_PROGRESS` becomes `INPROGRESS`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "INPROGRESS",
            Self::Successful => "SUCCESSFUL",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
