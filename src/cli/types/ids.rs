//! ID types for the Fantasy Baseball Roster Tracker.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for MLB player IDs.
///
/// MLB IDs arrive as opaque strings from the snapshot producer; wrapping them
/// keeps them from being confused with player display names.
///
/// # Examples
///
/// ```rust
/// use fbb_roster::MlbId;
///
/// let id = MlbId::new("665742");
/// assert_eq!(id.as_str(), "665742");
/// assert_eq!(id.to_string(), "665742");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MlbId(pub String);

impl MlbId {
    /// Create a new MlbId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MlbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MlbId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
