//! Type-safe file identifier.
//!
//! [`FileId`] is a newtype wrapper around the wire-level file name
//! providing type safety so that routing discriminants cannot be
//! confused with arbitrary strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a viewed file.
///
/// Wraps the name the update endpoint uses to address views. Fixed at
/// view construction time and immutable thereafter. Used as the
/// subscription target and as the routing discriminant for inbound
/// updates. Equality is exact, case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Creates a `FileId` from any string-like name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the file name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FileId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for FileId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
