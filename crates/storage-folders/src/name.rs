//! Resolved folder names.

use serde::{Deserialize, Serialize};

use crate::error::{FolderError, Result};

/// A resolved, non-empty folder name.
///
/// An unresolved category is represented by the absence of a `FolderName`,
/// never by an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FolderName(String);

impl FolderName {
    /// Wrap a folder name, rejecting empty strings.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FolderError::InvalidFolderName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FolderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FolderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FolderName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FolderName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for FolderName {
    type Error = FolderError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FolderName> for String {
    fn from(name: FolderName) -> Self {
        name.0
    }
}
