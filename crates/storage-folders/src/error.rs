//! Error types for storage-folders.
//!
//! Resolution failures are returned as values; deciding whether a missing
//! folder name halts the process is left to the outermost caller.

use crate::category::FolderCategory;

/// Folder registry and settings store error types.
#[derive(Debug, thiserror::Error)]
pub enum FolderError {
    #[error("Unresolvable folder category {category}: {reason}")]
    Unresolvable {
        category: FolderCategory,
        reason: String,
    },

    #[error("Folder category not resolved yet: {0}")]
    NotResolved(FolderCategory),

    #[error("Invalid folder name: {0:?}")]
    InvalidFolderName(String),

    #[error("Unknown folder category: {0}")]
    UnknownCategory(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolderError {
    /// The category this error is about, if any.
    pub fn category(&self) -> Option<FolderCategory> {
        match self {
            Self::Unresolvable { category, .. } => Some(*category),
            Self::NotResolved(category) => Some(*category),
            _ => None,
        }
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, FolderError>;
