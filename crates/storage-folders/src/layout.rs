//! Folder layout — the settings key and default name for every category.

use crate::category::FolderCategory;
use crate::error::{FolderError, Result};

/// Shortest accepted settings key or default folder name.
pub const MIN_IDENTIFIER_LEN: usize = 3;

/// Settings key and default folder name for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSpec {
    /// Key under the `folders` settings section.
    pub key: String,
    /// Name written to the settings store when the key is absent.
    pub default_name: String,
}

impl FolderSpec {
    pub fn new(key: impl Into<String>, default_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_name: default_name.into(),
        }
    }

    /// Check that key and default are both at least [`MIN_IDENTIFIER_LEN`]
    /// bytes long.
    pub fn validate(&self, category: FolderCategory) -> Result<()> {
        if self.key.len() < MIN_IDENTIFIER_LEN {
            return Err(FolderError::Unresolvable {
                category,
                reason: format!(
                    "settings key {:?} is shorter than {MIN_IDENTIFIER_LEN} characters",
                    self.key
                ),
            });
        }
        if self.default_name.len() < MIN_IDENTIFIER_LEN {
            return Err(FolderError::Unresolvable {
                category,
                reason: format!(
                    "default name {:?} is shorter than {MIN_IDENTIFIER_LEN} characters",
                    self.default_name
                ),
            });
        }
        Ok(())
    }
}

/// Keys and defaults for all categories, indexed by [`FolderCategory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderLayout {
    specs: [FolderSpec; FolderCategory::COUNT],
}

impl Default for FolderLayout {
    fn default() -> Self {
        Self {
            specs: std::array::from_fn(|i| {
                let category = FolderCategory::ALL[i];
                FolderSpec::new(category.key(), category.default_name())
            }),
        }
    }
}

impl FolderLayout {
    pub fn spec(&self, category: FolderCategory) -> &FolderSpec {
        &self.specs[category.index()]
    }

    /// Replace the key and default for `category`.
    pub fn set(
        &mut self,
        category: FolderCategory,
        key: impl Into<String>,
        default_name: impl Into<String>,
    ) -> &mut Self {
        self.specs[category.index()] = FolderSpec::new(key, default_name);
        self
    }

    /// Builder form of [`Self::set`].
    pub fn with(
        mut self,
        category: FolderCategory,
        key: impl Into<String>,
        default_name: impl Into<String>,
    ) -> Self {
        self.set(category, key, default_name);
        self
    }

    /// Validate every entry, reporting the first category that fails.
    pub fn validate(&self) -> Result<()> {
        for category in FolderCategory::ALL {
            self.spec(category).validate(category)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FolderCategory, &FolderSpec)> {
        FolderCategory::ALL
            .iter()
            .map(move |&category| (category, self.spec(category)))
    }
}
