//! In-memory settings store.

use std::collections::BTreeMap;

use super::SettingsStore;
use crate::error::Result;

/// Settings held in memory only. Useful for tests and for embedders that
/// persist settings some other way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySettings {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_value(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// All keys stored under `section`.
    pub fn section(&self, section: &str) -> Option<&BTreeMap<String, String>> {
        self.sections.get(section)
    }

    /// Total number of stored values across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn from_sections(sections: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { sections }
    }

    pub(crate) fn sections(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.sections
    }
}

impl SettingsStore for MemorySettings {
    fn get_str(&self, section: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .sections
            .get(section)
            .and_then(|values| values.get(key))
            .cloned())
    }

    fn set_str(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
