//! Settings stores consulted by the folder registry.
//!
//! Settings are string values addressed by `(section, key)`. The registry
//! only needs [`SettingsStore::check_set_str`]: read a value, or write the
//! supplied default when the key is absent.
//!
//! # Modules
//!
//! - [`memory`] — in-process store, nothing persisted.
//! - [`file`] — JSON settings file, written through on every change.

pub mod file;
pub mod memory;

pub use file::SettingsFile;
pub use memory::MemorySettings;

use crate::error::Result;

/// Outcome of [`SettingsStore::check_set_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSet {
    /// The value now held by the store.
    pub value: String,
    /// `true` when the key was absent and the default was written.
    pub is_new: bool,
}

/// String key/value settings organised by section.
pub trait SettingsStore {
    /// Read `key` under `section`.
    fn get_str(&self, section: &str, key: &str) -> Result<Option<String>>;

    /// Write `value` for `key` under `section`, replacing any previous value.
    fn set_str(&mut self, section: &str, key: &str, value: &str) -> Result<()>;

    /// Return the stored value for `key`, or store `default` and return it.
    ///
    /// A stored empty string counts as absent.
    fn check_set_str(&mut self, section: &str, key: &str, default: &str) -> Result<CheckSet> {
        match self.get_str(section, key)? {
            Some(value) if !value.is_empty() => Ok(CheckSet {
                value,
                is_new: false,
            }),
            _ => {
                self.set_str(section, key, default)?;
                Ok(CheckSet {
                    value: default.to_string(),
                    is_new: true,
                })
            }
        }
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &mut S {
    fn get_str(&self, section: &str, key: &str) -> Result<Option<String>> {
        (**self).get_str(section, key)
    }

    fn set_str(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        (**self).set_str(section, key, value)
    }

    fn check_set_str(&mut self, section: &str, key: &str, default: &str) -> Result<CheckSet> {
        (**self).check_set_str(section, key, default)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn get_str(&self, section: &str, key: &str) -> Result<Option<String>> {
        (**self).get_str(section, key)
    }

    fn set_str(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        (**self).set_str(section, key, value)
    }

    fn check_set_str(&mut self, section: &str, key: &str, default: &str) -> Result<CheckSet> {
        (**self).check_set_str(section, key, default)
    }
}
