//! JSON settings file.
//!
//! File format:
//! ```json
//! {
//!     "version": 1,
//!     "saved_at": "2026-10-19T12:00:00+00:00",
//!     "sections": {
//!         "folders": { "account": "accounts", "nym": "nyms" }
//!     }
//! }
//! ```
//!
//! Every change is written to disk before the call returns, so a default
//! chosen in one run is seen as already present by the next.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{MemorySettings, SettingsStore};
use crate::error::{FolderError, Result};

// ── File format constants ─────────────────────────────────────────────────────

const SETTINGS_FILE_VERSION: u32 = 1;

// ── On-disk structure ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
struct SettingsFileFormat {
    /// Format version number.
    version: u32,
    /// Time of the last save. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<String>,
    #[serde(default)]
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

// ── SettingsFile ──────────────────────────────────────────────────────────────

/// Settings backed by a JSON file on disk.
///
/// The store is safe for single-process use; concurrent writers in
/// different processes are not coordinated.
#[derive(Debug)]
pub struct SettingsFile {
    path: PathBuf,
    values: MemorySettings,
}

impl SettingsFile {
    /// Open the settings file at `path`.
    ///
    /// A missing file yields empty settings; nothing is written until the
    /// first change.
    ///
    /// # Errors
    ///
    /// Returns `FolderError::InvalidFileFormat` for malformed or
    /// unsupported files, or `FolderError::Io` for filesystem errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = read_values(&path)?;
        log::debug!("opened settings file {}", path.display());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discard in-memory values and read the file again.
    pub fn reload(&mut self) -> Result<()> {
        self.values = read_values(&self.path)?;
        Ok(())
    }

    /// Write all values to disk, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `FolderError::SerializationError` if serialization fails, or
    /// `FolderError::Io` for filesystem errors.
    pub fn save(&self) -> Result<()> {
        write_values(&self.path, &self.values)
    }

    /// In-memory view of the current values.
    pub fn values(&self) -> &MemorySettings {
        &self.values
    }
}

impl SettingsStore for SettingsFile {
    fn get_str(&self, section: &str, key: &str) -> Result<Option<String>> {
        self.values.get_str(section, key)
    }

    fn set_str(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        // In-memory values only change once the new snapshot is on disk.
        let mut next = self.values.clone();
        next.set_str(section, key, value)?;
        write_values(&self.path, &next)?;
        self.values = next;
        Ok(())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Serialize `values` and write them to `path` atomically.
fn write_values(path: &Path, values: &MemorySettings) -> Result<()> {
    let file = SettingsFileFormat {
        version: SETTINGS_FILE_VERSION,
        saved_at: Some(crate::time::now_rfc3339()),
        sections: values.sections().clone(),
    };

    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| FolderError::SerializationError(e.to_string()))?;

    write_atomic(path, json.as_bytes())
}

/// Write `data` to `path` through a sibling temp file and `std::fs::rename`,
/// so a crash mid-write never leaves a truncated settings file behind.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, data)?;
    std::fs::rename(&tmp_path, path)?;

    Ok(())
}

fn read_values(path: &Path) -> Result<MemorySettings> {
    if !path.exists() {
        return Ok(MemorySettings::new());
    }

    let bytes = std::fs::read(path)?;
    let file: SettingsFileFormat = serde_json::from_slice(&bytes).map_err(|e| {
        FolderError::InvalidFileFormat(format!(
            "failed to parse settings file {}: {e}",
            path.display()
        ))
    })?;

    if file.version != SETTINGS_FILE_VERSION {
        return Err(FolderError::InvalidFileFormat(format!(
            "unsupported settings file version {} in {}",
            file.version,
            path.display()
        )));
    }

    Ok(MemorySettings::from_sections(file.sections))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
