//! storage-folders — resolve-once registry of storage folder names.
//!
//! Maps each logical storage folder (accounts, certificates, nyms, ...) to
//! a concrete folder name. Names come from a settings store when present;
//! otherwise a compiled-in default is adopted and written back to the store
//! so later runs reuse it.
//!
//! ```
//! use storage_folders::{FolderRegistry, MemorySettings};
//!
//! let mut settings = MemorySettings::new();
//! let mut folders = FolderRegistry::new();
//! folders.resolve_all(&mut settings)?;
//! assert_eq!(folders.account()?.as_str(), "accounts");
//! # Ok::<(), storage_folders::FolderError>(())
//! ```

pub mod category;
pub mod error;
pub mod layout;
pub mod name;
pub mod registry;
pub mod settings;
pub mod shared;
pub mod time;

// Re-export primary types
pub use category::{FolderCategory, FOLDERS_SECTION};
pub use error::{FolderError, Result};
pub use layout::{FolderLayout, FolderSpec, MIN_IDENTIFIER_LEN};
pub use name::FolderName;
pub use registry::FolderRegistry;
pub use settings::{CheckSet, MemorySettings, SettingsFile, SettingsStore};
pub use shared::SharedFolders;
