//! Thread-safe, lazily resolving handle around a registry and its store.
//!
//! The first lookup of any unresolved category runs the bulk pass under a
//! single lock, so concurrent first-touch callers never write the same key
//! twice.

use std::sync::{Mutex, MutexGuard};

use crate::category::FolderCategory;
use crate::error::Result;
use crate::name::FolderName;
use crate::registry::FolderRegistry;
use crate::settings::SettingsStore;

struct Inner<S> {
    registry: FolderRegistry,
    store: S,
}

/// A [`FolderRegistry`] and its settings store behind one mutex.
pub struct SharedFolders<S> {
    inner: Mutex<Inner<S>>,
}

impl<S: SettingsStore> SharedFolders<S> {
    /// Wrap `store` with an unresolved registry using the compiled-in layout.
    pub fn new(store: S) -> Self {
        Self::with_registry(FolderRegistry::new(), store)
    }

    pub fn with_registry(registry: FolderRegistry, store: S) -> Self {
        Self {
            inner: Mutex::new(Inner { registry, store }),
        }
    }

    /// Name for `category`, running the bulk pass first if it is unresolved.
    ///
    /// # Errors
    ///
    /// Returns `FolderError::Unresolvable` if the bulk pass fails. A failed
    /// pass is retried on the next call.
    pub fn get(&self, category: FolderCategory) -> Result<FolderName> {
        let mut inner = self.lock();
        if !inner.registry.is_category_resolved(category) {
            let Inner { registry, store } = &mut *inner;
            registry.resolve_all(store)?;
        }
        inner.registry.get(category).cloned()
    }

    /// Run the bulk pass now instead of on first lookup.
    pub fn resolve_all(&self) -> Result<()> {
        let mut inner = self.lock();
        let Inner { registry, store } = &mut *inner;
        registry.resolve_all(store)
    }

    pub fn is_resolved(&self) -> bool {
        self.lock().registry.is_resolved()
    }

    /// Run `f` with the store borrowed, e.g. to inspect persisted values.
    pub fn with_store<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock().store)
    }

    /// Consume the handle, returning the registry and the store.
    pub fn into_parts(self) -> (FolderRegistry, S) {
        let inner = self
            .inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (inner.registry, inner.store)
    }

    // The guarded state is only replaced wholesale by `resolve_all`, so a
    // poisoned lock still holds a consistent registry.
    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
