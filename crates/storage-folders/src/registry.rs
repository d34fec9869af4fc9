//! Folder name registry.
//!
//! Holds one resolved name per [`FolderCategory`]. Names are filled in by an
//! explicit bulk pass, [`FolderRegistry::resolve_all`], after which every
//! accessor is a plain table lookup.
//!
//! # Resolution
//!
//! For each category that has no name yet, the pass asks the settings store
//! for `folders.<key>`, passing the layout's default name. A value already in
//! the store wins; otherwise the default is written to the store and adopted.
//! Names that are already resolved are never looked up or replaced again.
//!
//! # Failure policy
//!
//! The pass is all-or-nothing. Every pending layout entry is validated
//! before the store is touched, and new names are staged and only committed
//! once every category has resolved. After a failed pass the registry holds
//! exactly what it held before. Defaults written to the store before a store
//! failure stay in the store.

use crate::category::{FolderCategory, FOLDERS_SECTION};
use crate::error::{FolderError, Result};
use crate::layout::FolderLayout;
use crate::name::FolderName;
use crate::settings::SettingsStore;

/// Resolve-once table of folder names.
#[derive(Debug, Clone)]
pub struct FolderRegistry {
    layout: FolderLayout,
    names: [Option<FolderName>; FolderCategory::COUNT],
}

impl Default for FolderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! folder_accessors {
    ($($(#[$doc:meta])* $method:ident => $category:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $method(&self) -> Result<&FolderName> {
                self.get(FolderCategory::$category)
            }
        )*
    };
}

impl FolderRegistry {
    /// Create an unresolved registry using the compiled-in layout.
    pub fn new() -> Self {
        Self::with_layout(FolderLayout::default())
    }

    /// Create an unresolved registry using a custom layout.
    pub fn with_layout(layout: FolderLayout) -> Self {
        Self {
            layout,
            names: std::array::from_fn(|_| None),
        }
    }

    pub fn layout(&self) -> &FolderLayout {
        &self.layout
    }

    /// Resolve every category that has no name yet.
    ///
    /// Categories that are already resolved are skipped without consulting
    /// the store, so calling this on a fully resolved registry is free.
    ///
    /// # Errors
    ///
    /// Returns `FolderError::Unresolvable` for the first category whose key
    /// or default is invalid, or whose store lookup fails. No names are
    /// committed when an error is returned.
    pub fn resolve_all<S>(&mut self, store: &mut S) -> Result<()>
    where
        S: SettingsStore + ?Sized,
    {
        let pending: Vec<FolderCategory> = FolderCategory::ALL
            .iter()
            .copied()
            .filter(|&category| !self.is_category_resolved(category))
            .collect();

        if pending.is_empty() {
            return Ok(());
        }

        let staged = self.stage(&pending, store).inspect_err(|e| {
            log::warn!("folder name resolution failed: {e}");
        })?;

        for (category, name) in staged {
            self.names[category.index()] = Some(name);
        }

        log::debug!("resolved {} folder names", pending.len());
        Ok(())
    }

    /// Resolve all categories and return the registry for chained lookups.
    pub fn ensure_resolved<S>(&mut self, store: &mut S) -> Result<&Self>
    where
        S: SettingsStore + ?Sized,
    {
        self.resolve_all(store)?;
        Ok(self)
    }

    /// Look up the resolved name for `category`.
    ///
    /// # Errors
    ///
    /// Returns `FolderError::NotResolved` if no successful pass has covered
    /// `category` yet.
    pub fn get(&self, category: FolderCategory) -> Result<&FolderName> {
        self.names[category.index()]
            .as_ref()
            .ok_or(FolderError::NotResolved(category))
    }

    pub fn is_category_resolved(&self, category: FolderCategory) -> bool {
        self.names[category.index()].is_some()
    }

    /// `true` once every category has a name.
    pub fn is_resolved(&self) -> bool {
        self.names.iter().all(Option::is_some)
    }

    /// Every resolved `(category, name)` pair, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (FolderCategory, &FolderName)> {
        FolderCategory::ALL
            .iter()
            .zip(self.names.iter())
            .filter_map(|(&category, name)| name.as_ref().map(|name| (category, name)))
    }

    folder_accessors! {
        /// Folder for asset accounts.
        account => Account,
        cert => Cert,
        contract => Contract,
        credential => Credential,
        cron => Cron,
        inbox => Inbox,
        market => Market,
        mint => Mint,
        /// Folder for pseudonymous identities.
        nym => Nym,
        nymbox => Nymbox,
        outbox => Outbox,
        payment_inbox => PaymentInbox,
        pubcred => Pubcred,
        pubkey => Pubkey,
        purse => Purse,
        receipt => Receipt,
        record_box => RecordBox,
        expired_box => ExpiredBox,
        script => Script,
        smart_contracts => SmartContracts,
        spent => Spent,
        user_acct => UserAcct,
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Resolve `pending` against the store without touching `self.names`.
    fn stage<S>(
        &self,
        pending: &[FolderCategory],
        store: &mut S,
    ) -> Result<Vec<(FolderCategory, FolderName)>>
    where
        S: SettingsStore + ?Sized,
    {
        for &category in pending {
            self.layout.spec(category).validate(category)?;
        }

        let mut staged = Vec::with_capacity(pending.len());
        for &category in pending {
            let spec = self.layout.spec(category);
            let checked = store
                .check_set_str(FOLDERS_SECTION, &spec.key, &spec.default_name)
                .map_err(|e| FolderError::Unresolvable {
                    category,
                    reason: format!("settings store failed: {e}"),
                })?;

            let value = if checked.is_new {
                log::info!(
                    "persisted default folder name {:?} for {}",
                    spec.default_name,
                    category
                );
                spec.default_name.clone()
            } else {
                log::debug!("using stored folder name {:?} for {}", checked.value, category);
                checked.value
            };

            let name = FolderName::new(value).map_err(|e| FolderError::Unresolvable {
                category,
                reason: e.to_string(),
            })?;
            staged.push((category, name));
        }

        Ok(staged)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
