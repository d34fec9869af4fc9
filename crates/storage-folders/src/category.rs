//! Folder categories — the fixed set of logical storage folders.
//!
//! Every category carries a settings key (under the `folders` section) and
//! a compiled-in default folder name. The default table can be overridden
//! per registry through [`crate::layout::FolderLayout`].

use std::str::FromStr;

use crate::error::FolderError;

/// Settings section under which every folder key is stored.
pub const FOLDERS_SECTION: &str = "folders";

/// A logical storage folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FolderCategory {
    Account,
    Cert,
    Contract,
    Credential,
    Cron,
    Inbox,
    Market,
    Mint,
    Nym,
    Nymbox,
    Outbox,
    PaymentInbox,
    Pubcred,
    Pubkey,
    Purse,
    Receipt,
    RecordBox,
    ExpiredBox,
    Script,
    SmartContracts,
    Spent,
    UserAcct,
}

impl FolderCategory {
    /// Number of categories.
    pub const COUNT: usize = 22;

    /// Every category, in table order.
    pub const ALL: [FolderCategory; Self::COUNT] = [
        Self::Account,
        Self::Cert,
        Self::Contract,
        Self::Credential,
        Self::Cron,
        Self::Inbox,
        Self::Market,
        Self::Mint,
        Self::Nym,
        Self::Nymbox,
        Self::Outbox,
        Self::PaymentInbox,
        Self::Pubcred,
        Self::Pubkey,
        Self::Purse,
        Self::Receipt,
        Self::RecordBox,
        Self::ExpiredBox,
        Self::Script,
        Self::SmartContracts,
        Self::Spent,
        Self::UserAcct,
    ];

    /// Position of this category in [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Compiled-in settings key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Cert => "cert",
            Self::Contract => "contract",
            Self::Credential => "credential",
            Self::Cron => "cron",
            Self::Inbox => "inbox",
            Self::Market => "market",
            Self::Mint => "mint",
            Self::Nym => "nym",
            Self::Nymbox => "nymbox",
            Self::Outbox => "outbox",
            Self::PaymentInbox => "paymentinbox",
            Self::Pubcred => "pubcred",
            Self::Pubkey => "pubkey",
            Self::Purse => "purse",
            Self::Receipt => "receipt",
            Self::RecordBox => "recordbox",
            Self::ExpiredBox => "expiredbox",
            Self::Script => "script",
            Self::SmartContracts => "smartcontract",
            Self::Spent => "spent",
            Self::UserAcct => "useracct",
        }
    }

    /// Compiled-in default folder name.
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Account => "accounts",
            Self::Cert => "certs",
            Self::Contract => "contracts",
            Self::Credential => "credentials",
            Self::Cron => "cron",
            Self::Inbox => "inbox",
            Self::Market => "markets",
            Self::Mint => "mints",
            Self::Nym => "nyms",
            Self::Nymbox => "nymbox",
            Self::Outbox => "outbox",
            Self::PaymentInbox => "paymentInbox",
            Self::Pubcred => "pubcred",
            Self::Pubkey => "pubkeys",
            Self::Purse => "purse",
            Self::Receipt => "receipts",
            Self::RecordBox => "recordBox",
            Self::ExpiredBox => "expiredBox",
            Self::Script => "scripts",
            Self::SmartContracts => "smartcontracts",
            Self::Spent => "spent",
            Self::UserAcct => "useraccounts",
        }
    }

    /// Variant name, e.g. `PaymentInbox`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Cert => "Cert",
            Self::Contract => "Contract",
            Self::Credential => "Credential",
            Self::Cron => "Cron",
            Self::Inbox => "Inbox",
            Self::Market => "Market",
            Self::Mint => "Mint",
            Self::Nym => "Nym",
            Self::Nymbox => "Nymbox",
            Self::Outbox => "Outbox",
            Self::PaymentInbox => "PaymentInbox",
            Self::Pubcred => "Pubcred",
            Self::Pubkey => "Pubkey",
            Self::Purse => "Purse",
            Self::Receipt => "Receipt",
            Self::RecordBox => "RecordBox",
            Self::ExpiredBox => "ExpiredBox",
            Self::Script => "Script",
            Self::SmartContracts => "SmartContracts",
            Self::Spent => "Spent",
            Self::UserAcct => "UserAcct",
        }
    }
}

impl std::fmt::Display for FolderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FolderCategory {
    type Err = FolderError;

    /// Accepts either the settings key or the variant name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(wanted) || c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FolderError::UnknownCategory(s.to_string()))
    }
}
