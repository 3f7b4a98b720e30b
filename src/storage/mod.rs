//! Storage layer for the expense tracker
//!
//! Every store holds one flat, ordered list of expense records per identity.
//! A save always replaces the whole backing file (atomically); there is no
//! locking, so of two concurrent writers the later one wins.

pub mod csv_store;
pub mod encrypted_store;
pub mod file_io;
pub mod memory;

pub use csv_store::CsvStore;
pub use encrypted_store::EncryptedStore;
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryStore;

use std::fmt;

use tracing::debug;

use crate::config::paths::ExpensePaths;
use crate::crypto::KeyStore;
use crate::error::ExpenseResult;
use crate::models::{ExpenseRecord, Identity};

/// Persistence for an identity's expense records
pub trait RecordStore: Send + Sync {
    /// All records in insertion order; empty if nothing was ever saved
    fn load(&self, identity: &Identity) -> ExpenseResult<Vec<ExpenseRecord>>;

    /// Replace the stored records with `records`
    fn save(&self, identity: &Identity, records: &[ExpenseRecord]) -> ExpenseResult<()>;

    /// Remove everything stored for the identity; returns whether anything
    /// was removed
    fn clear(&self, identity: &Identity) -> ExpenseResult<bool>;
}

/// Which backing the active store uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Single shared CSV file
    Plaintext,
    /// Per-identity encrypted JSON blob
    Encrypted,
    /// Process memory only
    Memory,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Plaintext => write!(f, "plaintext CSV"),
            StoreKind::Encrypted => write!(f, "encrypted"),
            StoreKind::Memory => write!(f, "in-memory"),
        }
    }
}

/// Main storage coordinator: the active identity bound to its store
pub struct Storage {
    paths: ExpensePaths,
    identity: Identity,
    kind: StoreKind,
    store: Box<dyn RecordStore>,
}

impl Storage {
    /// Open the store for an identity
    ///
    /// With no identity the shared plaintext CSV store is used; with one,
    /// that identity's encrypted store.
    pub fn open(paths: ExpensePaths, identity: Option<Identity>) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let storage = match identity {
            Some(identity) => {
                let store = EncryptedStore::new(paths.clone(), KeyStore::new(paths.clone()));
                Self {
                    paths,
                    identity,
                    kind: StoreKind::Encrypted,
                    store: Box::new(store),
                }
            }
            None => Self {
                store: Box::new(CsvStore::new(paths.expenses_csv())),
                paths,
                identity: Identity::local(),
                kind: StoreKind::Plaintext,
            },
        };

        debug!(identity = %storage.identity, kind = %storage.kind, "opened store");
        Ok(storage)
    }

    /// Wrap an arbitrary store (used by tests with [`MemoryStore`])
    pub fn with_store(
        paths: ExpensePaths,
        identity: Identity,
        kind: StoreKind,
        store: Box<dyn RecordStore>,
    ) -> Self {
        Self {
            paths,
            identity,
            kind,
            store,
        }
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn load(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        self.store.load(&self.identity)
    }

    pub fn save(&self, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        self.store.save(&self.identity, records)
    }

    pub fn clear(&self) -> ExpenseResult<bool> {
        self.store.clear(&self.identity)
    }

    /// Human-readable location of the backing data
    pub fn location(&self) -> String {
        match self.kind {
            StoreKind::Plaintext => self.paths.expenses_csv().display().to_string(),
            StoreKind::Encrypted => self
                .paths
                .encrypted_file(&self.identity)
                .display()
                .to_string(),
            StoreKind::Memory => "(memory)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FreeTextResolver, IdentityResolver, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(name: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            name,
            Money::from_cents(cents),
            Category::Other,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_open_without_identity_uses_csv() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths.clone(), None).unwrap();

        assert_eq!(storage.kind(), StoreKind::Plaintext);
        storage.save(&[record("Tea", 100)]).unwrap();
        assert!(paths.expenses_csv().exists());
    }

    #[test]
    fn test_open_with_identity_uses_encrypted_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let alice = FreeTextResolver.resolve("alice").unwrap();
        let storage = Storage::open(paths.clone(), Some(alice.clone())).unwrap();

        assert_eq!(storage.kind(), StoreKind::Encrypted);
        storage.save(&[record("Tea", 100)]).unwrap();
        assert!(paths.encrypted_file(&alice).exists());
        assert!(paths.key_file(&alice).exists());
        assert!(!paths.expenses_csv().exists());
        assert_eq!(storage.load().unwrap(), vec![record("Tea", 100)]);
    }
}
