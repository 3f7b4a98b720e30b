//! Per-identity encrypted store
//!
//! Each identity owns `<key>_expenses.json`, shaped `{"data": "<token>"}`,
//! where the token decrypts to the JSON array of records. Decryption
//! failures are returned to the caller untouched. Only `save` may create a
//! key file.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::paths::ExpensePaths;
use crate::crypto::KeyStore;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Identity};

use super::file_io::{read_json, remove_if_exists, write_json_atomic};
use super::RecordStore;

/// On-disk envelope around the encrypted token
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EncryptedBlob {
    data: String,
}

pub struct EncryptedStore {
    paths: ExpensePaths,
    keys: KeyStore,
}

impl EncryptedStore {
    pub fn new(paths: ExpensePaths, keys: KeyStore) -> Self {
        Self { paths, keys }
    }
}

impl RecordStore for EncryptedStore {
    fn load(&self, identity: &Identity) -> ExpenseResult<Vec<ExpenseRecord>> {
        let path = self.paths.encrypted_file(identity);
        let blob: EncryptedBlob = match read_json(&path)? {
            Some(blob) => blob,
            None => return Ok(Vec::new()),
        };

        let cipher = self.keys.existing_cipher(identity)?.ok_or_else(|| {
            warn!(identity = %identity, "encrypted store has no key file");
            ExpenseError::Encryption(format!(
                "No key file for '{}'; the stored expenses cannot be decrypted",
                identity
            ))
        })?;
        let records = cipher.decrypt_records(&blob.data).map_err(|e| {
            warn!(identity = %identity, error = %e, "failed to decrypt store");
            e
        })?;

        debug!(identity = %identity, count = records.len(), "loaded encrypted store");
        Ok(records)
    }

    fn save(&self, identity: &Identity, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        let cipher = self.keys.get_cipher(identity)?;
        let blob = EncryptedBlob {
            data: cipher.encrypt_records(records)?,
        };

        write_json_atomic(self.paths.encrypted_file(identity), &blob)?;
        debug!(identity = %identity, count = records.len(), "saved encrypted store");
        Ok(())
    }

    fn clear(&self, identity: &Identity) -> ExpenseResult<bool> {
        let blob_removed = remove_if_exists(self.paths.encrypted_file(identity))?;
        let key_removed = self.keys.delete_key(identity)?;
        Ok(blob_removed || key_removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FreeTextResolver, IdentityResolver, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ExpensePaths, EncryptedStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = EncryptedStore::new(paths.clone(), KeyStore::new(paths.clone()));
        (temp_dir, paths, store)
    }

    fn identity(name: &str) -> Identity {
        FreeTextResolver.resolve(name).unwrap()
    }

    fn records() -> Vec<ExpenseRecord> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        vec![
            ExpenseRecord::new("Lunch", Money::from_cents(1250), Category::Food, date),
            ExpenseRecord::new("Bus", Money::from_cents(300), Category::Transport, date),
        ]
    }

    #[test]
    fn test_never_saved_identity_is_empty() {
        let (_temp_dir, paths, store) = setup();
        let alice = identity("alice");

        assert!(store.load(&alice).unwrap().is_empty());
        // Loading alone does not create a key
        assert!(!paths.key_file(&alice).exists());
    }

    #[test]
    fn test_save_then_load() {
        let (_temp_dir, _paths, store) = setup();
        let alice = identity("alice");

        store.save(&alice, &records()).unwrap();
        assert_eq!(store.load(&alice).unwrap(), records());
    }

    #[test]
    fn test_file_shape() {
        let (_temp_dir, paths, store) = setup();
        let alice = identity("alice");
        store.save(&alice, &records()).unwrap();

        let raw = std::fs::read_to_string(paths.encrypted_file(&alice)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let token = value["data"].as_str().unwrap();
        assert!(!token.contains("Lunch"));
        assert_eq!(std::fs::read(paths.key_file(&alice)).unwrap().len(), 32);
    }

    #[test]
    fn test_identities_are_isolated() {
        let (_temp_dir, _paths, store) = setup();
        store.save(&identity("alice"), &records()).unwrap();

        assert!(store.load(&identity("bob")).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_key_fails_to_load() {
        let (_temp_dir, paths, store) = setup();
        let alice = identity("alice");
        store.save(&alice, &records()).unwrap();

        std::fs::write(paths.key_file(&alice), [9u8; 32]).unwrap();

        let err = store.load(&alice).unwrap_err();
        assert!(err.is_encryption());
    }

    #[test]
    fn test_missing_key_fails_without_creating_one() {
        let (_temp_dir, paths, store) = setup();
        let alice = identity("alice");
        store.save(&alice, &records()).unwrap();

        std::fs::remove_file(paths.key_file(&alice)).unwrap();

        let err = store.load(&alice).unwrap_err();
        assert!(err.is_encryption());
        assert!(!paths.key_file(&alice).exists());
    }

    #[test]
    fn test_clear_removes_blob_and_key() {
        let (_temp_dir, paths, store) = setup();
        let alice = identity("alice");
        store.save(&alice, &records()).unwrap();

        assert!(store.clear(&alice).unwrap());
        assert!(!paths.encrypted_file(&alice).exists());
        assert!(!paths.key_file(&alice).exists());
        assert!(!store.clear(&alice).unwrap());
        assert!(store.load(&alice).unwrap().is_empty());
    }
}
