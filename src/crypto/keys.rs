//! Per-identity key files
//!
//! Each identity gets one randomly generated AES-256 key, stored as 32 raw
//! bytes in plaintext next to its encrypted blob. There is no passphrase,
//! rotation or expiry: whoever can read the key file can read the data.

use tracing::{debug, info};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Identity;
use crate::storage::file_io::{read_bytes, remove_if_exists, write_bytes_atomic};

use super::encryption::{Cipher, SymmetricKey};

/// Loads or creates the key for an identity and hands out bound ciphers
#[derive(Debug, Clone)]
pub struct KeyStore {
    paths: ExpensePaths,
}

impl KeyStore {
    pub fn new(paths: ExpensePaths) -> Self {
        Self { paths }
    }

    /// Cipher bound to the identity's key, generating the key on first use
    pub fn get_cipher(&self, identity: &Identity) -> ExpenseResult<Cipher> {
        let key = self.load_or_create_key(identity)?;
        Cipher::new(&key)
    }

    /// Cipher bound to the identity's existing key; never writes
    pub fn existing_cipher(&self, identity: &Identity) -> ExpenseResult<Option<Cipher>> {
        match self.load_key(identity)? {
            Some(key) => Cipher::new(&key).map(Some),
            None => Ok(None),
        }
    }

    /// Load the identity's key if its file exists
    pub fn load_key(&self, identity: &Identity) -> ExpenseResult<Option<SymmetricKey>> {
        let path = self.paths.key_file(identity);
        let raw = match read_bytes(&path)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        debug!(identity = %identity, path = %path.display(), "loaded key file");
        SymmetricKey::from_bytes(&raw).map(Some).map_err(|e| {
            ExpenseError::Encryption(format!("Key file {} is unusable: {}", path.display(), e))
        })
    }

    /// Load the identity's key, generating and persisting one if absent
    pub fn load_or_create_key(&self, identity: &Identity) -> ExpenseResult<SymmetricKey> {
        if let Some(key) = self.load_key(identity)? {
            return Ok(key);
        }

        let path = self.paths.key_file(identity);
        let key = SymmetricKey::generate();
        write_bytes_atomic(&path, key.as_bytes())?;
        info!(identity = %identity, path = %path.display(), "generated new key file");
        Ok(key)
    }

    /// Whether a key file exists for the identity
    pub fn has_key(&self, identity: &Identity) -> bool {
        self.paths.key_file(identity).exists()
    }

    /// Delete the identity's key file; returns whether one was removed
    pub fn delete_key(&self, identity: &Identity) -> ExpenseResult<bool> {
        remove_if_exists(self.paths.key_file(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::encryption::KEY_SIZE;
    use crate::models::{FreeTextResolver, IdentityResolver};
    use tempfile::TempDir;

    fn setup() -> (TempDir, KeyStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, KeyStore::new(paths))
    }

    fn identity(name: &str) -> Identity {
        FreeTextResolver.resolve(name).unwrap()
    }

    #[test]
    fn test_key_created_on_first_use() {
        let (temp_dir, keys) = setup();
        let alice = identity("alice");

        assert!(!keys.has_key(&alice));
        keys.get_cipher(&alice).unwrap();
        assert!(keys.has_key(&alice));

        let path = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()).key_file(&alice);
        assert_eq!(std::fs::read(path).unwrap().len(), KEY_SIZE);
    }

    #[test]
    fn test_key_reused_across_calls() {
        let (_temp_dir, keys) = setup();
        let alice = identity("alice");

        let token = keys.get_cipher(&alice).unwrap().encrypt(b"secret").unwrap();
        let plain = keys.get_cipher(&alice).unwrap().decrypt(&token).unwrap();
        assert_eq!(plain, b"secret");
    }

    #[test]
    fn test_identities_have_distinct_keys() {
        let (_temp_dir, keys) = setup();
        let alice = keys.load_or_create_key(&identity("alice")).unwrap();
        let bob = keys.load_or_create_key(&identity("bob")).unwrap();
        assert_ne!(alice.as_bytes(), bob.as_bytes());
    }

    #[test]
    fn test_truncated_key_file_is_an_error() {
        let (temp_dir, keys) = setup();
        let alice = identity("alice");
        let path = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()).key_file(&alice);
        write_bytes_atomic(&path, &[1, 2, 3]).unwrap();

        let err = keys.get_cipher(&alice).err().unwrap();
        assert!(err.is_encryption());
    }

    #[test]
    fn test_existing_cipher_does_not_create_key() {
        let (_temp_dir, keys) = setup();
        let alice = identity("alice");

        assert!(keys.existing_cipher(&alice).unwrap().is_none());
        assert!(!keys.has_key(&alice));

        keys.get_cipher(&alice).unwrap();
        assert!(keys.existing_cipher(&alice).unwrap().is_some());
    }

    #[test]
    fn test_delete_key() {
        let (_temp_dir, keys) = setup();
        let alice = identity("alice");
        keys.get_cipher(&alice).unwrap();

        assert!(keys.delete_key(&alice).unwrap());
        assert!(!keys.delete_key(&alice).unwrap());
    }
}
