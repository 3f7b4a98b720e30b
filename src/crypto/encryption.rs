//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption of the record blob. Each encryption
//! generates a fresh nonce; the output is a single printable token:
//! URL-safe base64 of `version ‖ nonce ‖ ciphertext+tag`.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::URL_SAFE, Engine};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Size of an AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Token format version, first byte of every token
const TOKEN_VERSION: u8 = 1;

/// Raw symmetric key material, zeroed on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: [u8; KEY_SIZE],
}

impl SymmetricKey {
    /// Generate a fresh random key
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Build a key from raw bytes read off disk
    pub fn from_bytes(raw: &[u8]) -> ExpenseResult<Self> {
        if raw.len() != KEY_SIZE {
            return Err(ExpenseError::Encryption(format!(
                "Invalid key length: expected {}, got {}",
                KEY_SIZE,
                raw.len()
            )));
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(raw);
        Ok(Self { bytes })
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SymmetricKey(..)")
    }
}

/// A symmetric encrypt/decrypt capability bound to one key
pub struct Cipher {
    aead: Aes256Gcm,
}

impl Cipher {
    /// Bind a cipher to a key
    pub fn new(key: &SymmetricKey) -> ExpenseResult<Self> {
        let aead = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| ExpenseError::Encryption(format!("Failed to create cipher: {}", e)))?;
        Ok(Self { aead })
    }

    /// Encrypt bytes into a printable token
    pub fn encrypt(&self, plaintext: &[u8]) -> ExpenseResult<String> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .aead
            .encrypt(nonce, plaintext)
            .map_err(|e| ExpenseError::Encryption(format!("Encryption failed: {}", e)))?;

        let mut token = Vec::with_capacity(1 + NONCE_SIZE + ciphertext.len());
        token.push(TOKEN_VERSION);
        token.extend_from_slice(&nonce_bytes);
        token.extend_from_slice(&ciphertext);

        Ok(URL_SAFE.encode(token))
    }

    /// Decrypt a token produced by [`Cipher::encrypt`]
    ///
    /// Fails if the token was produced under a different key or has been
    /// corrupted.
    pub fn decrypt(&self, token: &str) -> ExpenseResult<Vec<u8>> {
        let raw = URL_SAFE
            .decode(token.trim())
            .map_err(|e| ExpenseError::Encryption(format!("Invalid token encoding: {}", e)))?;

        if raw.len() < 1 + NONCE_SIZE {
            return Err(ExpenseError::Encryption("Token is too short".to_string()));
        }

        let (version, rest) = raw.split_at(1);
        if version[0] != TOKEN_VERSION {
            return Err(ExpenseError::Encryption(format!(
                "Unsupported token version: {}",
                version[0]
            )));
        }

        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.aead.decrypt(nonce, ciphertext).map_err(|_| {
            ExpenseError::Encryption(
                "Decryption failed: invalid key or corrupted data".to_string(),
            )
        })
    }

    /// Serialize records to JSON and encrypt them
    pub fn encrypt_records(&self, records: &[ExpenseRecord]) -> ExpenseResult<String> {
        let json = serde_json::to_vec(records)?;
        self.encrypt(&json)
    }

    /// Decrypt a token and deserialize the record list inside it
    pub fn decrypt_records(&self, token: &str) -> ExpenseResult<Vec<ExpenseRecord>> {
        let json = self.decrypt(token)?;
        let records = serde_json::from_slice(&json)?;
        Ok(records)
    }
}
