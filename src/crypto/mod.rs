//! Cryptographic functions for the expense tracker
//!
//! Provides AES-256-GCM encryption of the per-user record blob, keyed by a
//! random per-identity key stored on disk.

pub mod encryption;
pub mod keys;

pub use encryption::{Cipher, SymmetricKey, KEY_SIZE};
pub use keys::KeyStore;
