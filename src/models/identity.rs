//! User identity used to namespace stored expenses
//!
//! An identity is whatever string the user types. Nothing is authenticated:
//! anyone who supplies the same string gets the same store. Resolution goes
//! through [`IdentityResolver`] so a real authentication step can replace
//! [`FreeTextResolver`] without touching the storage layer.

use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// Longest storage key we allow, keeping derived file names well under
/// common filesystem limits
const MAX_STORAGE_KEY_LEN: usize = 200;

/// A resolved identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Identity used by the single-user plaintext store
    pub fn local() -> Self {
        Self("local".to_string())
    }

    /// The identity as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File-name-safe key derived from the identity
    ///
    /// ASCII letters, digits and `-` pass through; every other byte
    /// (including `_`) becomes `_xx` in lowercase hex, so distinct identities
    /// never share a key.
    pub fn storage_key(&self) -> String {
        let mut key = String::with_capacity(self.0.len());
        for byte in self.0.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                key.push(byte as char);
            } else {
                key.push_str(&format!("_{:02x}", byte));
            }
        }
        key
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns raw user input into an [`Identity`]
pub trait IdentityResolver {
    fn resolve(&self, raw: &str) -> ExpenseResult<Identity>;
}

/// Accepts any non-blank text as an identity, without authentication
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeTextResolver;

impl IdentityResolver for FreeTextResolver {
    fn resolve(&self, raw: &str) -> ExpenseResult<Identity> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExpenseError::Identity(
                "Username cannot be empty".to_string(),
            ));
        }

        let identity = Identity(trimmed.to_string());
        if identity.storage_key().len() > MAX_STORAGE_KEY_LEN {
            return Err(ExpenseError::Identity(format!(
                "Username is too long ({} characters)",
                trimmed.chars().count()
            )));
        }

        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_trims() {
        let id = FreeTextResolver.resolve("  alice  ").unwrap();
        assert_eq!(id.as_str(), "alice");
    }

    #[test]
    fn test_blank_rejected() {
        let err = FreeTextResolver.resolve("   ").unwrap_err();
        assert!(matches!(err, ExpenseError::Identity(_)));
    }

    #[test]
    fn test_storage_key_plain() {
        let id = FreeTextResolver.resolve("alice-01").unwrap();
        assert_eq!(id.storage_key(), "alice-01");
    }

    #[test]
    fn test_storage_key_escapes() {
        let id = FreeTextResolver.resolve("../etc/x").unwrap();
        let key = id.storage_key();
        assert!(!key.contains('/'));
        assert!(!key.contains('.'));
        assert_eq!(key, "_2e_2e_2fetc_2fx");
    }

    #[test]
    fn test_storage_key_injective() {
        let a = FreeTextResolver.resolve("a_b").unwrap();
        let b = FreeTextResolver.resolve("a b").unwrap();
        assert_ne!(a.storage_key(), b.storage_key());
    }

    #[test]
    fn test_storage_key_is_deterministic() {
        let a = FreeTextResolver.resolve("Ünïcode user").unwrap();
        let b = FreeTextResolver.resolve("Ünïcode user").unwrap();
        assert_eq!(a.storage_key(), b.storage_key());
        assert!(a.storage_key().is_ascii());
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "x".repeat(500);
        assert!(FreeTextResolver.resolve(&long).is_err());
    }
}
