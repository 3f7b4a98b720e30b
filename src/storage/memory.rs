//! In-memory record store, keyed by identity

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Identity};

use super::RecordStore;

#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Vec<ExpenseRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, identity: &Identity) -> ExpenseResult<Vec<ExpenseRecord>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(identity.as_str()).cloned().unwrap_or_default())
    }

    fn save(&self, identity: &Identity, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(identity.as_str().to_string(), records.to_vec());
        Ok(())
    }

    fn clear(&self, identity: &Identity) -> ExpenseResult<bool> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(identity.as_str()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FreeTextResolver, IdentityResolver, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let alice = FreeTextResolver.resolve("alice").unwrap();
        let record = ExpenseRecord::new(
            "Movie",
            Money::from_cents(900),
            Category::Entertainment,
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        );

        assert!(store.load(&alice).unwrap().is_empty());
        store.save(&alice, &[record.clone()]).unwrap();
        assert_eq!(store.load(&alice).unwrap(), vec![record]);
        assert!(store.clear(&alice).unwrap());
        assert!(!store.clear(&alice).unwrap());
    }
}
