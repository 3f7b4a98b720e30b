//! Plaintext CSV store
//!
//! One file shared by everyone; the identity argument is ignored.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::csv::{read_expenses_csv, write_expenses_csv};
use crate::models::{ExpenseRecord, Identity};

use super::file_io::{remove_if_exists, write_atomic_with};
use super::RecordStore;

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl RecordStore for CsvStore {
    fn load(&self, _identity: &Identity) -> ExpenseResult<Vec<ExpenseRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let records = read_expenses_csv(BufReader::new(file))?;
        debug!(path = %self.path.display(), count = records.len(), "loaded csv store");
        Ok(records)
    }

    fn save(&self, _identity: &Identity, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        write_atomic_with(&self.path, |writer| write_expenses_csv(records, writer))?;
        debug!(path = %self.path.display(), count = records.len(), "saved csv store");
        Ok(())
    }

    fn clear(&self, _identity: &Identity) -> ExpenseResult<bool> {
        remove_if_exists(&self.path)
    }
}
