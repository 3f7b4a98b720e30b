//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Identity};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A record was appended
    Create,
    /// A store was wiped
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What an audited operation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Store,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Store => write!(f, "Store"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Identity whose store was affected
    pub identity: String,

    /// Short description, e.g. the expense name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Snapshot before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for an appended expense
    pub fn expense_added(identity: &Identity, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type: EntityType::Expense,
            identity: identity.to_string(),
            entity_name: Some(record.name.clone()),
            before: None,
            after: serde_json::to_value(record).ok(),
        }
    }

    /// Entry for a wiped store; `removed` is how many records it held
    pub fn store_reset(identity: &Identity, removed: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type: EntityType::Store,
            identity: identity.to_string(),
            entity_name: None,
            before: Some(serde_json::json!({ "records": removed })),
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} user={}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.identity
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(after) = &self.after {
            if let (Some(amount), Some(category)) = (after.get("Amount"), after.get("Category")) {
                output.push_str(&format!(" amount={} category={}", amount, category));
            }
        }

        if let Some(count) = self.before.as_ref().and_then(|b| b.get("records")) {
            output.push_str(&format!(" records={}", count));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn lunch() -> ExpenseRecord {
        ExpenseRecord::new(
            "Lunch",
            Money::from_cents(1250),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_expense_added_entry() {
        let entry = AuditEntry::expense_added(&Identity::local(), &lunch());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert_eq!(entry.identity, "local");
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["Name"], "Lunch");
    }

    #[test]
    fn test_store_reset_entry() {
        let entry = AuditEntry::store_reset(&Identity::local(), 3);

        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.entity_type, EntityType::Store);
        assert_eq!(entry.before.as_ref().unwrap()["records"], 3);
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::expense_added(&Identity::local(), &lunch()).format_human_readable();
        assert!(formatted.contains("CREATE Expense user=local (Lunch)"));
        assert!(formatted.contains("amount=12.5"));

        let formatted = AuditEntry::store_reset(&Identity::local(), 2).format_human_readable();
        assert!(formatted.contains("DELETE Store user=local records=2"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::store_reset(&Identity::local(), 0);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"delete\""));
        assert!(!json.contains("\"after\""));
        assert!(!json.contains("\"entity_name\""));
    }
}
