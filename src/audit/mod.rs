//! Audit logging for the expense tracker
//!
//! Every add and every reset is recorded in an append-only, line-delimited
//! JSON log (`audit.log`) next to the settings file.
//!
//! - `AuditEntry`: one logged operation, with the identity it applied to and
//!   a JSON snapshot of what changed.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
