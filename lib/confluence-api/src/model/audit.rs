use serde::Deserialize;

use super::{Timestamp, User};

/// Audit log entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditRecord {
    /// Who performed the action.
    pub author: Option<User>,
    /// Client address.
    pub remote_address: String,
    /// When the action happened.
    pub creation_date: Option<Timestamp>,
    /// One-line summary.
    pub summary: String,
    /// Details.
    pub description: String,
    /// Category, e.g. `Users and groups`.
    pub category: String,
    /// Whether the author acted as system administrator.
    pub sys_admin: bool,
}

/// Page of audit records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuditRecordCollection {
    /// Records of this page.
    pub results: Vec<AuditRecord>,
    /// Index of the first record.
    pub start: u32,
    /// Requested page size.
    pub limit: u32,
    /// Number of records in this page.
    pub size: u32,
}

/// How long audit records are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditRetentionInfo {
    /// Number of [`Self::units`].
    pub number: u32,
    /// Period unit, e.g. `years`.
    pub units: String,
}
