use chrono::{DateTime, Utc};

use crate::{Query, Validate};

/// Audit records within a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct AuditParameters {
    /// Earliest record date, sent as `YYYY-MM-DD`.
    pub start_date: Option<DateTime<Utc>>,
    /// Latest record date, sent as `YYYY-MM-DD`.
    pub end_date: Option<DateTime<Utc>>,
    /// Free-text filter.
    pub search_string: String,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl Validate for AuditParameters {}

/// Audit records newer than a relative period, e.g. the last 3 days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct AuditSinceParameters {
    /// Number of [`Self::units`].
    pub number: u32,
    /// One of the `UNITS_*` constants.
    pub units: String,
    /// Free-text filter.
    pub search_string: String,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl AuditSinceParameters {
    /// Minutes.
    pub const UNITS_MINUTES: &'static str = "minutes";
    /// Hours.
    pub const UNITS_HOURS: &'static str = "hours";
    /// Days.
    pub const UNITS_DAYS: &'static str = "days";
    /// Months.
    pub const UNITS_MONTHS: &'static str = "months";
    /// Years.
    pub const UNITS_YEARS: &'static str = "years";
}

impl Validate for AuditSinceParameters {}
