//! Request parameters.
//!
//! One struct per endpoint family. Each derives [`Query`](crate::Query) for
//! its query string and implements [`Validate`](crate::Validate) with the
//! rules Confluence enforces server-side, so a bad call fails before it is
//! sent.

mod audit;
mod calendar;
mod content;
mod search;
mod space;
mod user;

pub use audit::{AuditParameters, AuditSinceParameters};
pub use calendar::{CalendarEventsParameters, CalendarsParameters, is_valid_calendar_id};
pub use confluence_api_core::EmptyParameters;
pub use content::{
    AttachmentParameters, ChildrenParameters, ContentIdParameters, ContentParameters,
    ContentSearchParameters, LabelParameters,
};
pub use search::SearchParameters;
pub use space::SpaceParameters;
pub use user::{UserParameters, WatchParameters};

use crate::{Query, Validate};

/// Parameters that only select which properties to expand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct ExpandParameters {
    /// Properties to expand, e.g. `space` or `body.view`.
    pub expand: Vec<String>,
}

impl ExpandParameters {
    /// Expand the given properties.
    #[must_use]
    pub fn new<I, S>(expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expand: expand.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for ExpandParameters {}

/// Paged listing with expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct CollectionParameters {
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl Validate for CollectionParameters {}
