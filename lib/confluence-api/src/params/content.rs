use chrono::NaiveDate;

use crate::{Query, Validate, ValidationError, require};

/// Content listing within a space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct ContentParameters {
    /// Content type, see [`crate::model::Content::TYPE_PAGE`] and friends.
    #[query(rename = "type")]
    pub content_type: String,
    /// Space key. Mandatory.
    pub space_key: String,
    /// Exact title.
    pub title: String,
    /// Content status.
    pub status: String,
    /// Blog post publication day.
    pub posting_day: Option<NaiveDate>,
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl Validate for ContentParameters {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.space_key, "space key")
    }
}

/// A single piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct ContentIdParameters {
    /// Content status, e.g. `trashed` to fetch trashed content.
    pub status: String,
    /// Historical version number.
    pub version: u32,
    /// Properties to expand.
    pub expand: Vec<String>,
}

impl Validate for ContentIdParameters {}

/// CQL content search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct ContentSearchParameters {
    /// CQL query.
    pub cql: String,
    /// CQL context, as a JSON document.
    #[query(rename = "cqlcontext")]
    pub cql_context: String,
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl Validate for ContentSearchParameters {}

/// Children of a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct ChildrenParameters {
    /// Version of the parent to list children of.
    pub parent_version: u32,
    /// Comment location (`inline`, `footer`, `resolved`).
    pub location: String,
    /// `all` for every level, `root` for direct children only.
    pub depth: String,
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl Validate for ChildrenParameters {}

/// Attachments of a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct AttachmentParameters {
    /// Exact file name.
    pub filename: String,
    /// Media type, e.g. `image/png`.
    pub media_type: String,
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl Validate for AttachmentParameters {}

/// Labels of a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct LabelParameters {
    /// Label prefix (`global`, `my`, `team`).
    pub prefix: String,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl Validate for LabelParameters {}
