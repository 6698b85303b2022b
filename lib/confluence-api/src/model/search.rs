use serde::Deserialize;

use super::{Content, Date, Space, User};

/// CQL search answer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResult {
    /// Matches of this page.
    pub results: Vec<SearchEntity>,
    /// Index of the first match.
    pub start: u32,
    /// Requested page size.
    pub limit: u32,
    /// Number of matches in this page.
    pub size: u32,
    /// Number of matches overall.
    pub total_size: u32,
    /// The query as the server understood it.
    pub cql_query: String,
    /// Server-side duration, in milliseconds.
    pub search_duration: u64,
}

/// One search match. Exactly one of content, space or user is set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchEntity {
    /// Matched content.
    pub content: Option<Content>,
    /// Matched space.
    pub space: Option<Space>,
    /// Matched user.
    pub user: Option<User>,
    /// Title.
    pub title: String,
    /// Excerpt around the match.
    pub excerpt: String,
    /// Relative URL.
    pub url: String,
    /// `content`, `space` or `user`.
    pub entity_type: String,
    /// Last modification.
    pub last_modified: Option<Date>,
}
