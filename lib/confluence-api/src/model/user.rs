use serde::Deserialize;

use super::Icon;

/// Confluence user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// `known`, `anonymous` or `unknown`.
    #[serde(rename = "type")]
    pub user_type: String,
    /// Login name.
    pub username: String,
    /// Stable user key.
    pub user_key: String,
    /// Avatar.
    pub profile_picture: Option<Icon>,
    /// Full name.
    pub display_name: String,
}

impl User {
    /// Returns `true` for the anonymous user.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.user_type == "anonymous"
    }
}

/// Page of users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserCollection {
    /// Users of this page.
    pub results: Vec<User>,
    /// Index of the first user.
    pub start: u32,
    /// Requested page size.
    pub limit: u32,
    /// Number of users in this page.
    pub size: u32,
}

/// Whether a user watches some content or space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WatchStatus {
    /// `true` when watching.
    pub watching: bool,
}
