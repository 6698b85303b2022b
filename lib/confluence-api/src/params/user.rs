use crate::{Query, Validate, ValidationError};

/// A user, addressed by key or username.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct UserParameters {
    /// User key.
    pub key: String,
    /// Username.
    pub username: String,
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
}

impl UserParameters {
    /// Look a user up by username.
    #[must_use]
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    /// Look a user up by user key.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }
}

impl Validate for UserParameters {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.key.is_empty() && self.username.is_empty() {
            return Err(ValidationError::MissingEither("key", "username"));
        }
        Ok(())
    }
}

/// Watch status lookup. Without a user, the current user is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct WatchParameters {
    /// User key.
    pub key: String,
    /// Username.
    pub username: String,
    /// Content type, for space watches.
    pub content_type: String,
}

impl Validate for WatchParameters {}
