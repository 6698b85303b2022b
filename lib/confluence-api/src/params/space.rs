use crate::{Query, Validate, ValidationError};

/// Space listing, and content listing within a space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct SpaceParameters {
    /// Space keys, one `spaceKey` pair each. At least one is mandatory.
    #[query(unwrap)]
    pub space_key: Vec<String>,
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Space type, see [`crate::model::Space::TYPE_GLOBAL`].
    #[query(rename = "type")]
    pub space_type: String,
    /// Space status, see [`crate::model::Space::STATUS_CURRENT`].
    pub status: String,
    /// Label filter.
    pub label: String,
    /// `all` or `root`, for space content listings.
    pub depth: String,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
    /// Only spaces the current user marked as favourite.
    pub favourite: bool,
}

impl SpaceParameters {
    /// Select the given spaces.
    #[must_use]
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            space_key: keys.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Validate for SpaceParameters {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.space_key.is_empty() {
            return Err(ValidationError::Missing("space key"));
        }
        Ok(())
    }
}
