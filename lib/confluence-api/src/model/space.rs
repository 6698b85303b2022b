use serde::Deserialize;

use super::{Icon, Links};

/// Confluence space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Space {
    /// Numeric id.
    pub id: u64,
    /// Space key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Space logo.
    pub icon: Option<Icon>,
    /// [`Self::TYPE_GLOBAL`] or [`Self::TYPE_PERSONAL`].
    #[serde(rename = "type")]
    pub space_type: String,
    /// [`Self::STATUS_CURRENT`] or [`Self::STATUS_ARCHIVED`].
    pub status: String,
    /// Links.
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

impl Space {
    /// Personal space of a user.
    pub const TYPE_PERSONAL: &'static str = "personal";
    /// Site space.
    pub const TYPE_GLOBAL: &'static str = "global";

    /// Active space.
    pub const STATUS_CURRENT: &'static str = "current";
    /// Archived space.
    pub const STATUS_ARCHIVED: &'static str = "archived";

    /// Returns `true` for site spaces.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.space_type == Self::TYPE_GLOBAL
    }

    /// Returns `true` for personal spaces.
    #[must_use]
    pub fn is_personal(&self) -> bool {
        self.space_type == Self::TYPE_PERSONAL
    }

    /// Returns `true` for archived spaces.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.status == Self::STATUS_ARCHIVED
    }
}

/// Page of spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpaceCollection {
    /// Spaces of this page.
    pub results: Vec<Space>,
    /// Index of the first space.
    pub start: u32,
    /// Requested page size.
    pub limit: u32,
    /// Number of spaces in this page.
    pub size: u32,
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_spaces() {
        let spaces: SpaceCollection = serde_json::from_value(json!({
            "results": [
                { "id": 98306, "key": "TS", "name": "Test Space", "type": "global", "status": "current" },
                { "id": 98307, "key": "~jsmith", "name": "John Smith", "type": "personal", "status": "archived" }
            ],
            "start": 0,
            "limit": 25,
            "size": 2
        }))
        .expect("decode");

        let [global, personal] = spaces.results.as_slice() else {
            panic!("expected two spaces");
        };
        check!(global.is_global());
        check!(!global.is_archived());
        check!(personal.is_personal());
        check!(personal.is_archived());
    }
}
