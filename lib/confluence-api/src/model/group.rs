use serde::Deserialize;

use super::UserCollection;

/// User group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Group {
    /// Always `group`.
    #[serde(rename = "type")]
    pub group_type: String,
    /// Group name.
    pub name: String,
}

/// Page of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupCollection {
    /// Groups of this page.
    pub results: Vec<Group>,
    /// Index of the first group.
    pub start: u32,
    /// Requested page size.
    pub limit: u32,
    /// Number of groups in this page.
    pub size: u32,
}

/// Read and update restrictions of a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Restrictions {
    /// Who may view.
    pub read: Option<Restriction>,
    /// Who may edit.
    pub update: Option<Restriction>,
}

/// Restriction for one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Restriction {
    /// [`Self::OPERATION_READ`] or [`Self::OPERATION_UPDATE`].
    pub operation: String,
    /// Users and groups the operation is restricted to.
    #[serde(rename = "restrictions")]
    pub data: Option<RestrictionData>,
}

impl Restriction {
    /// View operation.
    pub const OPERATION_READ: &'static str = "read";
    /// Edit operation.
    pub const OPERATION_UPDATE: &'static str = "update";
}

/// Users and groups of a [`Restriction`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RestrictionData {
    /// Restricted users.
    pub user: Option<UserCollection>,
    /// Restricted groups.
    pub group: Option<GroupCollection>,
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_restrictions() {
        let restrictions: Restrictions = serde_json::from_value(json!({
            "read": {
                "operation": "read",
                "restrictions": {
                    "user": { "results": [{ "username": "jsmith" }], "size": 1 },
                    "group": { "results": [{ "type": "group", "name": "confluence-users" }], "size": 1 }
                }
            },
            "update": { "operation": "update" }
        }))
        .expect("decode");

        let read = restrictions.read.expect("read");
        check!(read.operation == Restriction::OPERATION_READ);
        let data = read.data.expect("data");
        check!(data.user.map(|u| u.results[0].username.clone()) == Some("jsmith".to_string()));
        check!(data.group.map(|g| g.results[0].name.clone()) == Some("confluence-users".to_string()));

        let update = restrictions.update.expect("update");
        check!(update.data.is_none());
    }
}
