use super::API;
use crate::api::segment;
use crate::model::{Group, GroupCollection, UserCollection};
use crate::params::{CollectionParameters, ExpandParameters};
use crate::{Confluence, HttpClient, Method, NO_BODY, Result, StatusTable};

impl<C: HttpClient> Confluence<C> {
    /// All groups.
    pub async fn groups(&self, params: &CollectionParameters) -> Result<GroupCollection> {
        let path = format!("{API}/group");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// A group by name.
    pub async fn group(&self, name: &str, params: &ExpandParameters) -> Result<Group> {
        let path = format!("{API}/group/{}", segment(name));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// Members of a group.
    pub async fn group_members(
        &self,
        name: &str,
        params: &CollectionParameters,
    ) -> Result<UserCollection> {
        let path = format!("{API}/group/{}/member", segment(name));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }
}
