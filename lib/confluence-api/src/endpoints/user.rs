use super::API;
use crate::api::segment;
use crate::model::{GroupCollection, User, WatchStatus};
use crate::params::{ExpandParameters, UserParameters, WatchParameters};
use crate::{Confluence, EmptyParameters, HttpClient, Method, NO_BODY, Result, StatusTable};

impl<C: HttpClient> Confluence<C> {
    /// A user by key or username.
    pub async fn user(&self, params: &UserParameters) -> Result<User> {
        let path = format!("{API}/user");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::USER)
            .await
    }

    /// The anonymous user, as Confluence presents it.
    pub async fn anonymous_user(&self) -> Result<User> {
        let path = format!("{API}/user/anonymous");
        self.execute(
            Method::Get,
            &path,
            &EmptyParameters,
            NO_BODY,
            StatusTable::PERMISSION,
        )
        .await
    }

    /// The authenticated user.
    pub async fn current_user(&self, params: &ExpandParameters) -> Result<User> {
        let path = format!("{API}/user/current");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// Groups a user belongs to.
    pub async fn user_groups(&self, params: &UserParameters) -> Result<GroupCollection> {
        let path = format!("{API}/user/memberof");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// Whether a user watches a piece of content.
    pub async fn is_watching_content(
        &self,
        content_id: &str,
        params: &WatchParameters,
    ) -> Result<WatchStatus> {
        let path = format!("{API}/user/watch/content/{}", segment(content_id));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// Whether a user watches a space.
    pub async fn is_watching_space(
        &self,
        space_key: &str,
        params: &WatchParameters,
    ) -> Result<WatchStatus> {
        let path = format!("{API}/user/watch/space/{}", segment(space_key));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::SPACE)
            .await
    }
}
