use super::API;
use crate::api::segment;
use crate::model::{Contents, Space, SpaceCollection};
use crate::params::{ExpandParameters, SpaceParameters};
use crate::{Confluence, HttpClient, Method, NO_BODY, Result, StatusTable};

impl<C: HttpClient> Confluence<C> {
    /// Spaces selected by key.
    pub async fn spaces(&self, params: &SpaceParameters) -> Result<SpaceCollection> {
        let path = format!("{API}/space");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// A space by key.
    pub async fn space(&self, key: &str, params: &ExpandParameters) -> Result<Space> {
        let path = format!("{API}/space/{}", segment(key));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::SPACE)
            .await
    }

    /// Content of a space, grouped by type.
    pub async fn space_content(&self, key: &str, params: &SpaceParameters) -> Result<Contents> {
        let path = format!("{API}/space/{}/content", segment(key));
        self.execute(
            Method::Get,
            &path,
            params,
            NO_BODY,
            StatusTable::SPACE_CONTENT,
        )
        .await
    }

    /// Content of a space, limited to one type.
    pub async fn space_content_with_type(
        &self,
        key: &str,
        content_type: &str,
        params: &SpaceParameters,
    ) -> Result<Contents> {
        let path = format!(
            "{API}/space/{}/content/{}",
            segment(key),
            segment(content_type)
        );
        self.execute(
            Method::Get,
            &path,
            params,
            NO_BODY,
            StatusTable::SPACE_CONTENT,
        )
        .await
    }
}
