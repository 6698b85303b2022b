use super::API;
use crate::api::segment;
use crate::model::{Content, ContentCollection, Contents, History, LabelCollection, Restriction, Restrictions};
use crate::params::{
    AttachmentParameters, ChildrenParameters, CollectionParameters, ContentIdParameters,
    ContentParameters, ExpandParameters, LabelParameters,
};
use crate::{Confluence, HttpClient, Method, NO_BODY, Result, StatusTable};

fn content_path(id: &str) -> String {
    format!("{API}/content/{}", segment(id))
}

impl<C: HttpClient> Confluence<C> {
    /// Content of a space, optionally filtered by type, title or posting day.
    pub async fn content(&self, params: &ContentParameters) -> Result<ContentCollection> {
        let path = format!("{API}/content");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// A single piece of content.
    pub async fn content_by_id(&self, id: &str, params: &ContentIdParameters) -> Result<Content> {
        self.execute(
            Method::Get,
            &content_path(id),
            params,
            NO_BODY,
            StatusTable::CONTENT,
        )
        .await
    }

    /// History of a piece of content.
    pub async fn content_history(&self, id: &str, params: &ExpandParameters) -> Result<History> {
        let path = format!("{}/history", content_path(id));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// Direct children, grouped by type.
    pub async fn content_children(
        &self,
        id: &str,
        params: &ChildrenParameters,
    ) -> Result<Contents> {
        let path = format!("{}/child", content_path(id));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// Direct children of one type, e.g. [`Content::TYPE_PAGE`].
    pub async fn content_children_by_type(
        &self,
        id: &str,
        content_type: &str,
        params: &ChildrenParameters,
    ) -> Result<ContentCollection> {
        let path = format!("{}/child/{}", content_path(id), segment(content_type));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// Comments of a piece of content.
    pub async fn content_comments(
        &self,
        id: &str,
        params: &ChildrenParameters,
    ) -> Result<ContentCollection> {
        let path = format!("{}/child/comment", content_path(id));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// Attachments of a piece of content.
    pub async fn attachments(
        &self,
        id: &str,
        params: &AttachmentParameters,
    ) -> Result<ContentCollection> {
        let path = format!("{}/child/attachment", content_path(id));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// All descendants, grouped by type.
    pub async fn descendants(&self, id: &str, params: &ExpandParameters) -> Result<Contents> {
        let path = format!("{}/descendant", content_path(id));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// All descendants of one type.
    pub async fn descendants_of_type(
        &self,
        id: &str,
        descendant_type: &str,
        params: &ExpandParameters,
    ) -> Result<ContentCollection> {
        let path = format!("{}/descendant/{}", content_path(id), segment(descendant_type));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// Labels of a piece of content.
    pub async fn labels(&self, id: &str, params: &LabelParameters) -> Result<LabelCollection> {
        let path = format!("{}/label", content_path(id));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::CONTENT)
            .await
    }

    /// Read and update restrictions of a piece of content.
    pub async fn restrictions_by_operation(
        &self,
        id: &str,
        params: &ExpandParameters,
    ) -> Result<Restrictions> {
        let path = format!("{}/restriction/byOperation", content_path(id));
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// Restriction for one operation, see [`Restriction::OPERATION_READ`].
    pub async fn restrictions_for_operation(
        &self,
        id: &str,
        operation: &str,
        params: &CollectionParameters,
    ) -> Result<Restriction> {
        let path = format!(
            "{}/restriction/byOperation/{}",
            content_path(id),
            segment(operation)
        );
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }
}
