use super::API;
use crate::model::{ContentCollection, SearchResult};
use crate::params::{ContentSearchParameters, SearchParameters};
use crate::{Confluence, HttpClient, Method, NO_BODY, Result, StatusTable};

impl<C: HttpClient> Confluence<C> {
    /// CQL search across content, spaces and users.
    pub async fn search(&self, params: &SearchParameters) -> Result<SearchResult> {
        let path = format!("{API}/search");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::SEARCH)
            .await
    }

    /// CQL search over content only.
    pub async fn search_content(
        &self,
        params: &ContentSearchParameters,
    ) -> Result<ContentCollection> {
        let path = format!("{API}/content/search");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::SEARCH)
            .await
    }
}
