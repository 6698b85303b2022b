use super::API;
use crate::model::{AuditRecordCollection, AuditRetentionInfo};
use crate::params::{AuditParameters, AuditSinceParameters};
use crate::{Confluence, EmptyParameters, HttpClient, Method, NO_BODY, Result, StatusTable};

impl<C: HttpClient> Confluence<C> {
    /// Audit records within a date range.
    pub async fn audit_records(&self, params: &AuditParameters) -> Result<AuditRecordCollection> {
        let path = format!("{API}/audit");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// Audit records newer than a relative period.
    pub async fn audit_records_since(
        &self,
        params: &AuditSinceParameters,
    ) -> Result<AuditRecordCollection> {
        let path = format!("{API}/audit/since");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// Current audit retention period.
    pub async fn audit_retention(&self) -> Result<AuditRetentionInfo> {
        let path = format!("{API}/audit/retention");
        self.execute(
            Method::Get,
            &path,
            &EmptyParameters,
            NO_BODY,
            StatusTable::PERMISSION,
        )
        .await
    }
}
