use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{AddAdminRequest, AdminRecord},
};
use crate::{error::PanelError, state::auth::SessionContext};

fn transient(err: impl std::fmt::Display) -> PanelError {
    PanelError::TransientFailure(err.to_string())
}

impl ApiClient {
    pub async fn list_admins(&self, session: &SessionContext) -> Result<Vec<AdminRecord>, PanelError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::with_auth(
            self.http_client().get(format!("{}/admins", base_url)),
            session,
        )
        .map_err(|e| PanelError::PermissionDenied(e.error))?;
        let response = Self::send(request).await.map_err(transient)?;

        let status = response.status();
        if status.is_success() {
            Self::parse_json(response).await.map_err(transient)
        } else {
            let body = Self::parse_error(response).await;
            Err(PanelError::from_list_status(status.as_u16(), body))
        }
    }

    pub async fn add_admin(
        &self,
        session: &SessionContext,
        identity: &str,
    ) -> Result<AdminRecord, PanelError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::with_auth(
            self.http_client()
                .post(format!("{}/admins", base_url))
                .json(&AddAdminRequest {
                    id: identity.to_string(),
                }),
            session,
        )
        .map_err(|e| PanelError::PermissionDenied(e.error))?;
        let response = Self::send(request).await.map_err(transient)?;

        let status = response.status();
        if status.is_success() {
            Self::parse_json(response).await.map_err(transient)
        } else {
            let body = Self::parse_error(response).await;
            Err(PanelError::from_status(status.as_u16(), identity, body))
        }
    }

    pub async fn remove_admin(
        &self,
        session: &SessionContext,
        identity: &str,
    ) -> Result<(), PanelError> {
        let base_url = self.resolved_base_url().await;
        let encoded = utf8_percent_encode(identity, NON_ALPHANUMERIC);
        let request = Self::with_auth(
            self.http_client()
                .delete(format!("{}/admins/{}", base_url, encoded)),
            session,
        )
        .map_err(|e| PanelError::PermissionDenied(e.error))?;
        let response = Self::send(request).await.map_err(transient)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = Self::parse_error(response).await;
            Err(PanelError::from_status(status.as_u16(), identity, body))
        }
    }
}
