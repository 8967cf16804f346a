use super::{
    client::ApiClient,
    types::{ApiError, MeResponse, RoleFlagsResponse},
};
use crate::state::auth::SessionContext;

impl ApiClient {
    pub async fn get_me(&self, session: &SessionContext) -> Result<MeResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::with_auth(
            self.http_client().get(format!("{}/auth/me", base_url)),
            session,
        )?;
        let response = Self::send(request).await?;

        let status = response.status();
        if status.is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::parse_error(response)
                .await
                .unwrap_or_else(|| ApiError::unknown(format!("Session lookup failed ({})", status))))
        }
    }

    pub async fn get_role_flags(
        &self,
        session: &SessionContext,
    ) -> Result<RoleFlagsResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::with_auth(
            self.http_client().get(format!("{}/admins/me/role", base_url)),
            session,
        )?;
        let response = Self::send(request).await?;

        let status = response.status();
        if status.is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::parse_error(response)
                .await
                .unwrap_or_else(|| ApiError::unknown(format!("Role lookup failed ({})", status))))
        }
    }
}
