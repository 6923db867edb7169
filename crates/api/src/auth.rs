use shared_types::role::parse_roles;
use shared_types::{
    AppError, LoginRequest, LoginResponse, ProfileUpdateRequest, RefreshResponse,
    RegisterRequest, Role, User, ValidateRequest,
};

use crate::ApiClient;

impl ApiClient {
    /// Sign in and return the granted roles in the order the backend sent them.
    ///
    /// The session cookie is set by the response. An empty role list is
    /// returned as-is; turning it into `NoRolesAssigned` is the session's job.
    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn login(&self, req: &LoginRequest) -> Result<Vec<Role>, AppError> {
        req.validate_request()?;
        let response: LoginResponse = self.post_credentials("/login/", req).await?;
        let roles = parse_roles(&response.roles);
        tracing::info!(roles = roles.len(), "Login accepted");
        Ok(roles)
    }

    /// Renew the access cookie.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> Result<(), AppError> {
        let _: RefreshResponse = self.post("/login/refresh/", &serde_json::json!({})).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email, role = %req.role))]
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), AppError> {
        req.validate_request()?;
        let _: serde_json::Value = self.post("/register/", req).await?;
        tracing::info!("Account registered");
        Ok(())
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn update_profile(&self, req: &ProfileUpdateRequest) -> Result<User, AppError> {
        req.validate_request()?;
        self.put("/profile/", req).await
    }
}
