use shared_types::{
    AdminAnalytics, AppError, RoleAssignmentRequest, User, UserManagementRequest,
    ValidateRequest,
};

use crate::ApiClient;

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn fetch_admin_analytics(&self) -> Result<AdminAnalytics, AppError> {
        self.get("/admin/analytics/").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get("/users/").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.get(&format!("/users/{id}/")).await
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn create_user(&self, req: &UserManagementRequest) -> Result<User, AppError> {
        req.validate_request()?;
        self.post("/users/", req).await
    }

    /// Replace the role set of a user.
    #[tracing::instrument(skip(self, req), fields(user_id = %req.user_id))]
    pub async fn assign_roles(&self, req: &RoleAssignmentRequest) -> Result<User, AppError> {
        req.validate_request()?;
        let user: User = self
            .put(&format!("/users/{}/roles/", req.user_id.trim()), req)
            .await?;
        tracing::info!(user_id = user.id, roles = ?user.roles, "Roles assigned");
        Ok(user)
    }
}
