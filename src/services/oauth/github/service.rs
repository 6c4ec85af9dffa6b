// services/oauth/github/service.rs

use super::{errors::GitHubAuthError, models::GitHubToken};
use async_trait::async_trait;

/// Typed snapshot of the GitHub profile, mapped out of the provider's JSON at
/// the boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GitHubUserInfo {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub name: String,
}

#[async_trait]
pub trait GitHubOAuthService: Send + Sync {
    async fn exchange_code_for_token(&self, code: &str) -> Result<GitHubToken, GitHubAuthError>;
    async fn fetch_user_info(
        &self,
        access_token: &GitHubToken,
    ) -> Result<GitHubUserInfo, GitHubAuthError>;
}
