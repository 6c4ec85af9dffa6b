use async_trait::async_trait;
use uuid::Uuid;

use crate::models::user::User;

/// Persistence surface for local users. Insert-only: profile fields are
/// written once on first login and never refreshed afterwards.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_github_id(&self, github_id: i64) -> Result<Option<User>, sqlx::Error>;
    async fn create_user(
        &self,
        github_id: i64,
        login: &str,
        avatar_url: &str,
        name: &str,
    ) -> Result<User, sqlx::Error>;
    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error>;
}
