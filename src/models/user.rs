use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: uuid::Uuid,
    pub github_id: i64,
    pub login: String,
    pub avatar_url: String,
    pub name: String,
    pub created_at: time::OffsetDateTime,
}

/// Projection returned by the API; omits persistence-only columns.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: uuid::Uuid,
    pub github_id: i64,
    pub login: String,
    pub avatar_url: String,
    pub name: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            id: user.id,
            github_id: user.github_id,
            login: user.login.clone(),
            avatar_url: user.avatar_url.clone(),
            name: user.name.clone(),
        }
    }
}
