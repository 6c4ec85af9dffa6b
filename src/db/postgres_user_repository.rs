use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::user_repository::UserRepository;
use crate::models::user::User;

pub struct PostgresUserRepository {
    pub pool: PgPool,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_user_by_github_id(&self, github_id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, github_id, login, avatar_url, name, created_at
            FROM users
            WHERE github_id = $1
            "#,
        )
        .bind(github_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_user(
        &self,
        github_id: i64,
        login: &str,
        avatar_url: &str,
        name: &str,
    ) -> Result<User, sqlx::Error> {
        // Uniqueness of github_id is enforced by the schema, not here; a lost
        // race between concurrent first logins surfaces as the constraint
        // violation it produces.
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (github_id, login, avatar_url, name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, github_id, login, avatar_url, name, created_at
            "#,
        )
        .bind(github_id)
        .bind(login)
        .bind(avatar_url)
        .bind(name)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await
    }

    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, github_id, login, avatar_url, name, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }
}
