use std::sync::Arc;

use crate::db::user_repository::UserRepository;
use crate::models::user::User;
use crate::routes::auth::claims::Claims;
use crate::services::oauth::github::{errors::GitHubAuthError, service::GitHubOAuthService};
use crate::utils::jwt::{create_jwt, JwtKeys};

#[derive(Debug)]
pub struct AuthenticatedSession {
    pub token: String,
    pub user: User,
}

/// Runs the GitHub login handshake: exchange the authorization code for an
/// access token, fetch the profile it unlocks, resolve the local user, and
/// sign a session token.
///
/// The steps are strictly sequential and nothing is retried; any failure
/// surfaces to the caller and the whole login fails. The access token lives
/// only for the profile fetch.
pub struct AuthenticateUserService {
    db: Arc<dyn UserRepository>,
    github: Arc<dyn GitHubOAuthService>,
    jwt_keys: JwtKeys,
}

impl AuthenticateUserService {
    pub fn new(
        db: Arc<dyn UserRepository>,
        github: Arc<dyn GitHubOAuthService>,
        jwt_keys: JwtKeys,
    ) -> Self {
        Self {
            db,
            github,
            jwt_keys,
        }
    }

    pub async fn execute(&self, code: &str) -> Result<AuthenticatedSession, GitHubAuthError> {
        let access_token = self.github.exchange_code_for_token(code).await?;
        let profile = self.github.fetch_user_info(&access_token).await?;

        // First login inserts the profile; later logins keep the stored row
        // untouched, even when the GitHub profile has changed since.
        let user = match self.db.find_user_by_github_id(profile.id).await? {
            Some(existing) => existing,
            None => self
                .db
                .create_user(
                    profile.id,
                    &profile.login,
                    &profile.avatar_url,
                    &profile.name,
                )
                .await
                .map_err(|err| {
                    tracing::error!(?err, github_id = profile.id, "user creation failed");
                    GitHubAuthError::UserCreationFailed
                })?,
        };

        let claims = Claims::for_user(&user);
        let token = create_jwt(&claims, &self.jwt_keys).map_err(|err| {
            tracing::error!(?err, user_id = %user.id, "failed to sign session token");
            GitHubAuthError::JwtCreationFailed
        })?;

        Ok(AuthenticatedSession { token, user })
    }
}
