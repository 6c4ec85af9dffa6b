use crate::config::Config;
use crate::db::user_repository::UserRepository;
use crate::services::auth::authenticate_user::AuthenticateUserService;
use crate::services::oauth::github::service::GitHubOAuthService;
use crate::utils::jwt::JwtKeys;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn UserRepository>,
    pub github_oauth: Arc<dyn GitHubOAuthService>,
    pub authenticator: Arc<AuthenticateUserService>,
    pub jwt_keys: JwtKeys,
    pub http_client: Arc<Client>,
    pub config: Arc<Config>,
}
