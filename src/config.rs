use std::env;

/// GitHub OAuth endpoints and app credentials. The endpoint URLs are
/// overridable so tests can point the real client at a local mock server.
#[derive(Clone)]
pub struct GitHubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorize_url: String,
    pub token_url: String,
    pub user_api_url: String,
}

pub struct Config {
    pub database_url: String,
    pub frontend_origin: String,
    pub bind_addr: String,
    pub github: GitHubOAuthConfig,
}

const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const DEFAULT_USER_API_URL: &str = "https://api.github.com/user";

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok(); // Load .env file

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let frontend_origin = env::var("FRONTEND_ORIGIN").expect("FRONTEND_ORIGIN must be set");

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:4000".to_string());

        let github = GitHubOAuthConfig {
            client_id: env::var("GITHUB_CLIENT_ID").expect("GITHUB_CLIENT_ID must be set"),
            client_secret: env::var("GITHUB_CLIENT_SECRET")
                .expect("GITHUB_CLIENT_SECRET must be set"),
            redirect_uri: env::var("GITHUB_REDIRECT_URI").expect("GITHUB_REDIRECT_URI must be set"),
            authorize_url: env::var("GITHUB_OAUTH_AUTHORIZE_URL")
                .unwrap_or_else(|_| DEFAULT_AUTHORIZE_URL.to_string()),
            token_url: env::var("GITHUB_OAUTH_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            user_api_url: env::var("GITHUB_OAUTH_USER_URL")
                .unwrap_or_else(|_| DEFAULT_USER_API_URL.to_string()),
        };

        Config {
            database_url,
            frontend_origin,
            bind_addr,
            github,
        }
    }
}
