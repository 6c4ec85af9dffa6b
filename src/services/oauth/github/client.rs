// services/oauth/github/client.rs

use crate::config::GitHubOAuthConfig;
use crate::services::oauth::github::errors::GitHubAuthError;
use crate::services::oauth::github::models::GitHubToken;
use async_trait::async_trait;
use reqwest::Client;

use super::service::{GitHubOAuthService, GitHubUserInfo};

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = "gitgate";

#[derive(Clone)]
pub struct GitHubOAuthClient {
    pub client: Client,
    pub config: GitHubOAuthConfig,
}

impl GitHubOAuthClient {
    pub fn new(client: Client, config: GitHubOAuthConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl GitHubOAuthService for GitHubOAuthClient {
    async fn exchange_code_for_token(&self, code: &str) -> Result<GitHubToken, GitHubAuthError> {
        let res = self
            .client
            .post(&self.config.token_url)
            .header("Accept", "application/json") // Needed to get JSON response instead of URL-encoded
            .query(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
            ])
            .send()
            .await
            .map_err(|_| GitHubAuthError::TokenExchangeFailed)?;

        if !res.status().is_success() {
            return Err(GitHubAuthError::TokenExchangeFailed);
        }

        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|_| GitHubAuthError::InvalidTokenJson)?;

        // An expired or already-used code still comes back as a 200 with an
        // "error" body, so the only reliable signal is the missing field.
        let access_token = json["access_token"]
            .as_str()
            .ok_or(GitHubAuthError::InvalidTokenJson)?;
        Ok(GitHubToken {
            access_token: access_token.to_string(),
        })
    }

    async fn fetch_user_info(
        &self,
        token: &GitHubToken,
    ) -> Result<GitHubUserInfo, GitHubAuthError> {
        let user_resp = self
            .client
            .get(&self.config.user_api_url)
            .bearer_auth(&token.access_token)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|_| GitHubAuthError::UserInfoFetchFailed)?;

        if !user_resp.status().is_success() {
            return Err(GitHubAuthError::UserInfoFetchFailed);
        }

        let user_json: serde_json::Value = user_resp
            .json()
            .await
            .map_err(|_| GitHubAuthError::UserInfoFetchFailed)?;

        let id = user_json["id"]
            .as_i64()
            .ok_or(GitHubAuthError::InvalidUserInfo)?;
        let login = user_json["login"]
            .as_str()
            .ok_or(GitHubAuthError::InvalidUserInfo)?
            .to_string();
        let avatar_url = user_json["avatar_url"]
            .as_str()
            .ok_or(GitHubAuthError::InvalidUserInfo)?
            .to_string();

        // "name" is null for accounts without a display name; fall back to
        // the login rather than rejecting the profile.
        let name = match user_json["name"].as_str() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => login.clone(),
        };

        Ok(GitHubUserInfo {
            id,
            login,
            avatar_url,
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn test_config(server: &MockServer) -> GitHubOAuthConfig {
        GitHubOAuthConfig {
            client_id: "test_client_id".into(),
            client_secret: "test_client_secret".into(),
            redirect_uri: "http://localhost/callback".into(),
            authorize_url: server.url("/login/oauth/authorize"),
            token_url: server.url("/login/oauth/access_token"),
            user_api_url: server.url("/user"),
        }
    }

    #[tokio::test]
    async fn exchange_sends_credentials_as_query_params() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/login/oauth/access_token")
                    .query_param("client_id", "test_client_id")
                    .query_param("client_secret", "test_client_secret")
                    .query_param("code", "abc123")
                    .header("accept", "application/json");
                then.status(200).json_body(json!({
                    "access_token": "tok1",
                    "token_type": "bearer",
                    "scope": ""
                }));
            })
            .await;

        let client = GitHubOAuthClient::new(Client::new(), test_config(&server));
        let token = client.exchange_code_for_token("abc123").await.unwrap();

        mock.assert_async().await;
        assert_eq!(token.access_token, "tok1");
    }

    #[tokio::test]
    async fn exchange_rejects_error_body_without_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login/oauth/access_token");
                then.status(200).json_body(json!({
                    "error": "bad_verification_code",
                    "error_description": "The code passed is incorrect or expired."
                }));
            })
            .await;

        let client = GitHubOAuthClient::new(Client::new(), test_config(&server));
        let err = client.exchange_code_for_token("expired").await.unwrap_err();

        assert!(matches!(err, GitHubAuthError::InvalidTokenJson));
    }

    #[tokio::test]
    async fn fetch_user_info_uses_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/user")
                    .header("authorization", "Bearer tok1")
                    .header("user-agent", USER_AGENT);
                then.status(200).json_body(json!({
                    "id": 42,
                    "login": "alice",
                    "avatar_url": "https://x/a.png",
                    "name": "Alice"
                }));
            })
            .await;

        let client = GitHubOAuthClient::new(Client::new(), test_config(&server));
        let token = GitHubToken {
            access_token: "tok1".into(),
        };
        let info = client.fetch_user_info(&token).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            info,
            GitHubUserInfo {
                id: 42,
                login: "alice".into(),
                avatar_url: "https://x/a.png".into(),
                name: "Alice".into(),
            }
        );
    }

    #[tokio::test]
    async fn fetch_user_info_falls_back_to_login_when_name_is_null() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user");
                then.status(200).json_body(json!({
                    "id": 7,
                    "login": "nameless",
                    "avatar_url": "https://x/n.png",
                    "name": null
                }));
            })
            .await;

        let client = GitHubOAuthClient::new(Client::new(), test_config(&server));
        let token = GitHubToken {
            access_token: "tok1".into(),
        };
        let info = client.fetch_user_info(&token).await.unwrap();

        assert_eq!(info.name, "nameless");
    }

    #[tokio::test]
    async fn fetch_user_info_rejects_profile_missing_required_fields() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user");
                then.status(200).json_body(json!({ "login": "no-id" }));
            })
            .await;

        let client = GitHubOAuthClient::new(Client::new(), test_config(&server));
        let token = GitHubToken {
            access_token: "tok1".into(),
        };
        let err = client.fetch_user_info(&token).await.unwrap_err();

        assert!(matches!(err, GitHubAuthError::InvalidUserInfo));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_fetch_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user");
                then.status(401).json_body(json!({"message": "Bad credentials"}));
            })
            .await;

        let client = GitHubOAuthClient::new(Client::new(), test_config(&server));
        let token = GitHubToken {
            access_token: "revoked".into(),
        };
        let err = client.fetch_user_info(&token).await.unwrap_err();

        assert!(matches!(err, GitHubAuthError::UserInfoFetchFailed));
    }
}
