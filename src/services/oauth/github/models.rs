// services/oauth/github/models.rs
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GitHubCallback {
    pub code: String,
    pub state: String,
}

/// Bearer token returned by the code exchange. Held only for the profile
/// fetch that follows; never persisted or logged.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GitHubToken {
    pub access_token: String,
}
