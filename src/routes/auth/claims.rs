use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Session lifetime. Tokens are stateless; expiry is the only invalidation.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Profile snapshot embedded in the session token.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TokenUser {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Claims {
    pub sub: String, // user UUID
    pub exp: usize,  // expiration (as UNIX timestamp)
    pub iat: usize,
    pub user: TokenUser,
}

impl Claims {
    pub fn for_user(user: &User) -> Self {
        let issued_at = chrono::Utc::now();
        let expires_at = issued_at + chrono::Duration::hours(SESSION_TTL_HOURS);

        Claims {
            sub: user.id.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: issued_at.timestamp() as usize,
            user: TokenUser {
                id: user.id.to_string(),
                name: user.name.clone(),
                avatar_url: user.avatar_url.clone(),
            },
        }
    }
}
