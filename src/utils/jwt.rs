use std::{collections::HashSet, env};

use crate::routes::auth::claims::Claims;
use jsonwebtoken::{
    decode, encode, errors::Error, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Minimum acceptable size for the JWT secret in bytes.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;
/// Minimum number of unique bytes expected for the JWT secret to avoid trivially guessable values.
const MIN_UNIQUE_JWT_BYTES: usize = 8;

#[derive(Debug, Error)]
pub enum JwtSecretError {
    #[error("JWT_SECRET must be set")]
    Missing,
    #[error("JWT_SECRET must be at least {required} bytes, but {actual} bytes were provided")]
    TooShort { actual: usize, required: usize },
    #[error(
        "JWT_SECRET must contain sufficient entropy (at least {required} unique bytes); only {actual} unique bytes found"
    )]
    LowEntropy { actual: usize, required: usize },
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys").finish_non_exhaustive()
    }
}

impl JwtKeys {
    pub fn from_env() -> Result<Self, JwtSecretError> {
        let value = env::var("JWT_SECRET").map_err(|_| JwtSecretError::Missing)?;
        Self::from_secret(value)
    }

    pub fn from_secret(secret: impl AsRef<[u8]>) -> Result<Self, JwtSecretError> {
        let bytes = secret.as_ref();
        validate_secret(bytes)?;

        Ok(Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        })
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

fn validate_secret(secret: &[u8]) -> Result<(), JwtSecretError> {
    if secret.len() < MIN_JWT_SECRET_LENGTH {
        return Err(JwtSecretError::TooShort {
            actual: secret.len(),
            required: MIN_JWT_SECRET_LENGTH,
        });
    }

    let unique = secret.iter().copied().collect::<HashSet<_>>().len();
    if unique < MIN_UNIQUE_JWT_BYTES {
        return Err(JwtSecretError::LowEntropy {
            actual: unique,
            required: MIN_UNIQUE_JWT_BYTES,
        });
    }

    Ok(())
}

pub fn create_jwt(claims: &Claims, keys: &JwtKeys) -> Result<String, Error> {
    encode(&Header::default(), claims, keys.encoding_key())
}

pub fn decode_jwt(token: &str, keys: &JwtKeys) -> Result<TokenData<Claims>, Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.insert("exp".to_string());
    let data = decode::<Claims>(token, keys.decoding_key(), &validation)?;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::from(ErrorKind::InvalidToken))?
        .as_secs();

    if (data.claims.exp as u64) <= now {
        return Err(Error::from(ErrorKind::ExpiredSignature));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;
    use crate::routes::auth::claims::{Claims, SESSION_TTL_HOURS};
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn valid_secret() -> &'static str {
        "0123456789abcdef0123456789abcdef"
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            github_id: 42,
            login: "alice".into(),
            avatar_url: "https://x/a.png".into(),
            name: "Alice".into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn rejects_short_secret() {
        let err = JwtKeys::from_secret("too-short").unwrap_err();
        assert!(matches!(
            err,
            JwtSecretError::TooShort {
                actual,
                required: MIN_JWT_SECRET_LENGTH
            } if actual < MIN_JWT_SECRET_LENGTH
        ));
    }

    #[test]
    fn rejects_low_entropy_secret() {
        let err = JwtKeys::from_secret("a".repeat(MIN_JWT_SECRET_LENGTH)).unwrap_err();
        assert!(matches!(
            err,
            JwtSecretError::LowEntropy {
                actual,
                required: _
            } if actual < MIN_UNIQUE_JWT_BYTES
        ));
    }

    #[test]
    fn accepts_valid_secret_and_round_trips() {
        let keys = JwtKeys::from_secret(valid_secret()).expect("secret should be accepted");
        let user = sample_user();
        let claims = Claims::for_user(&user);

        let token = create_jwt(&claims, &keys).expect("token should encode");
        let decoded = decode_jwt(&token, &keys).expect("token should decode");

        assert_eq!(decoded.claims.sub, user.id.to_string());
        assert_eq!(decoded.claims.user.name, "Alice");
        assert_eq!(decoded.claims.user.avatar_url, "https://x/a.png");
    }

    #[test]
    fn session_expires_exactly_one_day_after_issuance() {
        let keys = JwtKeys::from_secret(valid_secret()).unwrap();
        let claims = Claims::for_user(&sample_user());

        let token = create_jwt(&claims, &keys).unwrap();
        let decoded = decode_jwt(&token, &keys).unwrap();

        assert_eq!(
            decoded.claims.exp - decoded.claims.iat,
            (SESSION_TTL_HOURS * 3600) as usize
        );
    }

    #[test]
    fn rejects_expired_token() {
        let keys = JwtKeys::from_secret(valid_secret()).unwrap();
        let mut claims = Claims::for_user(&sample_user());
        claims.iat -= 2 * 24 * 3600;
        claims.exp -= 2 * 24 * 3600;

        let token = create_jwt(&claims, &keys).unwrap();
        let err = decode_jwt(&token, &keys).unwrap_err();

        assert_eq!(err.kind(), &ErrorKind::ExpiredSignature);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let keys = JwtKeys::from_secret(valid_secret()).unwrap();
        let other = JwtKeys::from_secret("fedcba9876543210fedcba9876543210").unwrap();
        let claims = Claims::for_user(&sample_user());

        let token = create_jwt(&claims, &other).unwrap();
        assert!(decode_jwt(&token, &keys).is_err());
    }
}
