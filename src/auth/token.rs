//! Signed bearer tokens.
//!
//! Tokens are JWTs carrying the user's email as subject. Validation checks signature,
//! algorithm, and expiry; callers must still confirm the user exists.

use crate::config::{token_algorithm, Settings};
use crate::error::{AppError, ConfigError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// User id at issue time
    pub uid: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// Token id
    pub jti: String,
}

pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenManager {
    pub fn new(secret: &str, algorithm: Algorithm, lifetime: Duration) -> Self {
        TokenManager {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            lifetime,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let algorithm = token_algorithm(&settings.algorithm)?;
        Ok(Self::new(
            &settings.secret_key,
            algorithm,
            Duration::minutes(settings.access_token_expire_minutes),
        ))
    }

    /// Issue an access token for the given user.
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            uid: user_id,
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        encode(&Header::new(self.algorithm), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("failed to generate token: {}", e)))
    }

    /// Decode and verify a token. Expired, tampered, or foreign-signed tokens are Unauthorized.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("invalid token: {}", e)))
    }
}

/// Extract the credential from an `Authorization: Bearer <token>` header value.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(minutes: i64) -> TokenManager {
        TokenManager::new("test-secret", Algorithm::HS256, Duration::minutes(minutes))
    }

    #[test]
    fn issue_then_validate() {
        let m = manager(30);
        let token = m.issue(7, "test@example.com").unwrap();
        let claims = m.validate(&token).unwrap();
        assert_eq!(claims.sub, "test@example.com");
        assert_eq!(claims.uid, 7);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_rejected() {
        let m = manager(-5);
        let token = m.issue(1, "old@example.com").unwrap();
        assert!(matches!(m.validate(&token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn foreign_secret_rejected() {
        let token = manager(30).issue(1, "a@example.com").unwrap();
        let other = TokenManager::new("other-secret", Algorithm::HS256, Duration::minutes(30));
        assert!(matches!(other.validate(&token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn algorithm_mismatch_rejected() {
        let token = manager(30).issue(1, "a@example.com").unwrap();
        let other = TokenManager::new("test-secret", Algorithm::HS512, Duration::minutes(30));
        assert!(other.validate(&token).is_err());
    }

    #[test]
    fn bearer_header_parsing() {
        assert_eq!(extract_bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(extract_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("abc"), None);
    }
}
