//! Settings validation: reject values the server cannot run with.

use crate::config::Settings;
use crate::error::ConfigError;
use jsonwebtoken::Algorithm;
use std::str::FromStr;

/// Parse the configured token algorithm. Only HMAC algorithms work with a shared secret.
pub fn token_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
    let alg = Algorithm::from_str(name.trim()).map_err(|_| ConfigError::UnsupportedAlgorithm(name.to_string()))?;
    match alg {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(alg),
        _ => Err(ConfigError::UnsupportedAlgorithm(name.to_string())),
    }
}

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.secret_key.trim().is_empty() {
        return Err(ConfigError::Validation("SECRET_KEY must not be empty".into()));
    }
    token_algorithm(&settings.algorithm)?;
    if settings.access_token_expire_minutes <= 0 {
        return Err(ConfigError::Validation(
            "ACCESS_TOKEN_EXPIRE_MINUTES must be positive".into(),
        ));
    }
    if settings.database_url.trim().is_empty() {
        return Err(ConfigError::Validation("DATABASE_URL must not be empty".into()));
    }
    if settings.max_body_bytes == 0 {
        return Err(ConfigError::Validation("MAX_BODY_BYTES must be positive".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hmac_family() {
        assert_eq!(token_algorithm("HS256").unwrap(), Algorithm::HS256);
        assert_eq!(token_algorithm("HS512").unwrap(), Algorithm::HS512);
    }

    #[test]
    fn rejects_asymmetric_and_unknown() {
        assert!(matches!(token_algorithm("RS256"), Err(ConfigError::UnsupportedAlgorithm(_))));
        assert!(matches!(token_algorithm("none"), Err(ConfigError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn rejects_blank_secret_and_bad_expiry() {
        let mut settings = Settings::default();
        settings.secret_key = "  ".into();
        assert!(validate(&settings).is_err());

        let mut settings = Settings::default();
        settings.access_token_expire_minutes = 0;
        assert!(validate(&settings).is_err());

        assert!(validate(&Settings::default()).is_ok());
    }
}
