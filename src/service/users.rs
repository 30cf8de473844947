//! Registration, login, and user lookup.

use crate::auth::{hash_password, verify_password, TokenManager};
use crate::error::AppError;
use crate::model::{Credentials, Token, User, UserRecord};
use crate::service::RequestValidator;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct UserService;

impl UserService {
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRecord>(
            "SELECT id, email, hashed_password, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Create a user. A taken email is a Conflict.
    pub async fn register(pool: &SqlitePool, creds: &Credentials) -> Result<User, AppError> {
        let email = creds.email.trim();
        RequestValidator::email("email", email)?;
        RequestValidator::non_blank("password", &creds.password)?;

        if Self::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".into()));
        }
        let hashed = hash_password(&creds.password)?;
        let row = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (email, hashed_password, created_at) VALUES (?, ?, ?) \
             RETURNING id, email, hashed_password, created_at",
        )
        .bind(email)
        .bind(&hashed)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("Email already registered".into())
            }
            other => AppError::Db(other),
        })?;
        tracing::info!(user_id = row.id, "user registered");
        Ok(row.into())
    }

    /// Check credentials and issue an access token.
    pub async fn login(pool: &SqlitePool, tokens: &TokenManager, creds: &Credentials) -> Result<Token, AppError> {
        let email = creds.email.trim();
        let user = match Self::find_by_email(pool, email).await? {
            Some(u) if verify_password(&creds.password, &u.hashed_password) => u,
            _ => {
                tracing::warn!("login rejected");
                return Err(AppError::Unauthorized("Incorrect email or password".into()));
            }
        };
        let access_token = tokens.issue(user.id, &user.email)?;
        Ok(Token::bearer(access_token))
    }
}
