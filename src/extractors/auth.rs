//! Authenticated caller from the `Authorization: Bearer <token>` header.

use crate::auth::extract_bearer_token;
use crate::error::AppError;
use crate::model::User;
use crate::service::UserService;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Extractor for a valid, unexpired token naming a user that still exists.
/// Rejects with 401 otherwise.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(extract_bearer_token)
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".into()))?;
        let claims = state.tokens.validate(token).map_err(|e| {
            tracing::warn!(error = %e, "bearer token rejected");
            e
        })?;
        // Email alone is not enough: a re-registered address gets a new id.
        let user = UserService::find_by_email(&state.pool, &claims.sub)
            .await?
            .filter(|u| u.id == claims.uid)
            .ok_or_else(|| AppError::Unauthorized("Could not validate credentials".into()))?;
        Ok(AuthUser(user.into()))
    }
}
