//! Registration and login handlers.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::{Credentials, Token, User};
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /api/register
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Malformed email or empty password")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<Credentials>,
) -> Result<Json<User>, AppError> {
    let user = UserService::register(&state.pool, &creds).await?;
    Ok(Json(user))
}

/// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Bearer token", body = Token),
        (status = 401, description = "Incorrect email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<Credentials>,
) -> Result<Json<Token>, AppError> {
    let token = UserService::login(&state.pool, &state.tokens, &creds).await?;
    Ok(Json(token))
}
