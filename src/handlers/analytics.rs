//! Event recording and trending insights. Neither requires a token.

use crate::error::AppError;
use crate::extractors::{ApiJson, ApiQuery};
use crate::model::{Ack, NewEvent, TrendingProduct, TrendingQuery};
use crate::service::EventService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /api/events
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "analytics",
    request_body = NewEvent,
    responses(
        (status = 200, body = Ack),
        (status = 404, description = "Product not found")
    )
)]
pub async fn record_event(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewEvent>,
) -> Result<Json<Ack>, AppError> {
    EventService::record(&state.pool, &body).await?;
    Ok(Json(Ack::event_recorded()))
}

/// GET /api/insights/trending
#[utoipa::path(
    get,
    path = "/api/insights/trending",
    tag = "analytics",
    params(TrendingQuery),
    responses(
        (status = 200, description = "Most viewed products in the window", body = [TrendingProduct]),
        (status = 422, description = "window_hours < 1 or limit outside 1..=100")
    )
)]
pub async fn trending(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TrendingQuery>,
) -> Result<Json<Vec<TrendingProduct>>, AppError> {
    Ok(Json(EventService::trending(&state.pool, &query).await?))
}
