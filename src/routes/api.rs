//! `/api` routes. Mount with `Router::nest("/api", api_routes(state))`.

use crate::handlers::{
    create_offer, create_product, create_supplier, get_product, list_products, login, record_event, register,
    trending,
};
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/products", get(list_products).post(create_product))
        .route("/products/:id", get(get_product))
        .route("/suppliers", post(create_supplier))
        .route("/offers", post(create_offer))
        .route("/events", post(record_event))
        .route("/insights/trending", get(trending))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
