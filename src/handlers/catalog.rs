//! Product, supplier, and offer handlers. Writes require a bearer token.

use crate::error::AppError;
use crate::extractors::{ApiJson, ApiQuery, AuthUser};
use crate::model::{NewOffer, NewProduct, NewSupplier, Offer, ProductQuery, ProductView, Supplier};
use crate::service::{OfferService, ProductService, SupplierService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products, each listed once", body = [ProductView]),
        (status = 400, description = "Unparseable query"),
        (status = 422, description = "Unknown supplier tier")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductQuery>,
) -> Result<Json<Vec<ProductView>>, AppError> {
    let rows = ProductService::list(&state.pool, &query).await?;
    Ok(Json(rows))
}

/// GET /api/products/:id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, body = ProductView),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductView>, AppError> {
    Ok(Json(ProductService::get(&state.pool, id).await?))
}

/// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = NewProduct,
    security(("bearer" = [])),
    responses(
        (status = 200, body = ProductView),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "attributes lack thickness_mm or coverage_sqm")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<NewProduct>,
) -> Result<Json<ProductView>, AppError> {
    tracing::debug!(user_id = user.id, "create product");
    Ok(Json(ProductService::create(&state.pool, &body).await?))
}

/// POST /api/suppliers
#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = "suppliers",
    request_body = NewSupplier,
    security(("bearer" = [])),
    responses(
        (status = 200, body = Supplier),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Unknown tier")
    )
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<NewSupplier>,
) -> Result<Json<Supplier>, AppError> {
    tracing::debug!(user_id = user.id, "create supplier");
    Ok(Json(SupplierService::create(&state.pool, &body).await?))
}

/// POST /api/offers
#[utoipa::path(
    post,
    path = "/api/offers",
    tag = "offers",
    request_body = NewOffer,
    security(("bearer" = [])),
    responses(
        (status = 200, body = Offer),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product or supplier not found")
    )
)]
pub async fn create_offer(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<NewOffer>,
) -> Result<Json<Offer>, AppError> {
    tracing::debug!(user_id = user.id, "create offer");
    Ok(Json(OfferService::create(&state.pool, &body).await?))
}
