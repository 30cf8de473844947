//! OpenAPI document for the `/api` surface.

use crate::handlers;
use crate::model::{
    Ack, Credentials, NewEvent, NewOffer, NewProduct, NewSupplier, Offer, ProductView, Supplier, SupplierTier, Token,
    TrendingProduct, User,
};
use crate::state::AppState;
use crate::units::UnitSystem;
use axum::{extract::State, Json};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::catalog::list_products,
        handlers::catalog::get_product,
        handlers::catalog::create_product,
        handlers::catalog::create_supplier,
        handlers::catalog::create_offer,
        handlers::analytics::record_event,
        handlers::analytics::trending,
    ),
    components(schemas(
        User,
        Credentials,
        Token,
        ProductView,
        NewProduct,
        UnitSystem,
        Supplier,
        NewSupplier,
        SupplierTier,
        Offer,
        NewOffer,
        NewEvent,
        Ack,
        TrendingProduct,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth"),
        (name = "products"),
        (name = "suppliers"),
        (name = "offers"),
        (name = "analytics")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
        );
    }
}

/// GET /api/openapi.json
pub async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    let mut doc = ApiDoc::openapi();
    doc.info.title = state.settings.app_name.clone();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    Json(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_api_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/register",
            "/api/login",
            "/api/products",
            "/api/products/{id}",
            "/api/suppliers",
            "/api/offers",
            "/api/events",
            "/api/insights/trending",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        let schemes = doc.components.unwrap().security_schemes;
        assert!(schemes.contains_key("bearer"));
    }
}
