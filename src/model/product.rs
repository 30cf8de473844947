use crate::units::{self, UnitSystem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub attributes: Json<Map<String, Value>>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/products`. `attributes` must carry `thickness_mm` and `coverage_sqm`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

/// Product as returned by the API, with metric and imperial dimensions.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub thickness_mm: f64,
    pub coverage_sqm: f64,
    pub thickness_in: f64,
    pub coverage_sqft: f64,
}

impl From<Product> for ProductView {
    fn from(p: Product) -> Self {
        let attributes = p.attributes.0;
        let d = units::dimensions(&attributes);
        ProductView {
            id: p.id,
            name: p.name,
            category: p.category,
            attributes,
            created_at: p.created_at,
            thickness_mm: d.thickness_mm,
            coverage_sqm: d.coverage_sqm,
            thickness_in: d.thickness_in,
            coverage_sqft: d.coverage_sqft,
        }
    }
}

fn default_limit() -> u32 {
    100
}

/// Query string of `GET /api/products`. Blank strings are treated as absent.
#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    pub category: Option<String>,
    /// `tier_1` or `tier_2`.
    pub supplier_tier: Option<String>,
    pub supplier_tag: Option<String>,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ProductQuery {
    fn default() -> Self {
        ProductQuery {
            category: None,
            supplier_tier: None,
            supplier_tag: None,
            unit_system: UnitSystem::Metric,
            skip: 0,
            limit: default_limit(),
        }
    }
}
