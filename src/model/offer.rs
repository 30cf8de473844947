use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.into()
}

/// A supplier's price quote for a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Offer {
    pub id: i64,
    pub product_id: i64,
    pub supplier_id: i64,
    pub price: f64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewOffer {
    pub product_id: i64,
    pub supplier_id: i64,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}
