use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const PRODUCT_VIEW: &str = "product_view";

fn default_event_type() -> String {
    PRODUCT_VIEW.into()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub event_type: String,
    pub product_id: i64,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/events`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewEvent {
    #[serde(default = "default_event_type")]
    pub event_type: String,
    pub product_id: i64,
    pub session_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn event_recorded() -> Self {
        Ack {
            message: "Event recorded successfully".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct TrendingProduct {
    pub product_id: i64,
    pub product_name: String,
    pub view_count: i64,
    pub category: String,
}

fn default_window_hours() -> i64 {
    24
}

fn default_trending_limit() -> i64 {
    5
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendingQuery {
    /// Trailing window in hours, at least 1.
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,
    /// Maximum rows, 1 to 100.
    #[serde(default = "default_trending_limit")]
    pub limit: i64,
}

impl Default for TrendingQuery {
    fn default() -> Self {
        TrendingQuery {
            window_hours: default_window_hours(),
            limit: default_trending_limit(),
        }
    }
}
