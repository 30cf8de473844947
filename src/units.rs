//! Metric to imperial conversion for product dimensions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub const MM_PER_INCH: f64 = 25.4;
pub const SQFT_PER_SQM: f64 = 10.7639;

pub const THICKNESS_KEY: &str = "thickness_mm";
pub const COVERAGE_KEY: &str = "coverage_sqm";

/// Unit system requested by a listing. Both field sets are always populated, so this
/// does not change the response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Metric dimensions with their imperial equivalents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub thickness_mm: f64,
    pub coverage_sqm: f64,
    pub thickness_in: f64,
    pub coverage_sqft: f64,
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn sqm_to_sqft(sqm: f64) -> f64 {
    sqm * SQFT_PER_SQM
}

/// Numeric attribute value, 0 when missing or not a number.
fn metric_value(attributes: &Map<String, Value>, key: &str) -> f64 {
    attributes.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn dimensions(attributes: &Map<String, Value>) -> Dimensions {
    let thickness_mm = metric_value(attributes, THICKNESS_KEY);
    let coverage_sqm = metric_value(attributes, COVERAGE_KEY);
    Dimensions {
        thickness_mm,
        coverage_sqm,
        thickness_in: mm_to_inches(thickness_mm),
        coverage_sqft: sqm_to_sqft(coverage_sqm),
    }
}
