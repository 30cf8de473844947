use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use utoipa::ToSchema;

/// Supplier classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SupplierTier {
    #[serde(rename = "tier_1")]
    Tier1,
    #[serde(rename = "tier_2")]
    Tier2,
}

impl SupplierTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierTier::Tier1 => "tier_1",
            SupplierTier::Tier2 => "tier_2",
        }
    }
}

impl std::fmt::Display for SupplierTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SupplierTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tier_1" => Ok(SupplierTier::Tier1),
            "tier_2" => Ok(SupplierTier::Tier2),
            other => Err(AppError::Validation(format!(
                "invalid supplier tier: {} (expected tier_1 or tier_2)",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct SupplierRecord {
    pub id: i64,
    pub name: String,
    pub tier: String,
    pub tags: Json<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub tier: SupplierTier,
    pub tags: Vec<String>,
}

impl TryFrom<SupplierRecord> for Supplier {
    type Error = AppError;

    fn try_from(r: SupplierRecord) -> Result<Self, Self::Error> {
        Ok(Supplier {
            id: r.id,
            name: r.name,
            tier: r.tier.parse()?,
            tags: r.tags.0,
        })
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewSupplier {
    pub name: String,
    pub tier: SupplierTier,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tier_round_trips_through_wire_names() {
        assert_eq!(serde_json::to_value(SupplierTier::Tier1).unwrap(), json!("tier_1"));
        assert_eq!("tier_2".parse::<SupplierTier>().unwrap(), SupplierTier::Tier2);
        assert!(matches!("gold".parse::<SupplierTier>(), Err(AppError::Validation(_))));
    }

    #[test]
    fn new_supplier_defaults_tags() {
        let s: NewSupplier = serde_json::from_value(json!({ "name": "Acme", "tier": "tier_1" })).unwrap();
        assert!(s.tags.is_empty());
        assert!(serde_json::from_value::<NewSupplier>(json!({ "name": "Acme", "tier": "tier_3" })).is_err());
    }
}
