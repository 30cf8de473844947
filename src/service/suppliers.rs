use crate::error::AppError;
use crate::model::{NewSupplier, Supplier, SupplierRecord};
use crate::service::RequestValidator;
use sqlx::types::Json;
use sqlx::SqlitePool;

pub struct SupplierService;

impl SupplierService {
    /// Insert a supplier. Names need not be unique.
    pub async fn create(pool: &SqlitePool, new: &NewSupplier) -> Result<Supplier, AppError> {
        RequestValidator::non_blank("name", &new.name)?;
        let row = sqlx::query_as::<_, SupplierRecord>(
            "INSERT INTO suppliers (name, tier, tags) VALUES (?, ?, ?) RETURNING id, name, tier, tags",
        )
        .bind(&new.name)
        .bind(new.tier.as_str())
        .bind(Json(&new.tags))
        .fetch_one(pool)
        .await?;
        tracing::info!(supplier_id = row.id, tier = %new.tier, "supplier created");
        row.try_into()
    }
}
