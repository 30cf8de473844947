//! Product listing, retrieval, and creation.

use crate::error::AppError;
use crate::model::{NewProduct, Product, ProductQuery, ProductView, SupplierTier};
use crate::service::RequestValidator;
use crate::sql::{select_product_by_id, select_products, ProductFilter};
use crate::units::{COVERAGE_KEY, THICKNESS_KEY};
use chrono::Utc;
use sqlx::sqlite::SqliteExecutor;
use sqlx::types::Json;
use sqlx::SqlitePool;

const REQUIRED_ATTRIBUTES: &[&str] = &[THICKNESS_KEY, COVERAGE_KEY];

/// Blank query values mean "no filter".
fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub struct ProductService;

impl ProductService {
    pub async fn list(pool: &SqlitePool, query: &ProductQuery) -> Result<Vec<ProductView>, AppError> {
        let supplier_tier = non_blank(&query.supplier_tier)
            .map(str::parse::<SupplierTier>)
            .transpose()?;
        let filter = ProductFilter {
            category: non_blank(&query.category),
            supplier_tier,
            supplier_tag: non_blank(&query.supplier_tag),
            skip: query.skip,
            limit: query.limit,
        };
        let mut q = select_products(&filter);
        tracing::debug!(sql = %q.sql(), filter = ?filter, unit_system = ?query.unit_system, "list products");
        let rows = q.build_query_as::<Product>().fetch_all(pool).await?;
        Ok(rows.into_iter().map(ProductView::from).collect())
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<ProductView, AppError> {
        let row = sqlx::query_as::<_, Product>(&select_product_by_id())
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        Ok(row.into())
    }

    /// Validate required dimension attributes, then insert.
    pub async fn create(pool: &SqlitePool, new: &NewProduct) -> Result<ProductView, AppError> {
        RequestValidator::non_blank("name", &new.name)?;
        RequestValidator::non_blank("category", &new.category)?;
        RequestValidator::require_keys(&new.attributes, REQUIRED_ATTRIBUTES)?;
        RequestValidator::require_numbers(&new.attributes, REQUIRED_ATTRIBUTES)?;

        let row = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, category, attributes, created_at) VALUES (?, ?, ?, ?) \
             RETURNING id, name, category, attributes, created_at",
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(Json(&new.attributes))
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        tracing::info!(product_id = row.id, category = %row.category, "product created");
        Ok(row.into())
    }

    pub async fn exists<'e, E>(executor: E, id: i64) -> Result<bool, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products WHERE id = ?")
            .bind(id)
            .fetch_one(executor)
            .await?;
        Ok(count > 0)
    }
}
