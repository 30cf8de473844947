use crate::error::AppError;
use crate::model::{NewOffer, Offer};
use crate::service::ProductService;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct OfferService;

impl OfferService {
    /// Single-statement insert guarded by the reference checks; nothing is written on NotFound.
    pub async fn create(pool: &SqlitePool, new: &NewOffer) -> Result<Offer, AppError> {
        let offer = sqlx::query_as::<_, Offer>(
            "INSERT INTO offers (product_id, supplier_id, price, currency, created_at) \
             SELECT ?1, ?2, ?3, ?4, ?5 \
             WHERE EXISTS (SELECT 1 FROM products WHERE id = ?1) \
             AND EXISTS (SELECT 1 FROM suppliers WHERE id = ?2) \
             RETURNING id, product_id, supplier_id, price, currency, created_at",
        )
        .bind(new.product_id)
        .bind(new.supplier_id)
        .bind(new.price)
        .bind(&new.currency)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await?;
        let Some(offer) = offer else {
            if !ProductService::exists(pool, new.product_id).await? {
                return Err(AppError::NotFound("Product not found".into()));
            }
            return Err(AppError::NotFound("Supplier not found".into()));
        };
        tracing::info!(offer_id = offer.id, product_id = offer.product_id, supplier_id = offer.supplier_id, "offer created");
        Ok(offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewProduct, NewSupplier, SupplierTier};
    use crate::service::{test_pool, SupplierService};

    async fn count(pool: &SqlitePool) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM offers").fetch_one(pool).await.unwrap();
        count
    }
    use serde_json::json;

    async fn seed(pool: &SqlitePool) -> (i64, i64) {
        let product = ProductService::create(
            pool,
            &NewProduct {
                name: "Fire Resistant Board".into(),
                category: "Fireproofing".into(),
                attributes: json!({ "thickness_mm": 12.5, "coverage_sqm": 2.4 }).as_object().cloned().unwrap(),
            },
        )
        .await
        .unwrap();
        let supplier = SupplierService::create(
            pool,
            &NewSupplier {
                name: "Budget Build Supplies".into(),
                tier: SupplierTier::Tier2,
                tags: vec![],
            },
        )
        .await
        .unwrap();
        (product.id, supplier.id)
    }

    #[tokio::test]
    async fn creates_offer_for_existing_refs() {
        let pool = test_pool().await;
        let (product_id, supplier_id) = seed(&pool).await;
        let offer = OfferService::create(
            &pool,
            &NewOffer {
                product_id,
                supplier_id,
                price: -3.5,
                currency: "EUR".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(offer.price, -3.5);
        assert_eq!(offer.currency, "EUR");
        assert_eq!(count(&pool).await, 1);
    }

    #[tokio::test]
    async fn missing_product_persists_nothing() {
        let pool = test_pool().await;
        let (_, supplier_id) = seed(&pool).await;
        let err = OfferService::create(
            &pool,
            &NewOffer {
                product_id: 999,
                supplier_id,
                price: 10.0,
                currency: "USD".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("Product")));
        assert_eq!(count(&pool).await, 0);
    }

    #[tokio::test]
    async fn missing_supplier_persists_nothing() {
        let pool = test_pool().await;
        let (product_id, _) = seed(&pool).await;
        let err = OfferService::create(
            &pool,
            &NewOffer {
                product_id,
                supplier_id: 999,
                price: 10.0,
                currency: "USD".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("Supplier")));
        assert_eq!(count(&pool).await, 0);
    }
}
