//! View events and the trending aggregation.

use crate::error::AppError;
use crate::model::{Event, NewEvent, TrendingProduct, TrendingQuery};
use crate::service::RequestValidator;
use crate::sql::SELECT_TRENDING;
use chrono::{DateTime, TimeDelta, Utc};
use sqlx::SqlitePool;

pub const MAX_TRENDING_LIMIT: i64 = 100;

pub struct EventService;

impl EventService {
    pub async fn record(pool: &SqlitePool, new: &NewEvent) -> Result<Event, AppError> {
        Self::record_at(pool, new, Utc::now()).await
    }

    /// Record an event with an explicit timestamp (seeding, backfills).
    pub async fn record_at(pool: &SqlitePool, new: &NewEvent, timestamp: DateTime<Utc>) -> Result<Event, AppError> {
        RequestValidator::non_blank("event_type", &new.event_type)?;
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (event_type, product_id, session_id, timestamp) \
             SELECT ?1, ?2, ?3, ?4 WHERE EXISTS (SELECT 1 FROM products WHERE id = ?2) \
             RETURNING id, event_type, product_id, session_id, timestamp",
        )
        .bind(&new.event_type)
        .bind(new.product_id)
        .bind(&new.session_id)
        .bind(timestamp)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        tracing::debug!(event_id = event.id, product_id = event.product_id, event_type = %event.event_type, "event recorded");
        Ok(event)
    }

    /// Products ranked by event count within the trailing window, ties by product id.
    pub async fn trending(pool: &SqlitePool, query: &TrendingQuery) -> Result<Vec<TrendingProduct>, AppError> {
        RequestValidator::range("window_hours", query.window_hours, 1, i64::MAX)?;
        RequestValidator::range("limit", query.limit, 1, MAX_TRENDING_LIMIT)?;
        let cutoff = window_start(Utc::now(), query.window_hours);
        let rows = sqlx::query_as::<_, TrendingProduct>(SELECT_TRENDING)
            .bind(cutoff)
            .bind(query.limit)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}

/// `now - hours`, saturating at the earliest representable instant.
fn window_start(now: DateTime<Utc>, hours: i64) -> DateTime<Utc> {
    TimeDelta::try_hours(hours)
        .and_then(|d| now.checked_sub_signed(d))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;
    use crate::service::{test_pool, ProductService};
    use serde_json::json;

    async fn product(pool: &SqlitePool, name: &str) -> i64 {
        ProductService::create(
            pool,
            &NewProduct {
                name: name.into(),
                category: "Acoustic".into(),
                attributes: json!({ "thickness_mm": 30.0, "coverage_sqm": 0.6 }).as_object().cloned().unwrap(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn view(product_id: i64, session: &str) -> NewEvent {
        NewEvent {
            event_type: "product_view".into(),
            product_id,
            session_id: session.into(),
        }
    }

    #[tokio::test]
    async fn ranks_by_count() {
        let pool = test_pool().await;
        let a = product(&pool, "A").await;
        let b = product(&pool, "B").await;
        for s in ["s1", "s2", "s3"] {
            EventService::record(&pool, &view(a, s)).await.unwrap();
        }
        EventService::record(&pool, &view(b, "s1")).await.unwrap();

        let rows = EventService::trending(&pool, &TrendingQuery::default()).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_id, a);
        assert_eq!(rows[0].view_count, 3);
        assert_eq!(rows[0].product_name, "A");
        assert_eq!(rows[1].product_id, b);
        assert_eq!(rows[1].view_count, 1);
    }

    #[tokio::test]
    async fn ties_break_by_product_id() {
        let pool = test_pool().await;
        let a = product(&pool, "A").await;
        let b = product(&pool, "B").await;
        EventService::record(&pool, &view(b, "s1")).await.unwrap();
        EventService::record(&pool, &view(a, "s1")).await.unwrap();

        let rows = EventService::trending(&pool, &TrendingQuery::default()).await.unwrap();
        assert_eq!(rows.iter().map(|r| r.product_id).collect::<Vec<_>>(), vec![a, b]);
    }

    #[tokio::test]
    async fn window_excludes_old_events_and_limit_truncates() {
        let pool = test_pool().await;
        let a = product(&pool, "A").await;
        let b = product(&pool, "B").await;
        let c = product(&pool, "C").await;
        let old = Utc::now() - TimeDelta::hours(30);
        for s in ["s1", "s2", "s3", "s4"] {
            EventService::record_at(&pool, &view(c, s), old).await.unwrap();
        }
        EventService::record(&pool, &view(a, "s1")).await.unwrap();
        EventService::record(&pool, &view(a, "s2")).await.unwrap();
        EventService::record(&pool, &view(b, "s1")).await.unwrap();

        let rows = EventService::trending(&pool, &TrendingQuery { window_hours: 24, limit: 1 }).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_id, a);

        let wide = EventService::trending(&pool, &TrendingQuery { window_hours: 48, limit: 5 }).await.unwrap();
        assert_eq!(wide[0].product_id, c);
        assert_eq!(wide[0].view_count, 4);
    }

    #[tokio::test]
    async fn unknown_product_not_found() {
        let pool = test_pool().await;
        let err = EventService::record(&pool, &view(77, "s1")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let rows = EventService::trending(&pool, &TrendingQuery::default()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn rejects_out_of_range_parameters() {
        let pool = test_pool().await;
        for q in [
            TrendingQuery { window_hours: 0, limit: 5 },
            TrendingQuery { window_hours: 24, limit: 0 },
            TrendingQuery { window_hours: 24, limit: 101 },
        ] {
            assert!(matches!(EventService::trending(&pool, &q).await, Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn huge_window_saturates() {
        let now = Utc::now();
        assert_eq!(window_start(now, i64::MAX), DateTime::<Utc>::MIN_UTC);
        assert_eq!(window_start(now, 1), now - TimeDelta::hours(1));
    }
}
