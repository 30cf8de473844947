//! Parallel writers against a file-backed database with a multi-connection pool.

use materials_catalog::model::{NewEvent, NewOffer, NewProduct, NewSupplier, SupplierTier, PRODUCT_VIEW};
use materials_catalog::service::{EventService, OfferService, ProductService, SupplierService};
use materials_catalog::{bootstrap, Settings};
use serde_json::json;

const WRITERS: usize = 100;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_events_and_offers_all_commit() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        database_url: format!("sqlite://{}", dir.path().join("catalog.db").display()),
        ..Settings::default()
    };
    let state = bootstrap(settings).await.unwrap();
    let pool = state.pool.clone();

    let product = ProductService::create(
        &pool,
        &NewProduct {
            name: "Premium Acoustic Panel".into(),
            category: "Acoustic".into(),
            attributes: json!({ "thickness_mm": 50.0, "coverage_sqm": 1.2 }).as_object().cloned().unwrap(),
        },
    )
    .await
    .unwrap();
    let supplier = SupplierService::create(
        &pool,
        &NewSupplier {
            name: "Acme Materials Corp".into(),
            tier: SupplierTier::Tier1,
            tags: vec![],
        },
    )
    .await
    .unwrap();

    let (product_id, supplier_id) = (product.id, supplier.id);
    let mut handles = Vec::with_capacity(WRITERS * 2);
    for i in 0..WRITERS {
        let events_pool = pool.clone();
        handles.push(tokio::spawn(async move {
            let event = NewEvent {
                event_type: PRODUCT_VIEW.into(),
                product_id,
                session_id: format!("session_{}", i),
            };
            EventService::record(&events_pool, &event).await.map(|_| ())
        }));
        let offers_pool = pool.clone();
        handles.push(tokio::spawn(async move {
            let offer = NewOffer {
                product_id,
                supplier_id,
                price: 100.0 + i as f64,
                currency: "USD".into(),
            };
            OfferService::create(&offers_pool, &offer).await.map(|_| ())
        }));
    }

    let mut failures = Vec::new();
    for handle in handles {
        if let Err(e) = handle.await.unwrap() {
            failures.push(e.to_string());
        }
    }
    assert!(failures.is_empty(), "{} writes failed, first: {:?}", failures.len(), failures.first());

    let (events,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events").fetch_one(&pool).await.unwrap();
    let (offers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM offers").fetch_one(&pool).await.unwrap();
    assert_eq!(events, WRITERS as i64);
    assert_eq!(offers, WRITERS as i64);
}
