//! # Seed Data
//!
//! Populates the catalog with sample users, products, suppliers, offers, and view events.
//!
//! ## Usage
//! ```bash
//! cargo run --bin seed
//! cargo run --bin seed -- --db sqlite://./data/catalog.db
//! ```
//!
//! Both users log in with password `secret`. Events are spread over the last 48 hours,
//! so a 24 hour trending window sees roughly half of them.

use chrono::{TimeDelta, Utc};
use materials_catalog::model::{Credentials, NewEvent, NewOffer, NewProduct, NewSupplier, SupplierTier, PRODUCT_VIEW};
use materials_catalog::service::{EventService, OfferService, ProductService, SupplierService, UserService};
use materials_catalog::{bootstrap, AppError, Settings};
use serde_json::{json, Value};
use std::env;

const USERS: &[&str] = &["admin@example.com", "user@example.com"];
const SEED_PASSWORD: &str = "secret";
const EVENT_COUNT: usize = 20;
const SESSIONS: usize = 5;

fn products() -> Vec<(&'static str, &'static str, Value)> {
    vec![
        (
            "Premium Acoustic Panel",
            "Acoustic",
            json!({ "thickness_mm": 50.0, "coverage_sqm": 1.2, "material": "Polyester", "color": "White" }),
        ),
        (
            "Basic Acoustic Foam",
            "Acoustic",
            json!({ "thickness_mm": 30.0, "coverage_sqm": 0.6, "material": "Polyurethane", "color": "Black" }),
        ),
        (
            "Fire Resistant Board",
            "Fireproofing",
            json!({ "thickness_mm": 12.5, "coverage_sqm": 2.4, "material": "Calcium Silicate", "fire_rating": "A1" }),
        ),
        (
            "Thermal Insulation Roll",
            "Insulation",
            json!({ "thickness_mm": 100.0, "coverage_sqm": 10.0, "material": "Glass Wool", "r_value": 3.5 }),
        ),
        (
            "Soundproofing Mat",
            "Acoustic",
            json!({ "thickness_mm": 25.0, "coverage_sqm": 5.0, "material": "Rubber", "weight_kg": 15.0 }),
        ),
        (
            "Firestop Sealant",
            "Fireproofing",
            json!({ "thickness_mm": 10.0, "coverage_sqm": 0.1, "material": "Intumescent", "tube_size": "300ml" }),
        ),
    ]
}

fn suppliers() -> Vec<NewSupplier> {
    vec![
        NewSupplier {
            name: "Acme Materials Corp".into(),
            tier: SupplierTier::Tier1,
            tags: vec!["high_performance".into(), "reliable".into()],
        },
        NewSupplier {
            name: "Budget Build Supplies".into(),
            tier: SupplierTier::Tier2,
            tags: vec!["economical".into()],
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("materials_catalog=info")),
        )
        .init();

    let mut settings = Settings::from_env()?;
    let args: Vec<String> = env::args().collect();
    if let Some(i) = args.iter().position(|a| a == "--db") {
        if let Some(url) = args.get(i + 1) {
            settings.database_url = url.clone();
        }
    }
    println!("Seeding {}", settings.database_url);

    let state = bootstrap(settings).await?;
    let pool = &state.pool;

    for email in USERS {
        let creds = Credentials {
            email: (*email).into(),
            password: SEED_PASSWORD.into(),
        };
        match UserService::register(pool, &creds).await {
            Ok(_) => {}
            Err(AppError::Conflict(_)) => {
                println!("{} already exists, skipping", email);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let mut product_ids = Vec::new();
    for (name, category, attributes) in products() {
        let new = NewProduct {
            name: name.into(),
            category: category.into(),
            attributes: attributes.as_object().cloned().unwrap_or_default(),
        };
        product_ids.push(ProductService::create(pool, &new).await?.id);
    }

    let mut supplier_ids = Vec::new();
    for new in suppliers() {
        supplier_ids.push(SupplierService::create(pool, &new).await?.id);
    }

    for (i, product_id) in product_ids.iter().enumerate() {
        let offer = NewOffer {
            product_id: *product_id,
            supplier_id: supplier_ids[i % supplier_ids.len()],
            price: 100.0 + (i as f64 * 20.0),
            currency: "USD".into(),
        };
        OfferService::create(pool, &offer).await?;
    }

    let now = Utc::now();
    for i in 0..EVENT_COUNT {
        // Deterministic spread: product cycles with a stride, age steps through 0..48h.
        let product_id = product_ids[(i * 7 + i / 3) % product_ids.len()];
        let event = NewEvent {
            event_type: PRODUCT_VIEW.into(),
            product_id,
            session_id: format!("session_{}", i % SESSIONS + 1),
        };
        let age = TimeDelta::minutes((i as i64 * 48 * 60) / EVENT_COUNT as i64);
        EventService::record_at(pool, &event, now - age).await?;
    }

    println!(
        "Seeded {} users, {} products, {} suppliers, {} offers, {} events",
        USERS.len(),
        product_ids.len(),
        supplier_ids.len(),
        product_ids.len(),
        EVENT_COUNT
    );
    Ok(())
}
