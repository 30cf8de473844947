//! Resource services: validate, talk to storage, shape responses.

mod events;
mod offers;
mod products;
mod suppliers;
mod users;
mod validation;

pub use events::{EventService, MAX_TRENDING_LIMIT};
pub use offers::OfferService;
pub use products::ProductService;
pub use suppliers::SupplierService;
pub use users::UserService;
pub use validation::RequestValidator;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = crate::store::connect(&crate::config::Settings::in_memory()).await.unwrap();
    crate::migration::apply_migrations(&pool).await.unwrap();
    pool
}
