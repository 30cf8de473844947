//! HTTP handlers for auth, catalog writes and reads, and analytics.

pub mod analytics;
pub mod auth;
pub mod catalog;
pub use analytics::*;
pub use auth::*;
pub use catalog::*;
