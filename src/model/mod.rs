//! Catalog entities, request bodies, and response shapes.

pub mod event;
pub mod offer;
pub mod product;
pub mod supplier;
pub mod user;

pub use event::*;
pub use offer::*;
pub use product::*;
pub use supplier::*;
pub use user::*;
