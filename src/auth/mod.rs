//! Password hashing and bearer tokens.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::{extract_bearer_token, Claims, TokenManager};
