//! Request validation at the service boundary.

use crate::error::AppError;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern"))
}

pub struct RequestValidator;

impl RequestValidator {
    /// Every key in `keys` must be present in the attribute map.
    pub fn require_keys(attributes: &Map<String, Value>, keys: &[&str]) -> Result<(), AppError> {
        let missing: Vec<&str> = keys.iter().copied().filter(|k| !attributes.contains_key(*k)).collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(AppError::Validation(format!(
            "attributes must include {} (missing: {})",
            keys.join(" and "),
            missing.join(", ")
        )))
    }

    /// Present keys must hold JSON numbers.
    pub fn require_numbers(attributes: &Map<String, Value>, keys: &[&str]) -> Result<(), AppError> {
        for key in keys {
            if let Some(v) = attributes.get(*key) {
                if !v.is_number() {
                    return Err(AppError::Validation(format!("{} must be a number", key)));
                }
            }
        }
        Ok(())
    }

    pub fn non_blank(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} must not be empty", field)));
        }
        Ok(())
    }

    pub fn email(field: &str, value: &str) -> Result<(), AppError> {
        if !email_regex().is_match(value) {
            return Err(AppError::Validation(format!("{} must be a valid email", field)));
        }
        Ok(())
    }

    pub fn range(field: &str, value: i64, min: i64, max: i64) -> Result<(), AppError> {
        if value < min {
            return Err(AppError::Validation(format!("{} must be at least {}", field, min)));
        }
        if value > max {
            return Err(AppError::Validation(format!("{} must be at most {}", field, max)));
        }
        Ok(())
    }
}
