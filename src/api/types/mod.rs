//! API request types for the Scalex REST API.
//!
//! Responses are returned as [`serde_json::Value`]; only the request side is
//! typed. Required fields are `Option`s filled through builder setters, and
//! each request's `validate()` names the first missing one.

pub mod company;
pub mod transaction;

// Re-export all types for convenience
pub use company::*;
pub use transaction::*;

use serde::Serialize;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};

/// A present, non-blank string.
pub(crate) fn require_str<'a>(value: &'a Option<String>, field: &'static str) -> ApiResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::MissingField(field)),
    }
}

pub(crate) fn require<'a, T>(value: &'a Option<T>, field: &'static str) -> ApiResult<&'a T> {
    value.as_ref().ok_or(ApiError::MissingField(field))
}

pub(crate) fn to_body<T: Serialize>(request: &T) -> ApiResult<Value> {
    serde_json::to_value(request)
        .map_err(|e| ApiError::InvalidParameter(format!("Failed to serialize request: {}", e)))
}
