//! Response composition for rejected payloads.
//!
//! Validation reports violations against model keys; clients expect the wire name of the
//! field together with the value they sent. This module bridges the two.

use serde_json::Value;

use crate::{
    dtos::ErrorResponse,
    error::ApiError,
    validation::ValidationError,
};

/// Derive the wire field name from a model key or JSON path.
///
/// A leading `$.` is stripped and the first character lowercased, so `TaskName` and
/// `$.taskName` both become `taskName`.
pub fn wire_field_name(key: &str) -> String {
    let key = key.strip_prefix("$.").unwrap_or(key);
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The value submitted for `wire_name`, rendered as text.
///
/// Strings are echoed as-is, other JSON values in compact form. Absent and `null` values
/// become an empty string.
pub fn raw_parameter_value(raw: &Value, wire_name: &str) -> String {
    match raw.get(wire_name) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Turn validation violations into error bodies, preserving their order.
pub fn compose_validation_errors(errors: &[ValidationError], raw: &Value) -> Vec<ErrorResponse> {
    errors
        .iter()
        .map(|error| {
            let name = wire_field_name(error.field.model_key());
            let value = raw_parameter_value(raw, &name);
            ErrorResponse::for_parameter(error.code, &name, value)
        })
        .collect()
}

/// Build the 400 for a rejected payload.
///
/// Every violation is logged; the first one in field order becomes the response body.
pub fn validation_error_response(errors: &[ValidationError], raw: &Value) -> ApiError {
    let bodies = compose_validation_errors(errors, raw);
    for body in &bodies {
        log::warn!("Payload validation failed: {}", body);
    }

    match bodies.into_iter().next() {
        Some(first) => ApiError::BadRequest(first),
        None => {
            log::error!("Validation rejected a payload without reporting a violation");
            ApiError::BadRequest(ErrorResponse::unattributed(
                crate::catalog::ErrorCode::InvalidValue,
            ))
        }
    }
}
