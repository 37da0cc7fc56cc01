use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{self, ErrorCode};

/// Error body returned by every failing endpoint.
///
/// `parameterName` and `parameterValue` identify the offending input when there is one;
/// both are `null` for failures that are not tied to a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Stable numeric error code.
    pub error_number: i32,
    /// Human readable description of the code.
    pub error_description: String,
    /// Offending field or parameter, in wire format.
    pub parameter_name: Option<String>,
    /// Offending value exactly as submitted.
    pub parameter_value: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, parameter_name: Option<&str>, parameter_value: Option<String>) -> Self {
        let (description, number) = catalog::resolve(code.code());
        Self {
            error_number: number,
            error_description: description.into_owned(),
            parameter_name: parameter_name.map(str::to_owned),
            parameter_value,
        }
    }

    /// An error tied to a named parameter and its submitted value.
    pub fn for_parameter(code: ErrorCode, name: &str, value: impl Into<String>) -> Self {
        Self::new(code, Some(name), Some(value.into()))
    }

    /// An error without field attribution.
    pub fn unattributed(code: ErrorCode) -> Self {
        Self::new(code, None, None)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.error_number, self.error_description)?;
        if let Some(name) = &self.parameter_name {
            write!(
                f,
                " ({}={:?})",
                name,
                self.parameter_value.as_deref().unwrap_or_default()
            )?;
        }
        Ok(())
    }
}
