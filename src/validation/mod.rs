//! Input validation for task payloads.
//!
//! Validation runs on the raw JSON document rather than on a deserialized struct, so a
//! payload with wrongly typed fields still produces field-level error codes instead of a
//! generic deserialization failure.

mod constants;
mod date;
mod task;

use crate::catalog::ErrorCode;

pub use constants::*;
pub use date::{format_due_date, parse_due_date};
pub use task::{ValidatedTask, validate_task_payload};

/// Fields of the task payload, named as the model declares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadField {
    TaskName,
    IsCompleted,
    DueDate,
}

impl PayloadField {
    /// Model-side key of the field. The wire name is derived from it by the response layer.
    pub fn model_key(self) -> &'static str {
        match self {
            PayloadField::TaskName => "TaskName",
            PayloadField::IsCompleted => "IsCompleted",
            PayloadField::DueDate => "DueDate",
        }
    }
}

impl std::fmt::Display for PayloadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.model_key())
    }
}

/// A single rule violation: which field failed and the catalog code describing why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: PayloadField,
    pub code: ErrorCode,
}

impl ValidationError {
    pub fn new(field: PayloadField, code: ErrorCode) -> Self {
        Self { field, code }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.code.description(), self.code)
    }
}

/// Result of validation: the typed payload, or every violation found, in field order.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;
