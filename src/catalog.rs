//! Error catalog.
//!
//! Every error body returned by the API carries a small numeric code. This module maps
//! those codes to the human readable description sent alongside them.

use std::borrow::Cow;

/// Numeric error codes understood by API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// Unclassified internal failure.
    Internal = 0,
    /// The entity already exists (duplicate task name).
    Duplicate = 1,
    /// The parameter value is too long.
    TooLong = 2,
    /// The parameter is required.
    Required = 3,
    /// The configured task capacity has been reached.
    CapacityReached = 4,
    /// The entity could not be found (legacy code, kept for clients).
    EntityNotFound = 5,
    /// The parameter value is too small.
    TooSmall = 6,
    /// The parameter value is not valid.
    InvalidValue = 7,
    /// The due date lies in the past.
    DueDateInPast = 8,
    /// The due date does not follow the fixed format.
    InvalidDateFormat = 9,
    /// No task exists with the requested id.
    NotFound = 10,
}

impl ErrorCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn description(self) -> Cow<'static, str> {
        resolve(self.code()).0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Resolve a numeric code to its description.
///
/// Never fails: codes outside the catalog get a description echoing the raw value.
pub fn resolve(code: i32) -> (Cow<'static, str>, i32) {
    let message = match code {
        0 => "An unexpected error occurred. The request could not be completed.",
        1 => "The entity already exists.",
        2 => "The parameter value is too large.",
        3 => "The parameter is required.",
        4 => {
            "The maximum number of entities have been created. No further entities can be created at this time."
        }
        5 | 10 => "The entity could not be found.",
        6 => "The parameter value is too small.",
        7 => "The parameter value is not valid.",
        8 => "Due date must be in future.",
        9 => "Not a valid date, the format is yyyy-MM-ddTHH:mm:ss.",
        other => return (Cow::Owned(format!("Raw Error: {}", other)), other),
    };
    (Cow::Borrowed(message), code)
}
