use chrono::NaiveDateTime;
use serde_json::Value;

use crate::catalog::ErrorCode;

use super::constants::{DUE_DATE_FIELD, IS_COMPLETED_FIELD, MAX_TASK_NAME_LEN, TASK_NAME_FIELD};
use super::date::parse_due_date;
use super::{PayloadField, ValidationError, ValidationResult};

/// A task payload that passed every rule, with the due date already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTask {
    pub task_name: String,
    pub is_completed: bool,
    pub due_date: NaiveDateTime,
}

/// Validates a raw task payload against the structural and business rules.
///
/// Every field is checked independently and all violations are collected, in the order
/// `taskName`, `isCompleted`, `dueDate`. `now` is the reference for the future-date rule.
pub fn validate_task_payload(raw: &Value, now: NaiveDateTime) -> ValidationResult<ValidatedTask> {
    let mut errors = Vec::new();

    let task_name = validate_task_name(raw.get(TASK_NAME_FIELD))
        .map_err(|code| errors.push(ValidationError::new(PayloadField::TaskName, code)))
        .ok();

    let is_completed = validate_is_completed(raw.get(IS_COMPLETED_FIELD))
        .map_err(|code| errors.push(ValidationError::new(PayloadField::IsCompleted, code)))
        .ok();

    let due_date = validate_due_date(raw.get(DUE_DATE_FIELD), now)
        .map_err(|code| errors.push(ValidationError::new(PayloadField::DueDate, code)))
        .ok();

    match (task_name, is_completed, due_date) {
        (Some(task_name), Some(is_completed), Some(due_date)) if errors.is_empty() => {
            Ok(ValidatedTask {
                task_name,
                is_completed,
                due_date,
            })
        }
        _ => Err(errors),
    }
}

fn validate_task_name(value: Option<&Value>) -> Result<String, ErrorCode> {
    match value {
        None | Some(Value::Null) => Err(ErrorCode::Required),
        Some(Value::String(name)) if name.trim().is_empty() => Err(ErrorCode::Required),
        // The store rejects NUL, and other control characters have no place in a name.
        Some(Value::String(name)) if name.chars().any(char::is_control) => {
            Err(ErrorCode::InvalidValue)
        }
        Some(Value::String(name)) if name.chars().count() > MAX_TASK_NAME_LEN => {
            Err(ErrorCode::TooLong)
        }
        Some(Value::String(name)) => Ok(name.clone()),
        Some(_) => Err(ErrorCode::InvalidValue),
    }
}

fn validate_is_completed(value: Option<&Value>) -> Result<bool, ErrorCode> {
    match value {
        None | Some(Value::Null) => Err(ErrorCode::Required),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(ErrorCode::InvalidValue),
    }
}

// Format is checked before the temporal rule; a malformed date never reports code 8.
fn validate_due_date(value: Option<&Value>, now: NaiveDateTime) -> Result<NaiveDateTime, ErrorCode> {
    let text = match value {
        None | Some(Value::Null) => return Err(ErrorCode::Required),
        Some(Value::String(text)) if text.is_empty() => return Err(ErrorCode::Required),
        Some(Value::String(text)) => text,
        Some(_) => return Err(ErrorCode::InvalidDateFormat),
    };

    let due_date = parse_due_date(text).ok_or(ErrorCode::InvalidDateFormat)?;
    if due_date < now {
        return Err(ErrorCode::DueDateInPast);
    }
    Ok(due_date)
}
