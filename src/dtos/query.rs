use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::catalog::ErrorCode;

use super::ErrorResponse;

/// Query parameters of `GET /tasks`.
///
/// Values are kept as raw strings so an unknown value can be echoed back in the error body.
#[derive(Debug, Serialize, Deserialize, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQueryDto {
    /// Sort direction on the due date: `Asc` (default) or `Desc`.
    pub order_by_date: Option<String>,
    /// Completion filter: `Completed`, `NotCompleted` or `All` (default).
    pub task_status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderByDate {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatusFilter {
    Completed,
    NotCompleted,
    #[default]
    All,
}

impl TaskStatusFilter {
    /// The `is_completed` value to filter on, or `None` to keep every task.
    pub fn is_completed(self) -> Option<bool> {
        match self {
            TaskStatusFilter::Completed => Some(true),
            TaskStatusFilter::NotCompleted => Some(false),
            TaskStatusFilter::All => None,
        }
    }
}

/// Resolved listing parameters ready for the DB query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub order: OrderByDate,
    pub status: TaskStatusFilter,
}

impl ListQueryDto {
    /// Resolve raw query params, rejecting unknown values with code 7 naming the parameter.
    pub fn resolve(self) -> Result<ListFilter, ErrorResponse> {
        let order = match self.order_by_date.as_deref() {
            None | Some("Asc") => OrderByDate::Asc,
            Some("Desc") => OrderByDate::Desc,
            Some(other) => {
                return Err(ErrorResponse::for_parameter(
                    ErrorCode::InvalidValue,
                    "orderByDate",
                    other,
                ));
            }
        };

        let status = match self.task_status.as_deref() {
            None | Some("All") => TaskStatusFilter::All,
            Some("Completed") => TaskStatusFilter::Completed,
            Some("NotCompleted") => TaskStatusFilter::NotCompleted,
            Some(other) => {
                return Err(ErrorResponse::for_parameter(
                    ErrorCode::InvalidValue,
                    "taskStatus",
                    other,
                ));
            }
        };

        Ok(ListFilter { order, status })
    }
}
