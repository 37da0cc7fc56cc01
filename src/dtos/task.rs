use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{models::Task, validation::format_due_date};

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
///
/// Requests are validated from the raw JSON document, so this type documents the expected
/// shape and is used by clients to build requests.
///
/// ## Example
/// ```json
/// {"taskName": "Buy groceries", "isCompleted": false, "dueDate": "2030-02-03T18:00:00"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreatePayload {
    /// Unique task name, 1 to 100 characters.
    pub task_name: String,
    /// Whether the task is done.
    pub is_completed: bool,
    /// Due date as `yyyy-MM-ddTHH:mm:ss`, no offset. Must not be in the past.
    #[schema(example = "2030-02-03T18:00:00")]
    pub due_date: String,
}

/// Public representation of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    /// Server-assigned identifier.
    pub id: i32,
    pub task_name: String,
    pub is_completed: bool,
    /// Due date as `yyyy-MM-ddTHH:mm:ss`.
    pub due_date: String,
}

impl From<Task> for TaskResult {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            due_date: format_due_date(&task.due_date),
            task_name: task.task_name,
            is_completed: task.is_completed,
        }
    }
}

/// Body of `GET /tasks`: every matching task under the `tasks` key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskListResult {
    pub tasks: Vec<TaskResult>,
}

impl From<Vec<Task>> for TaskListResult {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(TaskResult::from).collect(),
        }
    }
}
