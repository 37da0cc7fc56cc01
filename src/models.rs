use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::validation::ValidatedTask;

/// A task row as stored in the database.
#[derive(Identifiable, Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::task)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Task {
    pub id: i32,
    pub task_name: String,
    pub is_completed: bool,
    /// Stored without offset, in server local time.
    pub due_date: NaiveDateTime,
}

/// Column values for an insert, also reused as the changeset of a full update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::task)]
pub struct NewTask {
    pub task_name: String,
    pub is_completed: bool,
    pub due_date: NaiveDateTime,
}

impl From<&ValidatedTask> for NewTask {
    fn from(payload: &ValidatedTask) -> Self {
        Self {
            task_name: payload.task_name.clone(),
            is_completed: payload.is_completed,
            due_date: payload.due_date,
        }
    }
}
