mod migrations;
mod seed;
mod task_crud;
mod task_query;

pub(crate) type DbError = crate::error::TaskError;

pub use migrations::{MIGRATIONS, run_pending_migrations};
pub use seed::seed_demo_tasks;
pub use task_crud::{delete_task, insert_new_task, update_task};
pub use task_query::{count_tasks, find_task_by_id, list_tasks};
