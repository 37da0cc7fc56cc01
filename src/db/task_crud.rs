use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::{
    Conn,
    models::{NewTask, Task},
    validation::ValidatedTask,
};

use super::DbError;

/// Reclassify a unique violation on the task name as a duplicate; keep anything else.
fn classify_write_error(err: DieselError, submitted_name: &str) -> DbError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            log::debug!(
                "Unique violation on constraint {:?}: {}",
                info.constraint_name(),
                info.message()
            );
            DbError::DuplicateName(submitted_name.to_string())
        }
        other => DbError::Database(other),
    }
}

/// Insert a new task unless `max_tasks` tasks exist already.
///
/// The count and the insert run in one transaction holding a lock that conflicts with
/// itself, so concurrent creations are serialized and cannot overshoot the limit.
/// If the future is dropped mid-transaction the connection is reported broken and the
/// pool discards it, releasing the lock with the session.
pub async fn insert_new_task<'a>(
    conn: &mut Conn<'a>,
    payload: &ValidatedTask,
    max_tasks: i64,
) -> Result<Task, DbError> {
    use crate::schema::task::dsl::task;

    let new_task = NewTask::from(payload);

    conn.transaction::<Task, DbError, _>(|conn| {
        async move {
            diesel::sql_query("LOCK TABLE task IN SHARE ROW EXCLUSIVE MODE")
                .execute(&mut *conn)
                .await?;

            let total = task.count().get_result::<i64>(&mut *conn).await?;
            if total >= max_tasks {
                return Err(DbError::CapacityReached { max: max_tasks });
            }

            let created = diesel::insert_into(task)
                .values(&new_task)
                .returning(Task::as_returning())
                .get_result(&mut *conn)
                .await
                .map_err(|e| classify_write_error(e, &new_task.task_name))?;

            Ok(created)
        }
        .scope_boxed()
    })
    .await
}

/// Overwrite every mutable field of an existing task.
pub async fn update_task<'a>(
    conn: &mut Conn<'a>,
    task_id: i32,
    payload: &ValidatedTask,
) -> Result<Task, DbError> {
    use crate::schema::task::dsl::task;

    let changes = NewTask::from(payload);

    diesel::update(task.find(task_id))
        .set(&changes)
        .returning(Task::as_returning())
        .get_result(conn)
        .await
        .optional()
        .map_err(|e| classify_write_error(e, &changes.task_name))?
        .ok_or(DbError::TaskNotFound(task_id))
}

/// Permanently remove a task.
pub async fn delete_task<'a>(conn: &mut Conn<'a>, task_id: i32) -> Result<(), DbError> {
    use crate::schema::task::dsl::task;

    let deleted = diesel::delete(task.find(task_id)).execute(conn).await?;
    if deleted == 0 {
        return Err(DbError::TaskNotFound(task_id));
    }
    Ok(())
}
