use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{
    Conn,
    dtos::{ListFilter, OrderByDate},
    models::Task,
};

use super::DbError;

/// List tasks matching the completion filter, sorted by due date.
///
/// Ties on the due date are broken by id in the same direction, so the order is stable.
pub async fn list_tasks<'a>(conn: &mut Conn<'a>, filter: &ListFilter) -> Result<Vec<Task>, DbError> {
    use crate::schema::task::dsl::*;

    let mut query = task.into_boxed();

    if let Some(done) = filter.status.is_completed() {
        query = query.filter(is_completed.eq(done));
    }

    query = match filter.order {
        OrderByDate::Asc => query.order((due_date.asc(), id.asc())),
        OrderByDate::Desc => query.order((due_date.desc(), id.desc())),
    };

    let tasks = query.load::<Task>(conn).await?;
    Ok(tasks)
}

pub async fn find_task_by_id<'a>(conn: &mut Conn<'a>, task_id: i32) -> Result<Option<Task>, DbError> {
    use crate::schema::task::dsl::task;

    let found = task.find(task_id).first::<Task>(conn).await.optional()?;
    Ok(found)
}

/// Total number of stored tasks.
pub async fn count_tasks<'a>(conn: &mut Conn<'a>) -> Result<i64, DbError> {
    use crate::schema::task::dsl::task;

    let total = task.count().get_result::<i64>(conn).await?;
    Ok(total)
}
