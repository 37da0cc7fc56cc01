use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{Conn, models::NewTask};

use super::DbError;

/// Insert the demo tasks, unless the table already holds data.
///
/// Returns the number of inserted rows. Demo rows bypass payload validation, so their due
/// dates may lie in the past.
pub async fn seed_demo_tasks<'a>(conn: &mut Conn<'a>) -> Result<usize, DbError> {
    use crate::schema::task::dsl::task;

    let existing = task.count().get_result::<i64>(&mut *conn).await?;
    if existing > 0 {
        log::debug!("Skipping demo seed, {} tasks already stored", existing);
        return Ok(0);
    }

    let rows = demo_tasks();
    let inserted = diesel::insert_into(task)
        .values(&rows)
        .execute(conn)
        .await?;
    Ok(inserted)
}

fn demo_tasks() -> Vec<NewTask> {
    [
        ("Buy groceries", false, (2021, 2, 3)),
        ("Workout", true, (2021, 1, 1)),
        ("Paint fence", false, (2021, 3, 15)),
        ("Mow Lawn", false, (2021, 6, 11)),
    ]
    .into_iter()
    .filter_map(|(name, done, (year, month, day))| {
        let due_date = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        Some(NewTask {
            task_name: name.to_string(),
            is_completed: done,
            due_date,
        })
    })
    .collect()
}
