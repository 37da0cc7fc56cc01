use crate::common::*;

use task_api::dtos::TaskListResult;

fn names(list: &TaskListResult) -> Vec<&str> {
    list.tasks.iter().map(|t| t.task_name.as_str()).collect()
}

#[tokio::test]
async fn test_empty_list() {
    let (_g, state) = setup_test_app().await;
    let app = test_service!(state);

    let list = list_tasks_ok(&app, "").await;
    assert!(list.tasks.is_empty());
}

#[tokio::test]
async fn test_seeded_tasks_sorted_ascending_by_default() {
    let (g, state) = setup_test_app().await;
    let mut conn = g.pool.get().await.unwrap();
    assert_eq!(task_api::db::seed_demo_tasks(&mut conn).await.unwrap(), 4);
    drop(conn);
    let app = test_service!(state);

    let list = list_tasks_ok(&app, "").await;
    assert_eq!(
        names(&list),
        vec!["Workout", "Buy groceries", "Paint fence", "Mow Lawn"]
    );
    assert_eq!(list.tasks[0].due_date, "2021-01-01T00:00:00");
    assert!(list.tasks[0].is_completed);

    let explicit = list_tasks_ok(&app, "?orderByDate=Asc&taskStatus=All").await;
    assert_eq!(names(&explicit), names(&list));
}

#[tokio::test]
async fn test_descending_order() {
    let (g, state) = setup_test_app().await;
    let mut conn = g.pool.get().await.unwrap();
    task_api::db::seed_demo_tasks(&mut conn).await.unwrap();
    drop(conn);
    let app = test_service!(state);

    create_task_ok(&app, &open_task("Far future")).await;

    let list = list_tasks_ok(&app, "?orderByDate=Desc").await;
    assert_eq!(
        names(&list),
        vec!["Far future", "Mow Lawn", "Paint fence", "Buy groceries", "Workout"]
    );
}

#[tokio::test]
async fn test_status_filters() {
    let (g, state) = setup_test_app().await;
    let mut conn = g.pool.get().await.unwrap();
    task_api::db::seed_demo_tasks(&mut conn).await.unwrap();
    drop(conn);
    let app = test_service!(state);

    let done = list_tasks_ok(&app, "?taskStatus=Completed").await;
    assert_eq!(names(&done), vec!["Workout"]);

    let open = list_tasks_ok(&app, "?taskStatus=NotCompleted&orderByDate=Desc").await;
    assert_eq!(names(&open), vec!["Mow Lawn", "Paint fence", "Buy groceries"]);
    assert!(open.tasks.iter().all(|t| !t.is_completed));
}

#[tokio::test]
async fn test_equal_due_dates_ordered_by_id() {
    let (_g, state) = setup_test_app().await;
    let app = test_service!(state);

    let a = create_task_ok(&app, &open_task("Tie A")).await;
    let b = create_task_ok(&app, &open_task("Tie B")).await;

    let asc = list_tasks_ok(&app, "?orderByDate=Asc").await;
    assert_eq!(asc.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a.id, b.id]);

    let desc = list_tasks_ok(&app, "?orderByDate=Desc").await;
    assert_eq!(desc.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b.id, a.id]);
}

#[tokio::test]
async fn test_seed_skips_non_empty_table() {
    let (g, state) = setup_test_app().await;
    let app = test_service!(state);
    create_task_ok(&app, &open_task("Already here")).await;

    let mut conn = g.pool.get().await.unwrap();
    assert_eq!(task_api::db::seed_demo_tasks(&mut conn).await.unwrap(), 0);
    assert_eq!(task_api::db::count_tasks(&mut conn).await.unwrap(), 1);
}
