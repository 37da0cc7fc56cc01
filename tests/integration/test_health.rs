use crate::common::*;

use actix_web::http::StatusCode;

#[tokio::test]
async fn test_health_check() {
    let (_g, state) = setup_test_app().await;
    let app = test_service!(state);

    let resp = get(&app, "/health").await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "healthy");
    assert!(body["pool_size"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn test_readiness_reports_task_count() {
    let (_g, state) = setup_test_app().await;
    let app = test_service!(state);

    let resp = get(&app, "/ready").await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["tasks"], 0);
    assert_eq!(body["max_tasks"], 25);
    assert_eq!(body["accepting_tasks"], true);
}

#[tokio::test]
async fn test_readiness_at_capacity_is_ready_but_not_accepting() {
    let (_g, state) = setup_test_app_with_capacity(1).await;
    let app = test_service!(state);

    create_task_ok(&app, &open_task("Fills it")).await;

    let resp = get(&app, "/ready").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["tasks"], 1);
    assert_eq!(body["max_tasks"], 1);
    assert_eq!(body["accepting_tasks"], false);
}

#[tokio::test]
async fn test_health_check_degraded_without_database() {
    let app = test_service!(offline_state());

    let resp = get(&app, "/health").await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unreachable");
}

#[tokio::test]
async fn test_readiness_without_database() {
    let app = test_service!(offline_state());

    let resp = get(&app, "/ready").await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["status"], "not_ready");
    assert!(body["tasks"].is_null());
    assert_eq!(body["accepting_tasks"], false);
}
