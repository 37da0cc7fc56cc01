use crate::common::*;

use actix_web::http::StatusCode;
use serde_json::json;

/// End-to-end validation tests via HTTP API.
/// Every request here is rejected before reaching the store, so no database is needed.

#[tokio::test]
async fn test_missing_task_name_is_required() {
    let app = test_service!(offline_state());

    let resp = post_task(&app, &json!({"isCompleted": false, "dueDate": FUTURE_DUE})).await;
    let body = assert_error(resp, StatusCode::BAD_REQUEST, 3).await;
    assert_eq!(body.error_description, "The parameter is required.");
    assert_eq!(body.parameter_name.as_deref(), Some("taskName"));
    assert_eq!(body.parameter_value.as_deref(), Some(""));
}

#[tokio::test]
async fn test_blank_task_name_is_required() {
    let app = test_service!(offline_state());

    let body = assert_error(
        post_task(&app, &task_payload("   ", false, FUTURE_DUE)).await,
        StatusCode::BAD_REQUEST,
        3,
    )
    .await;
    assert_eq!(body.parameter_value.as_deref(), Some("   "));
}

#[tokio::test]
async fn test_too_long_task_name() {
    let app = test_service!(offline_state());

    let name = "x".repeat(101);
    let body = assert_error(
        post_task(&app, &task_payload(&name, false, FUTURE_DUE)).await,
        StatusCode::BAD_REQUEST,
        2,
    )
    .await;
    assert_eq!(body.parameter_value.as_deref(), Some(name.as_str()));
}

#[tokio::test]
async fn test_wrongly_typed_completion_flag() {
    let app = test_service!(offline_state());

    let resp = post_task(
        &app,
        &json!({"taskName": "Typed", "isCompleted": "yes", "dueDate": FUTURE_DUE}),
    )
    .await;
    let body = assert_error(resp, StatusCode::BAD_REQUEST, 7).await;
    assert_eq!(body.parameter_name.as_deref(), Some("isCompleted"));
    assert_eq!(body.parameter_value.as_deref(), Some("yes"));
}

#[tokio::test]
async fn test_malformed_due_date() {
    let app = test_service!(offline_state());

    for due in ["2099-12-31", "31/12/2099 10:00:00", "2099-12-31T23:59:59Z", "2099-02-30T10:00:00"] {
        let body = assert_error(
            post_task(&app, &task_payload("Dated", false, due)).await,
            StatusCode::BAD_REQUEST,
            9,
        )
        .await;
        assert_eq!(body.parameter_name.as_deref(), Some("dueDate"));
        assert_eq!(body.parameter_value.as_deref(), Some(due));
    }
}

#[tokio::test]
async fn test_past_due_date() {
    let app = test_service!(offline_state());

    let body = assert_error(
        post_task(&app, &task_payload("Late", false, "2020-01-01T00:00:00")).await,
        StatusCode::BAD_REQUEST,
        8,
    )
    .await;
    assert_eq!(body.error_description, "Due date must be in future.");
    assert_eq!(body.parameter_value.as_deref(), Some("2020-01-01T00:00:00"));
}

#[tokio::test]
async fn test_first_violation_in_field_order_is_returned() {
    let app = test_service!(offline_state());

    let resp = post_task(&app, &json!({"isCompleted": 3, "dueDate": "soon"})).await;
    let body = assert_error(resp, StatusCode::BAD_REQUEST, 3).await;
    assert_eq!(body.parameter_name.as_deref(), Some("taskName"));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let app = test_service!(offline_state());

    let req = actix_web::test::TestRequest::post()
        .uri("/tasks")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"taskName\": ")
        .to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    let body = assert_error(resp, StatusCode::BAD_REQUEST, 7).await;
    assert!(body.parameter_name.is_none());
    assert!(body.parameter_value.is_none());
}

#[tokio::test]
async fn test_control_characters_in_task_name() {
    let app = test_service!(offline_state());

    let body = assert_error(
        post_task(&app, &task_payload("Nul\u{0}byte", false, FUTURE_DUE)).await,
        StatusCode::BAD_REQUEST,
        7,
    )
    .await;
    assert_eq!(body.parameter_name.as_deref(), Some("taskName"));
    assert_eq!(body.parameter_value.as_deref(), Some("Nul\u{0}byte"));
}

#[tokio::test]
async fn test_update_with_invalid_payload() {
    let app = test_service!(offline_state());

    let resp = put_task(&app, "1", &task_payload("Update", false, "yesterday")).await;
    assert_error(resp, StatusCode::BAD_REQUEST, 9).await;
}

#[tokio::test]
async fn test_non_integer_id_is_not_found() {
    let app = test_service!(offline_state());

    let body = assert_error(get(&app, "/tasks/abc").await, StatusCode::NOT_FOUND, 10).await;
    assert_eq!(body.parameter_name.as_deref(), Some("id"));
    assert_eq!(body.parameter_value.as_deref(), Some("abc"));

    let req = actix_web::test::TestRequest::delete().uri("/tasks/1.5").to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, 10).await;
}

#[tokio::test]
async fn test_unknown_list_parameters() {
    let app = test_service!(offline_state());

    let body = assert_error(get(&app, "/tasks?orderByDate=Sideways").await, StatusCode::BAD_REQUEST, 7).await;
    assert_eq!(body.parameter_name.as_deref(), Some("orderByDate"));
    assert_eq!(body.parameter_value.as_deref(), Some("Sideways"));

    // Enum values are case-sensitive.
    let body = assert_error(get(&app, "/tasks?taskStatus=completed").await, StatusCode::BAD_REQUEST, 7).await;
    assert_eq!(body.parameter_name.as_deref(), Some("taskStatus"));
}

#[tokio::test]
async fn test_undecodable_query_string() {
    let app = test_service!(offline_state());

    let resp = get(&app, "/tasks?orderByDate=Asc&orderByDate=Desc").await;
    let body = assert_error(resp, StatusCode::BAD_REQUEST, 7).await;
    assert!(body.parameter_name.is_none());
    assert!(body.parameter_value.is_none());
}

#[tokio::test]
async fn test_oversized_body() {
    let app = test_service!(offline_state());

    let padding = "x".repeat(task_api::handlers::MAX_BODY_BYTES);
    let payload = json!({
        "taskName": "Big",
        "isCompleted": false,
        "dueDate": FUTURE_DUE,
        "padding": padding
    });

    let resp = post_task(&app, &payload).await;
    let body = assert_error(resp, StatusCode::BAD_REQUEST, 7).await;
    assert!(body.parameter_name.is_none());

    let resp = put_task(&app, "1", &payload).await;
    assert_error(resp, StatusCode::BAD_REQUEST, 7).await;
}

#[tokio::test]
async fn test_store_failure_is_generic_conflict() {
    let app = test_service!(offline_state());

    let resp = get(&app, "/tasks/1").await;
    let body = assert_error(resp, StatusCode::CONFLICT, 0).await;
    assert!(body.parameter_name.is_none());
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_service!(offline_state());

    let resp = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert!(doc["paths"]["/tasks"].is_object());
    assert!(doc["paths"]["/tasks/{id}"].is_object());
}
