use actix_web::{HttpRequest, HttpResponse, http::header, web};
use chrono::Local;
use serde_json::Value;

use crate::{
    catalog::ErrorCode,
    db, dtos,
    error::{ApiError, ApiResult, TaskError},
    validation::{self, ValidatedTask},
};

use super::AppState;
use super::response::validation_error_response;

/// Route name of `/tasks/{id}`, used to build the `Location` of created tasks.
pub const TASK_DETAIL_ROUTE: &str = "task_detail";

/// Parse the `{id}` path segment. Anything that is not an `i32` cannot name a task.
fn parse_task_id(raw: &str) -> ApiResult<i32> {
    raw.parse::<i32>().map_err(|_| {
        log::info!("Rejected task id {:?}: not an integer", raw);
        ApiError::NotFound(dtos::ErrorResponse::for_parameter(
            ErrorCode::NotFound,
            "id",
            raw,
        ))
    })
}

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Unwrap the extracted body. Oversized or unreadable bodies become an unattributed code 7.
fn read_body(body: Result<web::Bytes, actix_web::Error>) -> ApiResult<web::Bytes> {
    body.map_err(|e| {
        log::warn!("Rejected request body: {}", e);
        ApiError::BadRequest(dtos::ErrorResponse::unattributed(ErrorCode::InvalidValue))
    })
}

/// Decode the body and run payload validation against the current local time.
fn parse_payload(body: &[u8]) -> ApiResult<ValidatedTask> {
    let raw: Value = serde_json::from_slice(body).map_err(|e| {
        log::warn!("Payload is not valid JSON: {}", e);
        ApiError::BadRequest(dtos::ErrorResponse::unattributed(ErrorCode::InvalidValue))
    })?;

    validation::validate_task_payload(&raw, Local::now().naive_local())
        .map_err(|errors| validation_error_response(&errors, &raw))
}

#[utoipa::path(
    get,
    path = "/tasks",
    summary = "List tasks",
    description = "Returns every task matching `taskStatus`, sorted on the due date in the `orderByDate` direction. Ties are broken by id. Unknown parameter values are rejected with code 7.",
    params(dtos::ListQueryDto),
    responses(
        (status = 200, description = "Matching tasks", body = dtos::TaskListResult),
        (status = 400, description = "Unknown orderByDate or taskStatus value", body = dtos::ErrorResponse),
    ),
    tag = "tasks"
)]
/// List tasks with ordering and completion filter
pub async fn list_task(
    state: web::Data<AppState>,
    query: web::Query<dtos::ListQueryDto>,
) -> actix_web::Result<HttpResponse> {
    let filter = query.into_inner().resolve().map_err(|body| {
        log::warn!("Rejected task listing: {}", body);
        ApiError::BadRequest(body)
    })?;

    let mut conn = state.conn().await.map_err(ApiError::from)?;
    let tasks = db::list_tasks(&mut conn, &filter)
        .await
        .map_err(ApiError::from)?;

    log::debug!("Listed {} tasks with {:?}", tasks.len(), filter);
    Ok(HttpResponse::Ok().json(dtos::TaskListResult::from(tasks)))
}

#[utoipa::path(
    get,
    path = "/tasks/{id}",
    summary = "Get a task",
    params(("id" = i32, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "The task", body = dtos::TaskResult),
        (status = 404, description = "No such task (code 10)", body = dtos::ErrorResponse),
    ),
    tag = "tasks"
)]
/// Get a single task by id
pub async fn get_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let task_id = parse_task_id(&task_id)?;

    let mut conn = state.conn().await.map_err(ApiError::from)?;
    let task = db::find_task_by_id(&mut conn, task_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::from(TaskError::TaskNotFound(task_id)))?;

    Ok(HttpResponse::Ok().json(dtos::TaskResult::from(task)))
}

#[utoipa::path(
    post,
    path = "/tasks",
    summary = "Create a task",
    description = "Validates the payload and stores a new task. The due date must not lie in the past. Creation is refused with 403 once the configured maximum number of tasks exists.",
    request_body(content = dtos::TaskCreatePayload, description = "The task to create"),
    responses(
        (status = 201, description = "Created; `Location` points at the new task", body = dtos::TaskResult),
        (status = 400, description = "Invalid payload (codes 2, 3, 7, 8, 9)", body = dtos::ErrorResponse),
        (status = 403, description = "Task capacity reached (code 4)", body = dtos::ErrorResponse),
        (status = 409, description = "Duplicate name (code 1) or unexpected failure (code 0)", body = dtos::ErrorResponse),
    ),
    tag = "tasks"
)]
/// Create a new task
pub async fn add_task(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let payload = parse_payload(&read_body(body)?)?;

    let mut conn = state.conn().await.map_err(ApiError::from)?;
    let created = db::insert_new_task(&mut conn, &payload, state.config.tasks.max_tasks)
        .await
        .map_err(ApiError::from)?;

    log::info!("Created task {} ({:?})", created.id, created.task_name);

    let location = req
        .url_for(TASK_DETAIL_ROUTE, [created.id.to_string()])
        .map(|url| url.to_string())
        .unwrap_or_else(|_| format!("/tasks/{}", created.id));

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(dtos::TaskResult::from(created)))
}

#[utoipa::path(
    put,
    path = "/tasks/{id}",
    summary = "Update a task",
    description = "Overwrites every field of an existing task. The payload is validated like on creation.",
    params(("id" = i32, Path, description = "Task identifier")),
    request_body(content = dtos::TaskCreatePayload, description = "New values for the task"),
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid payload", body = dtos::ErrorResponse),
        (status = 404, description = "No such task (code 10)", body = dtos::ErrorResponse),
        (status = 409, description = "Another task already has this name (code 1)", body = dtos::ErrorResponse),
    ),
    tag = "tasks"
)]
/// Replace a task's fields
pub async fn update_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    body: Result<web::Bytes, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let task_id = parse_task_id(&task_id)?;
    let payload = parse_payload(&read_body(body)?)?;

    let mut conn = state.conn().await.map_err(ApiError::from)?;
    db::update_task(&mut conn, task_id, &payload)
        .await
        .map_err(ApiError::from)?;

    log::info!("Updated task {}", task_id);
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    summary = "Delete a task",
    params(("id" = i32, Path, description = "Task identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such task (code 10)", body = dtos::ErrorResponse),
    ),
    tag = "tasks"
)]
/// Delete a task
pub async fn delete_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let task_id = parse_task_id(&task_id)?;

    let mut conn = state.conn().await.map_err(ApiError::from)?;
    db::delete_task(&mut conn, task_id)
        .await
        .map_err(ApiError::from)?;

    log::info!("Deleted task {}", task_id);
    Ok(HttpResponse::NoContent().finish())
}
