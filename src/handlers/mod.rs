//! HTTP handlers for the task API.
//!
//! Shared by the server binary and the integration tests through [`configure_routes`].

mod health;
pub mod response;
mod task;

use std::sync::Arc;

use actix_web::{HttpResponse, web};
use utoipa::OpenApi;

use crate::{
    DbPool,
    catalog::ErrorCode,
    config::Config,
    dtos,
    error::{ApiError, TaskError},
};

pub use health::{health_check, readiness_check};
pub use task::{MAX_BODY_BYTES, TASK_DETAIL_ROUTE, add_task, delete_task, get_task, list_task, update_task};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<Config>,
}

impl AppState {
    /// Get a database connection from the pool. Acquisition failures are not retried.
    pub async fn conn(&self) -> Result<crate::Conn<'_>, TaskError> {
        self.pool.get().await.map_err(|e| {
            log::error!("Failed to acquire database connection: {}", e);
            TaskError::Pool(e.to_string())
        })
    }
}

/// Health check response showing service and database status.
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Overall service status: "ok" or "degraded"
    pub status: String,
    /// Database status: "healthy", "unhealthy" (query failed) or "unreachable" (no connection)
    pub database: String,
    /// Total number of connections in the pool
    pub pool_size: u32,
    /// Number of idle (available) connections in the pool
    pub pool_idle: u32,
}

/// Readiness report: whether the task table can be read, and how full it is.
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct ReadinessResponse {
    /// "ready" or "not_ready"
    pub status: String,
    /// Number of stored tasks, when it could be read
    pub tasks: Option<i64>,
    /// Configured capacity
    pub max_tasks: i64,
    /// Whether a create would currently pass the capacity check
    pub accepting_tasks: bool,
    pub reason: Option<String>,
}

// =============================================================================
// OpenAPI Documentation
// =============================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness_check,
        task::list_task,
        task::get_task,
        task::add_task,
        task::update_task,
        task::delete_task,
    ),
    components(schemas(
        HealthResponse,
        ReadinessResponse,
        dtos::TaskCreatePayload,
        dtos::TaskResult,
        dtos::TaskListResult,
        dtos::ErrorResponse,
    )),
    tags(
        (name = "health", description = "Liveness and readiness probes."),
        (name = "tasks", description = "Task CRUD. Every failure returns an ErrorResponse carrying a numeric error code."),
    ),
    info(
        title = "Task API",
        version = "0.1.0",
        description = "CRUD service for named tasks with a due date and a completion flag.",
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Undecodable query strings get an ErrorResponse like any other rejected input.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        log::warn!("Rejected query string {:?}: {}", req.query_string(), err);
        ApiError::BadRequest(dtos::ErrorResponse::unattributed(ErrorCode::InvalidValue)).into()
    })
}

// =============================================================================
// Route Configuration
// =============================================================================

/// Configure all routes for the application.
/// This can be used by both the main application and integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check))
        .route("/tasks", web::get().to(list_task))
        .route("/tasks", web::post().to(add_task))
        .service(
            web::resource("/tasks/{id}")
                .name(TASK_DETAIL_ROUTE)
                .route(web::get().to(get_task))
                .route(web::put().to(update_task))
                .route(web::delete().to(delete_task)),
        )
        .route("/api-docs/openapi.json", web::get().to(openapi_json));
}
