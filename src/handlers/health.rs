use actix_web::{HttpResponse, web};
use diesel_async::RunQueryDsl;

use crate::db;

use super::{AppState, HealthResponse, ReadinessResponse};

#[utoipa::path(
    get,
    path = "/health",
    summary = "Liveness probe",
    description = "Runs a trivial query on a pooled connection and reports pool usage. 503 when the query cannot run.",
    responses(
        (status = 200, description = "Database answered", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match state.conn().await {
        Ok(mut conn) => match diesel::sql_query("SELECT 1").execute(&mut conn).await {
            Ok(_) => "healthy".to_string(),
            Err(e) => {
                log::warn!("Health check query failed: {}", e);
                "unhealthy".to_string()
            }
        },
        Err(_) => "unreachable".to_string(),
    };

    // Read after the probe so the connection it used is back in the pool.
    let pool_state = state.pool.state();
    let is_healthy = database == "healthy";
    let response = HealthResponse {
        status: if is_healthy { "ok" } else { "degraded" }.to_string(),
        database,
        pool_size: pool_state.connections,
        pool_idle: pool_state.idle_connections,
    };

    if is_healthy {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[utoipa::path(
    get,
    path = "/ready",
    summary = "Readiness probe",
    description = "Counts the stored tasks against MAX_TASKS. A full store is still ready; `accepting_tasks` tells whether a create would pass the capacity check.",
    responses(
        (status = 200, description = "Task table readable", body = ReadinessResponse),
        (status = 503, description = "Task table unreadable", body = ReadinessResponse),
    ),
    tag = "health"
)]
pub async fn readiness_check(state: web::Data<AppState>) -> HttpResponse {
    let max_tasks = state.config.tasks.max_tasks;

    let counted = match state.conn().await {
        Ok(mut conn) => db::count_tasks(&mut conn).await,
        Err(e) => Err(e),
    };

    match counted {
        Ok(tasks) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ready".to_string(),
            tasks: Some(tasks),
            max_tasks,
            accepting_tasks: tasks < max_tasks,
            reason: None,
        }),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "not_ready".to_string(),
                tasks: None,
                max_tasks,
                accepting_tasks: false,
                reason: Some("cannot read the task table".to_string()),
            })
        }
    }
}
