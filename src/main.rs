//! Task API server.
//!
//! Applies pending migrations, optionally seeds demo tasks, then serves the task routes
//! with request logging and Prometheus metrics on `/metrics`.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use actix_web_prometheus::PrometheusMetricsBuilder;
use task_api::{
    config::Config,
    db,
    handlers::{AppState, configure_routes},
    initialize_db_pool,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e)
    })?;
    let port = config.port;

    let database_url = config.database_url.clone();
    let applied = web::block(move || db::run_pending_migrations(&database_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(|e| {
            log::error!("Cannot migrate database: {}", e);
            std::io::Error::other(e)
        })?;
    log::info!("Database schema up to date ({} migrations applied)", applied);

    // initialize DB pool outside of `HttpServer::new` so that it is shared across all workers
    let pool = initialize_db_pool(&config)
        .await
        .map_err(std::io::Error::other)?;

    if config.seed_demo_data {
        let mut conn = pool.get().await.map_err(std::io::Error::other)?;
        match db::seed_demo_tasks(&mut conn).await {
            Ok(0) => {}
            Ok(n) => log::info!("Seeded {} demo tasks", n),
            Err(e) => log::warn!("Failed to seed demo tasks: {}", e),
        }
    }

    log::info!(
        "Allowing at most {} tasks, pool size {}",
        config.tasks.max_tasks,
        config.pool.max_size
    );

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("starting HTTP server at http://0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(prometheus.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
