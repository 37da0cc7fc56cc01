pub mod catalog;
pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod validation;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

use crate::{config::Config, error::TaskError};

/// Short-hand for the database pool type to use throughout the app.
pub type DbPool = Pool<AsyncPgConnection>;

pub type Conn<'a> = PooledConnection<'a, AsyncPgConnection>;

/// Build the connection pool from the pool settings.
///
/// Shared by the server and the integration tests.
pub async fn initialize_db_pool(config: &Config) -> Result<DbPool, TaskError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

    Pool::builder()
        .max_size(config.pool.max_size)
        .min_idle(Some(config.pool.min_idle))
        .connection_timeout(config.pool.connection_timeout)
        .build(manager)
        .await
        .map_err(|e| TaskError::Pool(e.to_string()))
}
