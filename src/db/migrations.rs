use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use super::DbError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply every pending migration over a short-lived blocking connection.
///
/// Returns how many migrations were applied. Must not be called on an async worker thread.
pub fn run_pending_migrations(database_url: &str) -> Result<usize, DbError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|e| DbError::Internal(format!("Cannot connect to run migrations: {}", e)))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::Internal(format!("Migration failed: {}", e)))?;

    for version in &applied {
        log::info!("Applied migration {}", version);
    }
    Ok(applied.len())
}
