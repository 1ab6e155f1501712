//! Database bootstrap
//!
//! Pool creation with bounded startup retry, and schema setup.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

use crate::config::Config;

const INIT_SCHEMA: &str = include_str!("../../../migrations/001_init.sql");

/// Open the connection pool, retrying while the database is not reachable yet
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let attempts = config.db_connect_attempts.max(1);
    let mut attempt = 1;

    loop {
        match try_connect(config).await {
            Ok(db) => return Ok(db),
            Err(e) if attempt < attempts => {
                tracing::warn!(attempt, attempts, error = %e, "Database not ready, retrying");
                tokio::time::sleep(config.db_connect_retry_delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Pool options: only the upper bound is set, idle connections are reaped by
/// the pool's own idle timeout
fn connect_options(config: &Config) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .sqlx_logging(false);
    options
}

async fn try_connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(config)).await?;
    db.ping().await?;
    Ok(db)
}

/// Create the `wallets` table if it does not exist
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(INIT_SCHEMA).await?;
    Ok(())
}
