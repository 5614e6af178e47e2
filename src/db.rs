use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

use crate::config::Config;
use crate::error::StoreError;

/// Pool for the web server. Connects lazily so the server comes up even when
/// MySQL does not; requests then render a degraded page.
pub fn init_pool(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy(&config.database_url)
}

/// Single-connection pool for one CLI invocation, connected up front so the
/// caller can report a connection failure before running a command.
pub async fn connect(config: &Config) -> Result<MySqlPool, StoreError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}
