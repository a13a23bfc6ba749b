use ferrous_lookup_domain::config::DatabaseConfig;
use ferrous_lookup_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let database_url = cfg.url();
    info!(url = %database_url, "Initializing database");

    let pool = create_pool(&database_url, cfg.max_connections)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to open database");
            anyhow::anyhow!(e)
        })?;

    info!(max_connections = cfg.max_connections, "Database initialized");

    Ok(pool)
}
