use log::{error, info};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Builds the shared connection pool without touching the network;
/// physical connections are opened on first use.
pub fn build_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)
}

/// One-shot connectivity probe at startup. Failure is logged, not fatal:
/// requests still run and surface their own storage errors.
pub async fn probe(pool: &MySqlPool) {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => info!("Database connected!"),
        Err(e) => error!("Database connection failed: {}", e),
    }
}
