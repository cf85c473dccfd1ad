use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

/// Opens the pool shared by every request. `timestamptz` columns decode to
/// `chrono::DateTime<Utc>` through sqlx's `chrono` feature.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .min_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await?;
    info!("connected to PostgreSQL");
    Ok(pool)
}
