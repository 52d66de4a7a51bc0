use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::error::Result;

/// Open the configured database, creating it and applying migrations as needed
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let database_url = config.database_url.as_str();

    // Create database if it doesn't exist
    if !database_url.contains(":memory:") && !sqlx::Sqlite::database_exists(database_url).await? {
        tracing::info!("Creating database {}", database_url);
        sqlx::Sqlite::create_database(database_url).await?;
    }

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(database_url)
        .await?;

    // Run migrations
    tracing::info!("Running migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
