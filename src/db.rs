use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;
use crate::store::Store;
use crate::store::memory::MemStore;
use crate::store::sqlite::SqliteStore;

pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // An in-memory sqlite database exists per connection, so the pool must
    // not hand out more than one.
    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        5
    };

    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?)
}

/// Builds the configured storage backend, creating the schema and seed
/// data on first run.
pub async fn init_store(config: &Config) -> anyhow::Result<Arc<dyn Store>> {
    if config.database_url == "memory" {
        info!("Using the in-memory store");
        return Ok(Arc::new(MemStore::with_seed_data()));
    }

    let pool = init_db(&config.database_url).await?;
    let store = SqliteStore::new(pool);
    store.init_schema().await?;
    store.seed_if_empty().await?;
    info!(database_url = %config.database_url, "Using the sqlite store");
    Ok(Arc::new(store))
}
