//! Session records in SQLite, with expired records swept in the background.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tokio::task::JoinHandle;
use tower_sessions::session_store::{self, ExpiredDeletion};
use tower_sessions_sqlx_store::SqliteStore;

/// How often expired session records are deleted.
pub const DELETION_PERIOD: Duration = Duration::from_secs(60);

/// Open the session database, creating the file when missing.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    SqlitePool::connect_with(options).await
}

/// Session store over `pool`, with its table created.
pub async fn open_store(pool: SqlitePool) -> Result<SqliteStore, sqlx::Error> {
    let store = SqliteStore::new(pool);
    store.migrate().await?;
    Ok(store)
}

/// Delete expired records every [`DELETION_PERIOD`] until the task is aborted.
pub fn spawn_deletion_task(store: SqliteStore) -> JoinHandle<session_store::Result<()>> {
    tokio::task::spawn(store.continuously_delete_expired(DELETION_PERIOD))
}
