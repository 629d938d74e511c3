use anyhow::{Context, Result};
use log::{debug, info};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlxSqliteConnector};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::DatabaseConfig;

/// In-memory database URL used by tests and as the fallback store.
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Owner of the database connection the repositories run against.
///
/// Clones share the same pool.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    conn: Arc<DatabaseConnection>,
}

impl LocalStorage {
    /// Open the store described by `config` and make sure the schema exists.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        ensure_parent_dir(&config.url)?;

        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .with_context(|| format!("Invalid database url: {}", config.url))?;

        // Every pooled connection to :memory: is a separate database, so the
        // pool holds exactly one and never reaps it
        let pool_options = if is_memory_url(&config.url) {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .with_context(|| format!("Failed to open database: {}", config.url))?;

        let storage = Self::from_connection(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool));
        storage.init_schema().await?;
        info!("Opened todo store at {}", config.url);
        Ok(storage)
    }

    /// Open a fresh in-memory store.
    pub async fn in_memory() -> Result<Self> {
        Self::new(&DatabaseConfig {
            url: MEMORY_DATABASE_URL.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Wrap an existing connection without touching the schema.
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn: Arc::new(conn) }
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Take the connection back, unless another clone still shares it.
    pub fn into_connection(self) -> Option<DatabaseConnection> {
        Arc::try_unwrap(self.conn).ok()
    }

    /// Create the tables if they do not exist yet.
    pub async fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_unprepared("PRAGMA foreign_keys = ON")
            .await
            .context("Failed to enable foreign keys")?;

        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS todo_lists (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL CHECK (length(title) BETWEEN 1 AND 100),
                    hide BOOLEAN NOT NULL DEFAULT 0
                )
                ",
            )
            .await
            .context("Failed to create todo_lists table")?;

        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS todo_entries (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL CHECK (length(title) BETWEEN 1 AND 100),
                    description TEXT CHECK (length(description) <= 600),
                    additional_notes TEXT,
                    label INTEGER NOT NULL DEFAULT 0,
                    due_date TEXT,
                    reminder TEXT,
                    is_reminded BOOLEAN NOT NULL DEFAULT 0,
                    creation_date TEXT NOT NULL,
                    status INTEGER NOT NULL DEFAULT 0,
                    todo_list_id INTEGER NOT NULL,
                    FOREIGN KEY (todo_list_id) REFERENCES todo_lists(id) ON DELETE CASCADE
                )
                ",
            )
            .await
            .context("Failed to create todo_entries table")?;

        self.conn
            .execute_unprepared("CREATE INDEX IF NOT EXISTS idx_todo_entries_list ON todo_entries(todo_list_id)")
            .await
            .context("Failed to create todo_entries index")?;

        debug!("Schema ready");
        Ok(())
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Create the directory holding a file-backed database.
fn ensure_parent_dir(url: &str) -> Result<()> {
    if is_memory_url(url) {
        return Ok(());
    }
    let Some(path) = url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = Path::new(path.split('?').next().unwrap_or(path));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
    }
    Ok(())
}
