use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};
use record_shared::models::{NewRecord, Record};

const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS records (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        age      INTEGER NOT NULL,
        city     TEXT NOT NULL,
        country  TEXT NOT NULL
    );"#,
    "CREATE INDEX IF NOT EXISTS idx_records_username ON records (username);",
];

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Single-table record storage over a SQLite pool.
///
/// Every operation checks out its own connection and hands it back when the
/// guard drops, whichever way the operation exits.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    /// Opens (creating if missing) the database at `database_url` and makes
    /// sure the `records` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self::from_pool(pool);
        store.ensure_schema().await?;
        info!("📋 Record store ready at {}", database_url);
        Ok(store)
    }

    fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        for statement in SCHEMA {
            sqlx::query(statement).execute(&mut *conn).await?;
        }
        Ok(())
    }

    pub async fn create(&self, record: &NewRecord) -> Result<Record, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let stored = sqlx::query_as::<_, Record>(
            "INSERT INTO records (username, age, city, country)
             VALUES (?, ?, ?, ?)
             RETURNING id, username, age, city, country"
        )
        .bind(&record.username)
        .bind(record.age)
        .bind(&record.city)
        .bind(&record.country)
        .fetch_one(&mut *conn)
        .await?;

        debug!("Stored record {}", stored.id);
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<Record, StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Record>(
            "SELECT id, username, age, city, country FROM records WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }
}
