use crate::db::models::{NewPasswordRecord, PasswordRecord, PasswordRow, encode_timestamp};
use crate::db::schema::SQLITE_INIT;
use crate::error::PassforgeError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

pub type SqlitePool = Pool<Sqlite>;

/// Maximum number of records returned by one history listing.
pub const HISTORY_LIMIT: u32 = 50;

/// Open (creating if missing) the database at `database_url` and apply the schema.
pub async fn connect(database_url: &str) -> Result<HistoryStorage, PassforgeError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    let storage = HistoryStorage::new(pool);
    storage.init_schema().await?;
    storage.seed_clock().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct HistoryStorage {
    pool: SqlitePool,
    /// Last assigned `created_at`, in microseconds since the epoch.
    last_created_micros: Arc<AtomicI64>,
}

impl HistoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            last_created_micros: Arc::new(AtomicI64::new(i64::MIN)),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PassforgeError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Advance the creation clock past the newest stored record.
    pub async fn seed_clock(&self) -> Result<(), PassforgeError> {
        let newest: Option<String> = sqlx::query_scalar("SELECT MAX(created_at) FROM passwords")
            .fetch_one(&self.pool)
            .await?;
        if let Some(newest) = newest {
            let micros = DateTime::parse_from_rfc3339(&newest)
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
                .timestamp_micros();
            self.last_created_micros.fetch_max(micros, Ordering::SeqCst);
        }
        Ok(())
    }

    /// Current time at microsecond precision, strictly after every value this
    /// store assigned before.
    pub fn next_created_at(&self) -> DateTime<Utc> {
        let now = Utc::now().timestamp_micros();
        let step = |last: i64| now.max(last.saturating_add(1));
        let prev = self
            .last_created_micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(step(last)))
            .unwrap_or_else(|last| last);
        DateTime::from_timestamp_micros(step(prev)).unwrap_or_else(Utc::now)
    }

    /// Persist a new record with a fresh id and the next creation time.
    pub async fn insert(&self, new: NewPasswordRecord) -> Result<PasswordRecord, PassforgeError> {
        let (user_id, password) = new.require()?;
        let id = Uuid::new_v4().to_string();
        let created_at = encode_timestamp(&self.next_created_at());

        let row: PasswordRow = sqlx::query_as(
            r#"
            INSERT INTO passwords (id, user_id, password, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, password, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(password)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(PasswordRecord::try_from(row)?)
    }

    /// Newest-first records for `user_id`, at most `limit`.
    /// Records sharing a timestamp fall back to insertion order.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<PasswordRecord>, PassforgeError> {
        let rows: Vec<PasswordRow> = sqlx::query_as(
            r#"SELECT id, user_id, password, created_at
               FROM passwords WHERE user_id = ?
               ORDER BY created_at DESC, rowid DESC
               LIMIT ?"#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| PasswordRecord::try_from(row).map_err(PassforgeError::from))
            .collect()
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, PassforgeError> {
        let result = sqlx::query("DELETE FROM passwords WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
