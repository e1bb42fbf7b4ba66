//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use quotes_types::{ExchangeRate, ExchangeRateId, ExchangeRateRepository, RepoError};

use crate::types::DbExchangeRate;

const MIGRATION: &str = include_str!("../migrations/0001_create_exchange_rates.sql");

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
///
/// Holds a connection pool, so every request reuses an open connection
/// instead of reopening the database file.
#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Opens (or creates) the database behind `database_url`.
    ///
    /// Does not touch the schema; call [`SqliteRepo::migrate`] afterwards.
    pub async fn open(database_url: &str) -> anyhow::Result<Self> {
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if !in_memory {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Each in-memory connection is a separate database, so keep exactly one alive.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options.connect_with(options).await?;

        tracing::debug!(database_url, "Opened SQLite pool");
        Ok(Self { pool })
    }

    /// Creates the schema if it does not exist yet. Safe to call repeatedly.
    pub async fn migrate(&self) -> Result<(), RepoError> {
        sqlx::query(MIGRATION)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(())
    }

    /// Opens an in-memory database with the schema applied.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let repo = Self::open("sqlite::memory:").await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ExchangeRateRepository for SqliteRepo {
    async fn create(&self, rate: ExchangeRate) -> Result<ExchangeRate, RepoError> {
        let now = chrono::Utc::now();
        let stamp = now.to_rfc3339();

        // A caller that gives up drops `tx` before commit, which rolls the
        // insert back even if the worker thread already ran it.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        sqlx::query(
            r#"INSERT INTO exchange_rates (id, bid, created_at, updated_at) VALUES (?, ?, ?, ?)"#,
        )
        .bind(rate.id.to_string())
        .bind(rate.bid.to_string())
        .bind(&stamp)
        .bind(&stamp)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(ExchangeRate::from_parts(rate.id, rate.bid, now, now))
    }

    async fn get(&self, id: ExchangeRateId) -> Result<Option<ExchangeRate>, RepoError> {
        let row: Option<DbExchangeRate> = sqlx::query_as(
            r#"SELECT id, bid, created_at, updated_at FROM exchange_rates WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbExchangeRate::into_domain).transpose()
    }

    async fn count(&self) -> Result<i64, RepoError> {
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM exchange_rates"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}
