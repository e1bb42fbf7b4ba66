//! # Quotes Repository
//!
//! Concrete repository implementation (adapter) for the quote service.
//! This crate provides the SQLite adapter that implements the
//! `ExchangeRateRepository` port.

pub mod sqlite;

mod types;

#[cfg(test)]
mod sqlite_tests;

pub use sqlite::SqliteRepo;

/// Build and initialize a repository from a database URL.
///
/// This function:
/// 1. Connects to the database (creating the file if missing)
/// 2. Runs migrations to create tables
/// 3. Returns a ready-to-use `SqliteRepo`
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo("sqlite://cotacao.db?mode=rwc").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<SqliteRepo> {
    let repo = SqliteRepo::open(database_url).await?;
    repo.migrate().await?;
    Ok(repo)
}
