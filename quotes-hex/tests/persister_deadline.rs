//! Deadline behaviour of the persister against a real SQLite file.

use std::str::FromStr;
use std::time::Duration;

use quotes_hex::{PersistConfig, Persister};
use quotes_repo::build_repo;
use quotes_types::{Decimal, ErrorKind, ExchangeRate, ExchangeRateRepository};

#[tokio::test]
async fn test_timed_out_save_leaves_no_row() {
    let tmp = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", tmp.path().join("cotacao.db").display());
    let repo = build_repo(&url).await.unwrap();

    // Hold the write lock on a second connection so the insert has to wait.
    let mut blocker = repo.pool().acquire().await.unwrap();
    sqlx::query("BEGIN IMMEDIATE")
        .execute(&mut *blocker)
        .await
        .unwrap();

    let persister = Persister::new(
        repo.clone(),
        PersistConfig {
            timeout: Duration::from_millis(10),
        },
    );
    let err = persister
        .save(ExchangeRate::new(Decimal::from_str("5.25").unwrap()))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);

    sqlx::query("COMMIT").execute(&mut *blocker).await.unwrap();
    drop(blocker);

    // Give the abandoned insert time to run to completion if it still could.
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(repo.count().await.unwrap(), 0);

    repo.pool().close().await;
}

#[tokio::test]
async fn test_save_within_deadline_is_stored() {
    let tmp = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", tmp.path().join("cotacao.db").display());
    let repo = build_repo(&url).await.unwrap();

    let persister = Persister::new(
        repo.clone(),
        PersistConfig {
            timeout: Duration::from_secs(2),
        },
    );
    let saved = persister
        .save(ExchangeRate::new(Decimal::from_str("5.25").unwrap()))
        .await
        .unwrap();

    let stored = repo.get(saved.id).await.unwrap().unwrap();
    assert_eq!(stored.bid.to_string(), "5.25");
    assert_eq!(repo.count().await.unwrap(), 1);
}
