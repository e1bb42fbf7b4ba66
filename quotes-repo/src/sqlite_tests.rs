//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use quotes_types::{Decimal, ExchangeRate, ExchangeRateId, ExchangeRateRepository};

    use crate::{SqliteRepo, build_repo};

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::in_memory().await.unwrap()
    }

    fn rate(bid: &str) -> ExchangeRate {
        ExchangeRate::new(Decimal::from_str(bid).unwrap())
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = setup_repo().await;

        let created = repo.create(rate("5.2514")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.bid.to_string(), "5.2514");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_bid_is_stored_exactly() {
        let repo = setup_repo().await;

        let created = repo.create(rate("5.123456789012345678")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.bid, Decimal::from_str("5.123456789012345678").unwrap());
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let repo = setup_repo().await;

        let result = repo.get(ExchangeRateId::new()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_identical_rates_are_not_deduplicated() {
        let repo = setup_repo().await;

        repo.create(rate("5.25")).await.unwrap();
        repo.create(rate("5.25")).await.unwrap();
        repo.create(rate("5.25")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let repo = setup_repo().await;

        let first = repo.create(rate("5.25")).await.unwrap();
        let result = repo.create(first.clone()).await;

        assert!(result.is_err());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let repo = setup_repo().await;
        repo.create(rate("5.25")).await.unwrap();

        repo.migrate().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_build_repo_creates_file_and_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("nested").join("cotacao.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let repo = build_repo(&url).await.unwrap();
        repo.create(rate("5.25")).await.unwrap();

        assert!(db_path.exists());
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.pool().close().await;
    }
}
