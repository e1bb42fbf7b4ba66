//! Integration tests for `GET /cotacao`.
//!
//! These drive the router in-process with stubbed providers and exercise
//! the three terminal outcomes of a quote request.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use quotes_hex::{PersistConfig, QuoteService, inbound::HttpServer};
use quotes_repo::SqliteRepo;
use quotes_types::{
    Decimal, ExchangeRate, ExchangeRateId, ExchangeRateRepository, QuoteError, RateProvider,
    RepoError, Stage,
};
use tower::ServiceExt;

struct FixedProvider(&'static str);

#[async_trait]
impl RateProvider for FixedProvider {
    async fn fetch(&self) -> Result<ExchangeRate, QuoteError> {
        Ok(ExchangeRate::new(Decimal::from_str(self.0).unwrap()))
    }
}

struct TimedOutProvider;

#[async_trait]
impl RateProvider for TimedOutProvider {
    async fn fetch(&self) -> Result<ExchangeRate, QuoteError> {
        Err(QuoteError::timeout(Stage::Fetch, Duration::from_millis(200)))
    }
}

/// Store whose writes never finish within the deadline.
struct StalledRepo;

#[async_trait]
impl ExchangeRateRepository for StalledRepo {
    async fn create(&self, rate: ExchangeRate) -> Result<ExchangeRate, RepoError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(rate)
    }

    async fn get(&self, _id: ExchangeRateId) -> Result<Option<ExchangeRate>, RepoError> {
        Ok(None)
    }

    async fn count(&self) -> Result<i64, RepoError> {
        Ok(0)
    }
}

fn quote_request() -> Request<Body> {
    Request::builder()
        .uri("/cotacao")
        .body(Body::empty())
        .unwrap()
}

fn relaxed_persist() -> PersistConfig {
    PersistConfig {
        timeout: Duration::from_secs(1),
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_quote_returns_bid_as_json() {
    let repo = SqliteRepo::in_memory().await.unwrap();
    let service =
        QuoteService::with_persist_config(FixedProvider("5.25"), repo, relaxed_persist());
    let app = HttpServer::new(service).router();

    let response = app.oneshot(quote_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_string(response).await, r#"{"bid":"5.25"}"#);
}

#[tokio::test]
async fn test_every_request_stores_a_new_row() {
    let repo = SqliteRepo::in_memory().await.unwrap();
    let service =
        QuoteService::with_persist_config(FixedProvider("5.25"), repo.clone(), relaxed_persist());
    let app = HttpServer::new(service).router();

    for _ in 0..3 {
        let response = app.clone().oneshot(quote_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_fetch_timeout_returns_500_with_generic_text() {
    let repo = SqliteRepo::in_memory().await.unwrap();
    let service = QuoteService::new(TimedOutProvider, repo.clone());
    let app = HttpServer::new(service).router();

    let response = app.oneshot(quote_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "timeout fetching exchange rate");
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_slow_store_fails_closed() {
    let service = QuoteService::new(FixedProvider("5.25"), StalledRepo);
    let app = HttpServer::new(service).router();

    let response = app.oneshot(quote_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert_eq!(body, "timeout saving exchange rate");
    assert!(!body.contains("5.25"));
}

#[tokio::test]
async fn test_health() {
    let repo = SqliteRepo::in_memory().await.unwrap();
    let app = HttpServer::new(QuoteService::new(FixedProvider("5.25"), repo)).router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
