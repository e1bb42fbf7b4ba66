//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use quotes_types::{ExchangeRateRepository, QuoteError, RateProvider};

use crate::QuoteService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider, R: ExchangeRateRepository> {
    pub service: QuoteService<P, R>,
}

/// Wrapper to implement IntoResponse for QuoteError (orphan rule workaround).
pub struct ApiError(pub QuoteError);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Detail goes to the log only; the caller gets the generic message.
        tracing::error!(
            kind = ?self.0.kind(),
            detail = %self.0.detail(),
            "{}",
            self.0
        );

        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Fetch, persist and serve the current USD/BRL bid.
#[tracing::instrument(skip(state))]
pub async fn get_quote<P: RateProvider, R: ExchangeRateRepository>(
    State(state): State<Arc<AppState<P, R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let rate = state.service.current_rate().await?;
    tracing::info!(id = %rate.id, bid = %rate.bid, "Serving exchange rate");
    Ok(Json(rate.to_response()))
}
