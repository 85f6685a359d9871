use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use freightquote_core::quotes::{QuoteCalculation, QuoteComputed, QuoteRequest, StoredQuote};
use freightquote_storage_sqlite::quotes::DEFAULT_RECENT_LIMIT;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

const MAX_RECENT_LIMIT: i64 = 500;

#[derive(Deserialize)]
struct RecentQuery {
    limit: Option<i64>,
}

async fn submit_quote(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuoteRequest>,
) -> ApiResult<(StatusCode, Json<QuoteComputed>)> {
    let quote = state.quote_service.submit_quote(request).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}

async fn price_quote(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuoteRequest>,
) -> ApiResult<Json<QuoteCalculation>> {
    let calculation = state.quote_service.calculate(&request)?;
    Ok(Json(calculation))
}

async fn list_recent_quotes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecentQuery>,
) -> ApiResult<Json<Vec<StoredQuote>>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    if !(1..=MAX_RECENT_LIMIT).contains(&limit) {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {}",
            MAX_RECENT_LIMIT
        )));
    }
    let quotes = state.quote_repository.list_recent(limit)?;
    Ok(Json(quotes))
}

async fn get_quote(
    Path(reference): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<StoredQuote>>> {
    let quotes = state.quote_repository.get_by_reference(&reference)?;
    if quotes.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(quotes))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", post(submit_quote))
        .route("/quotes/price", post(price_quote))
        .route("/quotes/recent", get(list_recent_quotes))
        .route("/quotes/{reference}", get(get_quote))
}
