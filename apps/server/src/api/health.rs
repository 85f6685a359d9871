use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{events::QuoteOutcomeSnapshot, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    depots: usize,
    zones: usize,
    distance_cache_entries: usize,
    quotes: QuoteOutcomeSnapshot,
}

async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        depots: state.reference.depots().len(),
        zones: state.reference.zones().len(),
        distance_cache_entries: state.reference.distance_cache_entries().len(),
        quotes: state.quote_stats.snapshot(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}
