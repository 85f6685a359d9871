use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use freightquote_core::reference::{Depot, Locality, QuantityRange};
use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CargoTypeView {
    label: String,
    range: QuantityRange,
    default_quantity: u32,
    /// Zones with a configured base rate
    priced_zones: Vec<String>,
}

async fn list_depots(State(state): State<Arc<AppState>>) -> Json<Vec<Depot>> {
    Json(state.reference.depots().to_vec())
}

async fn list_zones(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(
        state
            .reference
            .zones()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

async fn list_localities(
    Path(zone): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Locality>>> {
    if !state.reference.zones().contains(&zone.as_str()) {
        return Err(ApiError::NotFound);
    }
    Ok(Json(state.reference.localities(&zone).to_vec()))
}

async fn list_cargo_types(State(state): State<Arc<AppState>>) -> Json<Vec<CargoTypeView>> {
    let reference = &state.reference;
    let bands = reference.cargo_bands();
    let views = bands
        .bands()
        .iter()
        .map(|band| CargoTypeView {
            label: band.label.clone(),
            range: band.range,
            default_quantity: bands.default_quantity(&band.label),
            priced_zones: reference
                .zones()
                .into_iter()
                .filter(|zone| reference.rate_table().lookup(&band.label, zone).is_some())
                .map(str::to_string)
                .collect(),
        })
        .collect();
    Json(views)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reference/depots", get(list_depots))
        .route("/reference/zones", get(list_zones))
        .route("/reference/zones/{zone}/localities", get(list_localities))
        .route("/reference/cargo-types", get(list_cargo_types))
}
