use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use freightquote_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn test_app() -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        ..Config::default()
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn salta_request(quantity: f64) -> Value {
    json!({
        "depot": "DEP-001",
        "zone": "1",
        "locality": "SALTA",
        "cargoType": "DE 21 KG A 100 KG",
        "quantity": quantity,
        "taxIncluded": true,
    })
}

#[tokio::test]
async fn submitted_quote_is_priced_and_stored() {
    let (app, _tmp) = test_app().await;

    let (status, quote) = send(&app, post_json("/api/v1/quotes", salta_request(50.0))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(quote["distanceKm"], 113);
    assert_eq!(quote["price"], 34210);
    assert_eq!(quote["destination"], "SALTA (Zone 1)");
    let quote_id = quote["quoteId"].as_str().unwrap().to_string();
    assert!(quote_id.starts_with("COT-"));

    // Persistence runs after the response
    let uri = format!("/api/v1/quotes/{}", quote_id);
    let stored = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let (status, body) = send(&app, get(&uri)).await;
            if status == StatusCode::OK {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("quote was not persisted");
    assert_eq!(stored[0]["estimatedPrice"], 34210);
    assert_eq!(stored[0]["status"], "pending");

    let (status, recent) = send(&app, get("/api/v1/quotes/recent?limit=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recent.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn out_of_band_quantity_is_bad_request() {
    let (app, _tmp) = test_app().await;

    let (status, body) = send(&app, post_json("/api/v1/quotes", salta_request(10.0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The value must be between 21 and 100");
}

#[tokio::test]
async fn unknown_depot_is_not_found() {
    let (app, _tmp) = test_app().await;
    let mut request = salta_request(50.0);
    request["depot"] = json!("DEP-404");

    let (status, body) = send(&app, post_json("/api/v1/quotes/price", request)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn price_preview_does_not_store() {
    let (app, _tmp) = test_app().await;

    let (status, calculation) =
        send(&app, post_json("/api/v1/quotes/price", salta_request(50.0))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(calculation["breakdown"]["total"], 34210);
    assert_eq!(calculation["distance"]["source"], "cache");

    let (_, recent) = send(&app, get("/api/v1/quotes/recent")).await;
    assert!(recent.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn recent_limit_is_bounded() {
    let (app, _tmp) = test_app().await;
    let (status, _) = send(&app, get("/api/v1/quotes/recent?limit=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reference_routes_list_selections() {
    let (app, _tmp) = test_app().await;

    let (status, zones) = send(&app, get("/api/v1/reference/zones")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(zones, json!(["1", "2", "3", "4", "5"]));

    let (_, localities) = send(&app, get("/api/v1/reference/zones/1/localities")).await;
    assert!(localities
        .as_array()
        .unwrap()
        .iter()
        .any(|l| l["name"] == "SALTA"));

    let (status, _) = send(&app, get("/api/v1/reference/zones/9/localities")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, cargo_types) = send(&app, get("/api/v1/reference/cargo-types")).await;
    let minimum = &cargo_types[0];
    assert_eq!(minimum["label"], "BULTO MINIMO (MAXIMO 20 KG)");
    assert_eq!(minimum["defaultQuantity"], 1);
    assert_eq!(minimum["pricedZones"], json!(["1", "2", "3", "4"]));

    let (_, depots) = send(&app, get("/api/v1/reference/depots")).await;
    assert_eq!(depots.as_array().unwrap().len(), 3);
}
