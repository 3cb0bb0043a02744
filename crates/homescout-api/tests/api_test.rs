//! End-to-end tests for the HTTP surface, driven through the router without a socket

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use homescout_api::{create_router, AppState};
use homescout_core::error::{HomescoutError, Result};
use homescout_core::models::{SearchId, SearchLogEntry, SearchRecord};
use homescout_core::Predictor;
use homescout_store::memory::MemorySearchLog;
use homescout_store::ports::SearchLogStore;
use serde_json::{json, Value};
use tower::ServiceExt;

const MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../artifacts/pune_house_price_model.json");
const COLUMNS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../artifacts/columns.json");

/// Store whose backing database is always down
struct FailingStore;

#[async_trait]
impl SearchLogStore for FailingStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn append(&self, _entry: &SearchLogEntry) -> Result<SearchId> {
        Err(HomescoutError::Persistence("connection refused".to_string()))
    }

    async fn read_all(&self) -> Result<Vec<SearchRecord>> {
        Err(HomescoutError::Persistence("connection refused".to_string()))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

fn app_with(search_log: Arc<dyn SearchLogStore>) -> Router {
    let predictor = Predictor::load(MODEL, COLUMNS).expect("shipped artifacts load");
    create_router(Arc::new(AppState::new(Arc::new(predictor), search_log)))
}

fn app() -> Router {
    app_with(Arc::new(MemorySearchLog::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn wakad_request() -> Value {
    json!({
        "location": "Wakad",
        "house_type": "Apartment",
        "area_sqft": 1000,
        "bhk": 2
    })
}

#[tokio::test]
async fn test_health_reports_backend() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_options_lists_form_choices() {
    let app = app();
    let (status, body) = send(&app, get("/api/v1/options")).await;

    assert_eq!(status, StatusCode::OK);
    let locations = body["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 30);
    assert!(locations.contains(&json!("Wakad")));
    assert!(locations.contains(&json!("Koregaon Park")));

    let house_types = body["house_types"].as_array().unwrap();
    assert_eq!(house_types.len(), 5);
    assert_eq!(house_types[2]["value"], "independent_house");
    assert_eq!(house_types[2]["label"], "Independent House");

    assert_eq!(body["area_sqft"]["min"], 300);
    assert_eq!(body["area_sqft"]["max"], 5000);
    assert_eq!(body["bhk"]["default"], 2);
}

#[tokio::test]
async fn test_predict_returns_estimate_and_logs_search() {
    let app = app();
    let (status, body) = send(&app, post_json("/api/v1/predict", wakad_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Wakad");
    assert_eq!(body["house_type"], "Apartment");
    assert!(body["price"]["rupees"].as_f64().unwrap() > 0.0);
    assert!(body["price"]["display"].as_str().unwrap().starts_with("₹ "));
    assert!(body["price"]["display"].as_str().unwrap().ends_with(" Lakhs"));
    assert_eq!(body["logged"], true);
    assert_eq!(body["search_id"], 1);
    assert!(body.get("warning").is_none());

    let listings = body["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 5);
    assert_eq!(listings[0]["site_name"], "99acres");
    assert_eq!(listings[0]["caption"], "Search for 2 BHK in Wakad");

    let (_, searches) = send(&app, get("/api/v1/searches")).await;
    let searches = searches.as_array().unwrap();
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0]["id"], 1);
    assert_eq!(searches[0]["location"], "Wakad");
    assert_eq!(searches[0]["house_type"], "Apartment");
    assert_eq!(searches[0]["predicted_price_lakhs"], body["price"]["lakhs"]);
}

#[tokio::test]
async fn test_predict_accepts_snake_case_house_type() {
    let app = app();
    let request = json!({
        "location": "baner",
        "house_type": "independent_house",
        "area_sqft": 2400,
        "bhk": 4
    });
    let (status, body) = send(&app, post_json("/api/v1/predict", request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["house_type"], "Independent House");
}

#[tokio::test]
async fn test_predict_rejects_unknown_location() {
    let app = app();
    let mut request = wakad_request();
    request["location"] = json!("Atlantis");
    let (status, body) = send(&app, post_json("/api/v1/predict", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot estimate price");
    assert!(body["details"].as_str().unwrap().contains("Atlantis"));

    // Rejected queries are not logged
    let (_, searches) = send(&app, get("/api/v1/searches")).await;
    assert!(searches.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_predict_rejects_out_of_range_input() {
    let app = app();

    let mut too_small = wakad_request();
    too_small["area_sqft"] = json!(100);
    let (status, body) = send(&app, post_json("/api/v1/predict", too_small)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");

    let mut too_many_rooms = wakad_request();
    too_many_rooms["bhk"] = json!(9);
    let (status, _) = send(&app, post_json("/api/v1/predict", too_many_rooms)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_rejects_malformed_body_as_json() {
    let app = app();

    let mut negative_area = wakad_request();
    negative_area["area_sqft"] = json!(-5);
    let (status, body) = send(&app, post_json("/api/v1/predict", negative_area)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request");
    assert!(body["details"].is_string());

    let mut missing_bhk = wakad_request();
    missing_bhk.as_object_mut().unwrap().remove("bhk");
    let (status, body) = send(&app, post_json("/api/v1/predict", missing_bhk)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request");

    let (_, searches) = send(&app, get("/api/v1/searches")).await;
    assert!(searches.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_listings_endpoint() {
    let app = app();
    let (status, body) = send(&app, get("/api/v1/listings?location=Koregaon%20Park&bhk=3")).await;

    assert_eq!(status, StatusCode::OK);
    let links = body.as_array().unwrap();
    assert_eq!(links.len(), 5);
    assert!(links
        .iter()
        .all(|l| l["url"].as_str().unwrap().contains("koregaon-park")));

    let (status, _) = send(&app, get("/api/v1/listings?location=Wakad&bhk=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/api/v1/listings?location=%20&bhk=2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, get("/api/v1/listings?location=Wakad&bhk=two")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request");

    let (status, body) = send(&app, get("/api/v1/listings?location=Wakad")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request");
}

#[tokio::test]
async fn test_insights_empty_then_populated() {
    let app = app();

    let (status, body) = send(&app, get("/api/v1/insights")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "no_data");

    send(&app, post_json("/api/v1/predict", wakad_request())).await;
    let mut second = wakad_request();
    second["location"] = json!("wakad");
    second["bhk"] = json!(3);
    send(&app, post_json("/api/v1/predict", second)).await;

    let (status, body) = send(&app, get("/api/v1/insights")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["total_searches"], 2);
    assert_eq!(body["most_popular_location"], "Wakad");
    assert_eq!(body["top_locations"][0]["searches"], 2);
    assert_eq!(body["bhk_distribution"].as_array().unwrap().len(), 2);

    let (_, searches) = send(&app, get("/api/v1/searches")).await;
    let searches = searches.as_array().unwrap();
    assert_eq!(searches.len(), 2);
    assert!(searches.iter().all(|s| s["location"] == "Wakad"));
}

#[tokio::test]
async fn test_estimate_survives_search_log_outage() {
    let app = app_with(Arc::new(FailingStore));

    let (status, body) = send(&app, post_json("/api/v1/predict", wakad_request())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["price"]["rupees"].as_f64().unwrap() > 0.0);
    assert_eq!(body["logged"], false);
    assert!(body.get("search_id").is_none());
    assert!(body["warning"].as_str().unwrap().contains("connection refused"));

    let (status, body) = send(&app, get("/api/v1/insights")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Search history unavailable");

    let (status, _) = send(&app, get("/api/v1/searches")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
