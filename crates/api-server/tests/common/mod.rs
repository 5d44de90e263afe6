//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use cineforecast_analytics::SampleCatalog;
use cineforecast_api::ApiServer;
use cineforecast_core::config::{AppConfig, SampleConfig, ValidationMode};
use cineforecast_engine::RevenuePredictor;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_MOVIE_COUNT: usize = 10;

pub fn build_test_app_with_mode(mode: ValidationMode) -> Router {
    let config = AppConfig {
        node_id: "test-node".to_string(),
        ..AppConfig::default()
    };
    let catalog = SampleCatalog::build(&SampleConfig {
        seed: 42,
        movie_count: TEST_MOVIE_COUNT,
    });
    ApiServer::new(
        config,
        Arc::new(RevenuePredictor::with_mode(mode)),
        Arc::new(catalog),
    )
    .router()
}

pub fn build_test_app() -> Router {
    build_test_app_with_mode(ValidationMode::Lenient)
}

pub fn reference_input() -> serde_json::Value {
    serde_json::json!({
        "budget": 50_000_000.0,
        "popularity": 50.0,
        "runtime": 120.0,
        "vote_average": 7.5,
        "vote_count": 5000,
        "original_language": "en",
        "num_genres": 2,
        "num_production_companies": 2
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
