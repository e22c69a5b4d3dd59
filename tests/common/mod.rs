// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use meterun::config::Config;
use meterun::routes::create_router;
use meterun::AppState;
use serde_json::Value;
use std::sync::Arc;

/// Create a test app with the default test configuration.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
    });
    (create_router(state.clone()), state)
}

/// Build a JSON POST request.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// Today's UTC date shifted by `days`, formatted for requests.
#[allow(dead_code)]
pub fn date_in(days: i64) -> String {
    (meterun::time_utils::today_utc() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// A fixed generation date (a Wednesday).
#[allow(dead_code)]
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
}
