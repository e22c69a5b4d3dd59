// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route map routes.

use crate::error::{AppError, Result};
use crate::models::RouteSummary;
use crate::routes::plans::json_body;
use crate::services::decode_route;
use crate::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Longer than any activity summary polyline.
const MAX_POLYLINE_LEN: usize = 100_000;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/routes/decode", post(decode))
}

#[derive(Deserialize)]
struct DecodeRequest {
    polyline: String,
}

/// Decode an encoded activity polyline into map points.
async fn decode(
    payload: std::result::Result<Json<DecodeRequest>, JsonRejection>,
) -> Result<Json<RouteSummary>> {
    let request = json_body(payload)?;
    if request.polyline.len() > MAX_POLYLINE_LEN {
        return Err(AppError::BadRequest(format!(
            "Polyline exceeds {} characters",
            MAX_POLYLINE_LEN
        )));
    }

    Ok(Json(decode_route(&request.polyline)?))
}
